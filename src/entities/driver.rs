use serde::{Deserialize, Serialize};

use crate::entities::Fare;

pub type DriverId = i32;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub description: String,
    pub vehicle: String,
    pub rating: f64,
    pub rate_per_km: f64,
    pub min_km: i32,
}

impl Driver {
    pub fn accepts(&self, distance_km: f64) -> bool {
        distance_km >= f64::from(self.min_km)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Review {
    pub rating: f64,
    pub comment: String,
}

/// A driver priced for one specific trip distance.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DriverOption {
    pub id: DriverId,
    pub name: String,
    pub description: String,
    pub vehicle: String,
    pub review: Review,
    pub value: Fare,
}

impl DriverOption {
    pub fn new(driver: Driver, distance_km: f64) -> Self {
        let value = Fare::quote(driver.rate_per_km, distance_km);

        Self {
            id: driver.id,
            name: driver.name,
            description: driver.description,
            vehicle: driver.vehicle,
            review: Review {
                rating: driver.rating,
                comment: "".into(),
            },
            value,
        }
    }
}
