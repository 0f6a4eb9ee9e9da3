use chrono::{DateTime, Utc};

use crate::entities::{Driver, DriverId, Fare, RideDriver, RideId, RideRecord};
use crate::error::{database_error, Error};

#[derive(Debug, sqlx::FromRow)]
pub struct DriverRow {
    pub id: DriverId,
    pub name: String,
    pub description: String,
    pub vehicle: String,
    pub rating: f64,
    pub rate_per_km: f64,
    pub min_km: i32,
}

impl TryFrom<DriverRow> for Driver {
    type Error = Error;

    fn try_from(row: DriverRow) -> Result<Self, Self::Error> {
        if !row.rate_per_km.is_finite() || row.rate_per_km < 0.0 {
            return Err(database_error(format!(
                "driver {} has invalid rate_per_km {}",
                row.id, row.rate_per_km
            )));
        }

        if row.min_km < 0 {
            return Err(database_error(format!(
                "driver {} has negative min_km {}",
                row.id, row.min_km
            )));
        }

        if !row.rating.is_finite() {
            return Err(database_error(format!(
                "driver {} has invalid rating",
                row.id
            )));
        }

        Ok(Driver {
            id: row.id,
            name: row.name,
            description: row.description,
            vehicle: row.vehicle,
            rating: row.rating,
            rate_per_km: row.rate_per_km,
            min_km: row.min_km,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct RideRow {
    pub id: RideId,
    pub date: DateTime<Utc>,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub duration: String,
    pub value: f64,
    pub driver_id: DriverId,
    pub driver_name: String,
}

impl From<RideRow> for RideRecord {
    fn from(row: RideRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            origin: row.origin,
            destination: row.destination,
            distance: row.distance,
            duration: row.duration,
            driver: RideDriver {
                id: row.driver_id,
                name: row.driver_name,
            },
            value: Fare::new(row.value),
        }
    }
}

pub fn into_drivers(rows: Vec<DriverRow>) -> Result<Vec<Driver>, Error> {
    rows.into_iter().map(Driver::try_from).collect()
}
