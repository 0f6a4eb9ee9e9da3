use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Amount, DriverId, Fare};

pub type RideId = i32;

/// Confirmation input exactly as the client sent it. Every field is
/// optional here; the engine decides what is missing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfirmRide {
    pub customer_id: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub distance: Option<f64>,
    pub duration: Option<String>,
    pub driver: Option<DriverRef>,
    pub value: Option<Amount>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverRef {
    pub id: Option<DriverId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A validated ride, ready to be inserted.
#[derive(Clone, Debug, PartialEq)]
pub struct NewRide {
    pub customer_id: String,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub duration: String,
    pub driver_id: DriverId,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideDriver {
    pub id: DriverId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideRecord {
    pub id: RideId,
    pub date: DateTime<Utc>,
    pub origin: String,
    pub destination: String,
    pub distance: f64,
    pub duration: String,
    pub driver: RideDriver,
    pub value: Fare,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideHistory {
    pub customer_id: String,
    pub rides: Vec<RideRecord>,
}
