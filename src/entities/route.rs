use serde::Serialize;
use serde_json::Value;

use crate::entities::{Coordinates, DriverOption};
use crate::error::{Code, Error};

/// Distance and duration of the first leg of the provider's first route.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEstimate {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub distance: f64,
    pub duration: String,
    pub raw: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Unavailable {
    pub error_code: Code,
    pub error_description: String,
}

impl From<Error> for Unavailable {
    fn from(err: Error) -> Self {
        Self {
            error_code: err.code,
            error_description: err.message,
        }
    }
}

/// Outcome of pricing a distance. `Unavailable` is a regular result, not a
/// failure: the estimate still carries the route.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FareOptions {
    Ranked(Vec<DriverOption>),
    Unavailable(Unavailable),
}

impl FareOptions {
    pub fn ranked(&self) -> Option<&[DriverOption]> {
        match self {
            Self::Ranked(options) => Some(options.as_slice()),
            Self::Unavailable(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RideEstimate {
    pub origin: Coordinates,
    pub destination: Coordinates,
    pub distance: f64,
    pub duration: String,
    pub options: FareOptions,
    #[serde(rename = "routeResponse")]
    pub route_response: Value,
}

impl RideEstimate {
    pub fn new(route: RouteEstimate, options: FareOptions) -> Self {
        Self {
            origin: route.origin,
            destination: route.destination,
            distance: route.distance,
            duration: route.duration,
            options,
            route_response: route.raw,
        }
    }
}
