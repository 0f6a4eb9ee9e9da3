pub mod google_maps;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

use crate::entities::Coordinates;
use crate::error::Error;

pub use google_maps::GoogleMaps;

/// Geocoded routing between two free-form addresses.
#[async_trait]
pub trait MappingProvider {
    /// Zero routes is a valid answer, not an error.
    async fn directions(&self, origin: &str, destination: &str) -> Result<Directions, Error>;
}

pub type DynMappingProvider = Arc<dyn MappingProvider + Send + Sync>;

#[derive(Clone, Debug, PartialEq)]
pub struct Directions {
    pub routes: Vec<DirectionsRoute>,
    /// Provider payload, passed through to the caller untouched.
    pub raw: Value,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: LatLng,
    pub end_location: LatLng,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinates {
    fn from(location: LatLng) -> Self {
        Coordinates::new(location.lat, location.lng)
    }
}
