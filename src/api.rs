use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{ConfirmRide, Driver, FareOptions, RideEstimate, RideHistory};
use crate::error::Error;

#[async_trait]
pub trait EstimateAPI {
    /// Ranks and prices the drivers eligible for `distance_km`.
    async fn estimate_fares(&self, distance_km: f64) -> Result<FareOptions, Error>;

    async fn estimate_ride(
        &self,
        origin: Option<String>,
        destination: Option<String>,
    ) -> Result<RideEstimate, Error>;
}

#[async_trait]
pub trait RideAPI {
    async fn confirm_ride(&self, request: ConfirmRide) -> Result<(), Error>;

    async fn list_rides(
        &self,
        customer_id: Option<String>,
        driver_id: Option<String>,
    ) -> Result<RideHistory, Error>;
}

#[async_trait]
pub trait DriverAPI {
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error>;
}

pub trait API: EstimateAPI + RideAPI + DriverAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
