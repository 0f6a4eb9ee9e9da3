mod pg;
mod rows;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Driver, DriverId, NewRide, RideId, RideRecord};
use crate::error::Error;

pub use pg::PgStore;

/// Read-only access to the known drivers.
#[async_trait]
pub trait DriverCatalog {
    /// Fails with `NOT_FOUND` when the catalog is empty.
    async fn list_all(&self) -> Result<Vec<Driver>, Error>;

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, Error>;

    /// Drivers whose `min_km` is at most `distance_km`, in catalog order.
    /// Fails with `NOT_FOUND` when none qualify.
    async fn find_eligible(&self, distance_km: i32) -> Result<Vec<Driver>, Error>;
}

#[async_trait]
pub trait RideStore {
    async fn insert_ride(&self, ride: NewRide) -> Result<RideId, Error>;

    /// Rides of one customer, most recent first. An empty result is not an
    /// error at this layer.
    async fn list_rides(
        &self,
        customer_id: &str,
        driver_id: Option<DriverId>,
    ) -> Result<Vec<RideRecord>, Error>;
}

pub type DynDriverCatalog = Arc<dyn DriverCatalog + Send + Sync>;
pub type DynRideStore = Arc<dyn RideStore + Send + Sync>;
