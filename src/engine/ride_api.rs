use super::helpers::{optional_driver_id, required_text};
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RideAPI,
    entities::{ConfirmRide, NewRide, RideHistory},
    error::{
        driver_not_found_error, invalid_data_error, invalid_distance_error, no_rides_found_error,
        upstream_error, Error,
    },
};

#[async_trait]
impl RideAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn confirm_ride(&self, request: ConfirmRide) -> Result<(), Error> {
        let customer_id = required_text(request.customer_id, "customer_id")?;
        let origin = required_text(request.origin, "origin")?;
        let destination = required_text(request.destination, "destination")?;

        let driver_id = request
            .driver
            .and_then(|driver| driver.id)
            .ok_or_else(|| invalid_data_error("the driver field is required"))?;

        let value = match request.value {
            Some(value) if !value.is_blank() => value,
            _ => return Err(invalid_data_error("the value field is required")),
        };
        let value = value
            .parse()
            .filter(|value| *value >= 0.0)
            .ok_or_else(|| invalid_data_error("the value field is invalid"))?;

        let distance = request
            .distance
            .filter(|distance| distance.is_finite())
            .ok_or_else(|| invalid_data_error("the distance field is required"))?;

        if origin == destination {
            return Err(invalid_data_error(
                "origin and destination addresses must differ",
            ));
        }

        let driver = self
            .catalog
            .find_by_id(driver_id)
            .await
            .map_err(upstream_error)?
            .ok_or_else(driver_not_found_error)?;

        if !driver.accepts(distance) {
            tracing::info!(
                driver_id,
                distance,
                min_km = driver.min_km,
                "distance below driver minimum"
            );
            return Err(invalid_distance_error());
        }

        let ride = NewRide {
            customer_id,
            origin,
            destination,
            distance,
            duration: request.duration.unwrap_or_default(),
            driver_id,
            value,
        };

        let ride_id = self.rides.insert_ride(ride).await.map_err(upstream_error)?;

        tracing::info!(ride_id, driver_id, "ride confirmed");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list_rides(
        &self,
        customer_id: Option<String>,
        driver_id: Option<String>,
    ) -> Result<RideHistory, Error> {
        let customer_id = required_text(customer_id, "customer_id")?;
        let driver_id = optional_driver_id(driver_id)?;

        let rides = self
            .rides
            .list_rides(&customer_id, driver_id)
            .await
            .map_err(upstream_error)?;

        if rides.is_empty() {
            return Err(no_rides_found_error());
        }

        Ok(RideHistory { customer_id, rides })
    }
}
