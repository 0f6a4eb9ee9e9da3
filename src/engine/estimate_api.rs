use super::fares::{eligibility_distance, rank_options};
use super::helpers::required_text;
use super::Engine;

use async_trait::async_trait;

use crate::{
    api::EstimateAPI,
    entities::{FareOptions, RideEstimate, RouteEstimate},
    error::{invalid_data_error, no_route_found_error, upstream_error, Error},
    external::Directions,
};

#[async_trait]
impl EstimateAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_fares(&self, distance_km: f64) -> Result<FareOptions, Error> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(invalid_data_error(
                "distance must be a finite, non-negative number",
            ));
        }

        let drivers = match self
            .catalog
            .find_eligible(eligibility_distance(distance_km))
            .await
        {
            Ok(drivers) => drivers,
            Err(err) if err.is_not_found_error() => {
                tracing::info!("no eligible drivers for distance");
                return Ok(FareOptions::Unavailable(err.into()));
            }
            Err(err) => return Err(err),
        };

        Ok(FareOptions::Ranked(rank_options(drivers, distance_km)))
    }

    #[tracing::instrument(skip(self))]
    async fn estimate_ride(
        &self,
        origin: Option<String>,
        destination: Option<String>,
    ) -> Result<RideEstimate, Error> {
        let origin = required_text(origin, "origin")?;
        let destination = required_text(destination, "destination")?;

        let directions = self
            .maps
            .directions(&origin, &destination)
            .await
            .map_err(upstream_error)?;

        let route = first_leg(directions)?;

        tracing::info!(
            distance = route.distance,
            duration = %route.duration,
            "route found"
        );

        // The distance comes from the provider, so a rejection here is the
        // provider's fault and not the caller's.
        let options = self
            .estimate_fares(route.distance)
            .await
            .map_err(upstream_error)?;

        Ok(RideEstimate::new(route, options))
    }
}

/// Only the first leg of the first route is priced. Alternatives and
/// waypoint legs are dropped.
fn first_leg(directions: Directions) -> Result<RouteEstimate, Error> {
    let Directions { routes, raw } = directions;

    if routes.len() > 1 {
        tracing::warn!(routes = routes.len(), "ignoring alternative routes");
    }

    let route = routes.into_iter().next().ok_or_else(no_route_found_error)?;

    if route.legs.len() > 1 {
        tracing::warn!(legs = route.legs.len(), "ignoring legs after the first");
    }

    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| upstream_error("route without legs"))?;

    Ok(RouteEstimate {
        origin: leg.start_location.into(),
        destination: leg.end_location.into(),
        distance: leg.distance.value / 1000.0,
        duration: leg.duration.text,
        raw,
    })
}
