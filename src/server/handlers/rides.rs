use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    Extension, Json, Path, Query,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::DynAPI;
use crate::entities::{ConfirmRide, RideEstimate, RideHistory};
use crate::error::{invalid_data_error, Error};

#[derive(Deserialize)]
pub struct EstimateParams {
    customer_id: Option<String>,
    origin: Option<String>,
    destination: Option<String>,
}

#[derive(Deserialize)]
pub struct HistoryParams {
    driver_id: Option<String>,
}

fn malformed_body(rejection: JsonRejection) -> Error {
    tracing::info!(error = %rejection, "rejected request body");
    invalid_data_error("the request body is malformed")
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<EstimateParams>, JsonRejection>,
) -> Result<Json<RideEstimate>, Error> {
    let Json(params) = params.map_err(malformed_body)?;

    tracing::info!(customer_id = ?params.customer_id, "estimating ride");

    let estimate = api.estimate_ride(params.origin, params.destination).await?;

    Ok(estimate.into())
}

pub async fn confirm(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<ConfirmRide>, JsonRejection>,
) -> Result<Json<Value>, Error> {
    let Json(params) = params.map_err(malformed_body)?;

    api.confirm_ride(params).await?;

    Ok(json!({ "success": true }).into())
}

pub async fn history(
    Extension(api): Extension<DynAPI>,
    Path(customer_id): Path<String>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<RideHistory>, Error> {
    let Query(params) = params.map_err(|rejection| {
        tracing::info!(error = %rejection, "rejected query string");
        invalid_data_error("the driver id filter is invalid")
    })?;

    let history = api.list_rides(Some(customer_id), params.driver_id).await?;

    Ok(history.into())
}
