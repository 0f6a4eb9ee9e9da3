use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Driver;
use crate::error::Error;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Driver>>, Error> {
    let drivers = api.list_drivers().await?;

    Ok(drivers.into())
}
