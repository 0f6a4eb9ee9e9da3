use super::Engine;

use async_trait::async_trait;

use crate::{
    api::DriverAPI,
    entities::Driver,
    error::{upstream_error, Error},
};

#[async_trait]
impl DriverAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_drivers(&self) -> Result<Vec<Driver>, Error> {
        self.catalog.list_all().await.map_err(|err| {
            if err.is_not_found_error() {
                err
            } else {
                upstream_error(err)
            }
        })
    }
}
