mod driver_api;
mod estimate_api;
mod fares;
mod helpers;
mod ride_api;

use crate::{
    api::API,
    db::{DynDriverCatalog, DynRideStore},
    external::DynMappingProvider,
};

/// Request-scoped business logic over injected collaborators. Holds no
/// mutable state of its own.
pub struct Engine {
    catalog: DynDriverCatalog,
    rides: DynRideStore,
    maps: DynMappingProvider,
}

impl Engine {
    pub fn new(catalog: DynDriverCatalog, rides: DynRideStore, maps: DynMappingProvider) -> Self {
        Self {
            catalog,
            rides,
            maps,
        }
    }
}

impl API for Engine {}
