use std::sync::Arc;

use rideshare::api::DynAPI;
use rideshare::config::Config;
use rideshare::db::PgStore;
use rideshare::engine::Engine;
use rideshare::error::Error;
use rideshare::external::GoogleMaps;
use rideshare::server::serve;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .init();

    let store = Arc::new(
        PgStore::new(&config.database_url, config.database_max_connections).await?,
    );

    store.migrate().await?;

    if config.seed_drivers {
        store.seed_drivers().await?;
    }

    let maps = GoogleMaps::new(
        config.google_maps_api_base.clone(),
        config.google_maps_api_key.clone(),
    );

    let engine = Engine::new(store.clone(), store.clone(), Arc::new(maps));

    let result = serve(Arc::new(engine) as DynAPI, config.port, shutdown_signal()).await;

    tracing::info!("closing database pool");
    store.close().await;

    result
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
