mod handlers;

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::DynAPI;
use crate::error::{upstream_error, Error};
use crate::server::handlers::{drivers, rides};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/ride/estimate", post(rides::estimate))
        .route("/ride/confirm", patch(rides::confirm))
        .route("/ride/:customer_id", get(rides::history))
        .route("/driver/drivers", get(drivers::list))
        .layer(Extension(api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<F>(api: DynAPI, port: u16, shutdown: F) -> Result<(), Error>
where
    F: Future<Output = ()>,
{
    let app = router(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(upstream_error)
}
