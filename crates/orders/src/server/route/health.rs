use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::core::client::database::Pinger;
use crate::server::types::StatusResponse;

/// Liveness and readiness routes. Readiness needs nothing but the ping
/// capability of the connection manager.
pub fn health_router(pinger: Arc<dyn Pinger>) -> Router {
    Router::new().route("/health", get(health)).route("/status", get(status)).with_state(pinger)
}

/// Liveness probe; reports on the process only.
async fn health() -> &'static str {
    "UP"
}

/// Readiness probe; answers 503 while the store is unreachable so load
/// balancers stop routing traffic here.
async fn status(State(pinger): State<Arc<dyn Pinger>>) -> (StatusCode, Json<StatusResponse>) {
    match pinger.ping().await {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::up())),
        Err(error) => {
            tracing::error!(error = %error, "database health probe failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(StatusResponse::down()))
        }
    }
}
