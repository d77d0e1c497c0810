use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;

use crate::core::client::database::Pinger;
use crate::core::config::Config;
use crate::types::params::ServerParams;

pub mod error;
pub mod middleware;
pub mod route;
pub mod types;

/// Assembles the application router from the shared config.
pub fn router(config: &Config) -> Router {
    let pinger: Arc<dyn Pinger> = config.database();
    Router::new()
        .merge(route::health_router(pinger))
        .merge(route::order_router(config.repository()))
        .fallback(handler_404)
}

/// Binds the listener and serves the router on a background task,
/// returning the bound address.
pub async fn setup_server(config: Arc<Config>) -> SocketAddr {
    let (address, listener) = bind_listener(config.server_config()).await;
    let app = router(&config);

    tracing::info!(%address, "server listening");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Failed to start axum server");
    });

    address
}

async fn bind_listener(server_params: &ServerParams) -> (SocketAddr, tokio::net::TcpListener) {
    let address = format!("{}:{}", server_params.host, server_params.port);
    let listener = tokio::net::TcpListener::bind(address.clone()).await.expect("Failed to get listener");
    let address = listener.local_addr().expect("Unable to bind address to listener.");
    (address, listener)
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}
