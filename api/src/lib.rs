//! tipjar HTTP API
//!
//! JSON endpoints over the tipping ledger and the chain RPC client.

pub mod constants;
mod error;
mod extract;
pub mod models;
mod response;
mod routes;
pub mod services;
mod state;

pub use error::{ApiError, ApiResult};
pub use state::ApiState;

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    Method,
};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the application router with CORS and request tracing
pub fn create_app(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    routes::create_routes()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server(
    addr: SocketAddr,
    state: ApiState,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 tipjar API listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
