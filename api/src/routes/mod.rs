//! API routes organization
//!
//! All endpoints live under `/api`, grouped by domain:
//! - `posts` - Feed, post creation and tipping
//! - `users` - Profiles and the reputation leaderboard
//! - `wallet` - Chain balance, transfer preparation, transaction checks
//!
//! Each submodule is responsible for its own domain and exports a router function.

mod posts;
mod users;
mod wallet;

use crate::models::HealthResponse;
use crate::ApiState;
use axum::{extract::State, routing::get, Json, Router};

/// Create the main router with all API endpoints
pub fn create_routes() -> Router<ApiState> {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/leaderboard", get(users::get_leaderboard))
        .nest("/posts", posts::post_routes())
        .nest("/user", users::user_routes())
        .nest("/balance", wallet::balance_routes())
        .merge(wallet::transfer_routes());

    Router::new().route("/", get(root)).nest("/api", api)
}

// Root endpoints

async fn root() -> &'static str {
    "tipjar API"
}

async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        network: state.network().to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
