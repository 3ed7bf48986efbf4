//! User profile and leaderboard endpoints

use crate::constants::leaderboard_limit;
use crate::extract::{Path, Query};
use crate::models::{LeaderboardQuery, PostView, ProfileResponse, UserView};
use crate::{ok_json, ApiResult, ApiState};
use axum::{extract::State, routing::get, Json, Router};
use tipjar_core::lamports_to_sol;
use tracing as log;

/// Register user routes
pub fn user_routes() -> Router<ApiState> {
    Router::new()
        .route("/{wallet}", get(get_user_profile))
        .route("/{wallet}/posts", get(get_user_posts))
}

/// GET /api/user/{wallet}
///
/// Ledger stats first, then the chain balance with the ledger lock
/// released. A failed balance lookup renders as zero.
async fn get_user_profile(
    State(state): State<ApiState>,
    Path(wallet): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.ledger.user_profile(&wallet).await?;
    let balance = state.wallet.balance_or_zero(&wallet).await;

    log::debug!(wallet = %wallet, posts = profile.posts.len(), "profile_served");

    ok_json!(ProfileResponse {
        wallet,
        stats: UserView::from(profile.stats),
        posts: profile.posts.into_iter().map(PostView::from).collect(),
        balance_sol: lamports_to_sol(balance),
        balance_lamports: balance,
    })
}

/// GET /api/user/{wallet}/posts
async fn get_user_posts(
    State(state): State<ApiState>,
    Path(wallet): Path<String>,
) -> ApiResult<Json<Vec<PostView>>> {
    let posts = state.ledger.list_posts_by_wallet(&wallet).await;
    ok_json!(posts.into_iter().map(PostView::from).collect())
}

/// GET /api/leaderboard?limit=
pub(super) async fn get_leaderboard(
    State(state): State<ApiState>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<Vec<UserView>>> {
    let users = state.ledger.top_users(leaderboard_limit(query.limit)).await;
    ok_json!(users.into_iter().map(UserView::from).collect())
}
