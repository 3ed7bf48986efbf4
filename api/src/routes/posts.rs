//! Feed endpoints: posts and tips

use crate::extract::{JsonBody, Path};
use crate::models::{non_empty, CreatePostRequest, PostView, TipRequest, TipResponse, TipView};
use crate::{ok_json, ApiResult, ApiState};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing as log;

/// Register post routes
pub fn post_routes() -> Router<ApiState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/{id}", get(get_post))
        .route("/{id}/tips", get(list_tips))
        .route("/{id}/tip", post(tip_post))
}

/// GET /api/posts
async fn list_posts(State(state): State<ApiState>) -> ApiResult<Json<Vec<PostView>>> {
    let posts = state.ledger.list_posts().await;
    ok_json!(posts.into_iter().map(PostView::from).collect())
}

/// POST /api/posts
async fn create_post(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostView>)> {
    let post = state
        .ledger
        .create_post(
            request.wallet.as_deref().unwrap_or_default(),
            request.content.as_deref().unwrap_or_default(),
            non_empty(request.signature),
        )
        .await?;

    log::info!(post_id = post.id, wallet = %post.wallet, "📝 post_created");

    Ok((StatusCode::CREATED, Json(PostView::from(post))))
}

/// GET /api/posts/{id}
async fn get_post(State(state): State<ApiState>, Path(id): Path<u64>) -> ApiResult<Json<PostView>> {
    let post = state.ledger.get_post(id).await?;
    ok_json!(PostView::from(post))
}

/// GET /api/posts/{id}/tips
async fn list_tips(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Vec<TipView>>> {
    let tips = state.ledger.tips_for_post(id).await?;
    ok_json!(tips.into_iter().map(TipView::from).collect())
}

/// POST /api/posts/{id}/tip
async fn tip_post(
    State(state): State<ApiState>,
    Path(id): Path<u64>,
    JsonBody(request): JsonBody<TipRequest>,
) -> ApiResult<Json<TipResponse>> {
    let receipt = state
        .ledger
        .tip_post(
            id,
            request.from_wallet.as_deref().unwrap_or_default(),
            request.amount,
            non_empty(request.tx_signature),
        )
        .await?;

    log::info!(
        post_id = id,
        from = %receipt.tip.from_wallet,
        to = %receipt.tip.to_wallet,
        lamports = receipt.tip.amount,
        "💸 tip_recorded"
    );

    ok_json!(TipResponse {
        success: true,
        post: PostView::from(receipt.post),
        tip: TipView::from(receipt.tip),
    })
}
