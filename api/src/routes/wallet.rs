//! Chain-backed wallet endpoints

use crate::extract::{JsonBody, Path};
use crate::models::{
    BalanceResponse, TransferPlanResponse, TransferPrepareRequest, VerifyTransactionRequest,
    VerifyTransactionResponse,
};
use crate::{ok_json, ApiResult, ApiState};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tipjar_core::lamports_to_sol;
use tracing as log;

/// Balance route, mounted at `/api/balance`
pub fn balance_routes() -> Router<ApiState> {
    Router::new().route("/{wallet}", get(get_balance))
}

/// Transfer and verification routes, mounted at `/api`
pub fn transfer_routes() -> Router<ApiState> {
    Router::new()
        .route("/transfer/prepare", post(prepare_transfer))
        .route("/transaction/verify", post(verify_transaction))
}

/// GET /api/balance/{wallet}
async fn get_balance(
    State(state): State<ApiState>,
    Path(wallet): Path<String>,
) -> ApiResult<Json<BalanceResponse>> {
    let balance = state.wallet.get_balance(&wallet).await?;

    log::info!("📊 Balance query for {}: {} lamports", wallet, balance);

    ok_json!(BalanceResponse {
        wallet,
        balance_lamports: balance,
        balance_sol: lamports_to_sol(balance),
    })
}

/// POST /api/transfer/prepare
async fn prepare_transfer(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<TransferPrepareRequest>,
) -> ApiResult<Json<TransferPlanResponse>> {
    let plan = state.wallet.prepare_transfer(
        request.from_wallet.as_deref().unwrap_or_default(),
        request.to_wallet.as_deref().unwrap_or_default(),
        request.amount,
    )?;

    ok_json!(TransferPlanResponse {
        amount_sol: lamports_to_sol(plan.amount_lamports),
        from_wallet: plan.from_wallet,
        to_wallet: plan.to_wallet,
        amount_lamports: plan.amount_lamports,
        network: plan.network,
    })
}

/// POST /api/transaction/verify
async fn verify_transaction(
    State(state): State<ApiState>,
    JsonBody(request): JsonBody<VerifyTransactionRequest>,
) -> ApiResult<Json<VerifyTransactionResponse>> {
    let signature = request.signature.unwrap_or_default();
    let verified = state.wallet.verify_transaction(&signature).await?;

    log::info!(signature = %signature, verified = verified, "🔍 transaction_verified");

    let message = (!verified).then(|| "Transaction not found or not confirmed".to_string());
    ok_json!(VerifyTransactionResponse {
        verified,
        signature,
        message,
    })
}
