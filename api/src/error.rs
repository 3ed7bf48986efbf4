//! API Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tipjar_chain::ChainError;
use tipjar_core::LedgerError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Chain unavailable: {0}")]
    Chain(String),
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Validation(msg) => ApiError::BadRequest(msg),
            LedgerError::NotFound(msg) => ApiError::NotFound(msg),
        }
    }
}

impl From<ChainError> for ApiError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::InvalidAddress(addr) => ApiError::InvalidAddress(addr),
            ChainError::InvalidSignature(sig) => ApiError::InvalidSignature(sig),
            other => ApiError::Chain(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::InvalidAddress(addr) => (
                StatusCode::BAD_REQUEST,
                "invalid_address",
                format!("{} is not a valid wallet address", addr),
            ),
            ApiError::InvalidSignature(sig) => (
                StatusCode::BAD_REQUEST,
                "invalid_signature",
                format!("{} is not a valid transaction signature", sig),
            ),
            ApiError::Chain(msg) => (StatusCode::BAD_GATEWAY, "chain_unavailable", msg),
        };

        let body = Json(json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}
