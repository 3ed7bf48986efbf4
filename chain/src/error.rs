//! Chain client error types

use thiserror::Error;

pub type ChainResult<T> = Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid transaction signature: {0}")]
    InvalidSignature(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error {0}")]
    Http(u16),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
