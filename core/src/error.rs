//! Ledger error types

use thiserror::Error;

pub type LedgerResult<T> = Result<T, LedgerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Bad or missing caller input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl LedgerError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn post_not_found(post_id: u64) -> Self {
        Self::NotFound(format!("Post {} not found", post_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::validation("Wallet and content required");
        assert_eq!(err.to_string(), "Validation failed: Wallet and content required");

        let err = LedgerError::post_not_found(7);
        assert_eq!(err.to_string(), "Not found: Post 7 not found");
    }
}
