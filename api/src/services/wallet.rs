//! Wallet service - chain-backed lookups
//!
//! Every call here goes to the remote RPC node and can fail or stall; none
//! of them touch the ledger.

use crate::{ApiError, ApiResult};
use std::sync::Arc;
use tipjar_chain::{parse_address, ChainClient};
use tipjar_core::{sol_to_lamports, Lamports, DEFAULT_TIP_LAMPORTS};

/// Service for wallet operations
#[derive(Clone)]
pub struct WalletService {
    chain: Arc<dyn ChainClient>,
    network: String,
}

/// Transfer parameters a client needs to build the on-chain transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPlan {
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount_lamports: Lamports,
    pub network: String,
}

impl WalletService {
    /// Create a new wallet service
    pub fn new(chain: Arc<dyn ChainClient>, network: String) -> Self {
        Self { chain, network }
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    /// Get wallet balance
    pub async fn get_balance(&self, wallet: &str) -> ApiResult<Lamports> {
        Ok(self.chain.get_balance(wallet).await?)
    }

    /// Balance for display; any failure reads as zero
    pub async fn balance_or_zero(&self, wallet: &str) -> Lamports {
        match self.chain.get_balance(wallet).await {
            Ok(balance) => balance,
            Err(e) => {
                tracing::warn!("⚠️ Balance lookup for {} failed: {}", wallet, e);
                0
            }
        }
    }

    /// Whether the chain has a confirmed transaction with this signature
    pub async fn verify_transaction(&self, signature: &str) -> ApiResult<bool> {
        if signature.is_empty() {
            return Err(ApiError::BadRequest(
                "Transaction signature required".to_string(),
            ));
        }
        Ok(self.chain.get_transaction_confirmed(signature).await?)
    }

    /// Validate both ends of a tip transfer and convert the amount
    pub fn prepare_transfer(
        &self,
        from_wallet: &str,
        to_wallet: &str,
        amount_sol: Option<f64>,
    ) -> ApiResult<TransferPlan> {
        if from_wallet.is_empty() || to_wallet.is_empty() {
            return Err(ApiError::BadRequest(
                "Both wallet addresses required".to_string(),
            ));
        }

        parse_address(from_wallet)?;
        parse_address(to_wallet)?;

        let amount_lamports = match amount_sol {
            Some(sol) => sol_to_lamports(sol)
                .ok_or_else(|| ApiError::BadRequest(format!("Invalid amount: {}", sol)))?,
            None => DEFAULT_TIP_LAMPORTS,
        };

        Ok(TransferPlan {
            from_wallet: from_wallet.to_string(),
            to_wallet: to_wallet.to_string(),
            amount_lamports,
            network: self.network.clone(),
        })
    }
}
