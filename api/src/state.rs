//! API State Management

use crate::services::{LedgerService, WalletService};
use std::sync::Arc;
use tipjar_chain::ChainClient;
use tipjar_core::Ledger;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct ApiState {
    pub ledger: LedgerService,
    pub wallet: WalletService,
    pub start_time: std::time::Instant,
}

impl ApiState {
    /// State with a fresh, empty ledger
    pub fn new(network: String, chain: Arc<dyn ChainClient>) -> Self {
        Self::with_ledger(network, chain, Arc::new(RwLock::new(Ledger::new())))
    }

    /// State over an existing ledger handle
    pub fn with_ledger(
        network: String,
        chain: Arc<dyn ChainClient>,
        ledger: Arc<RwLock<Ledger>>,
    ) -> Self {
        Self {
            ledger: LedgerService::new(ledger),
            wallet: WalletService::new(chain, network),
            start_time: std::time::Instant::now(),
        }
    }

    pub fn network(&self) -> &str {
        self.wallet.network()
    }
}
