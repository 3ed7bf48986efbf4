//! tipjar chain access
//!
//! Balance and transaction lookups against a Solana JSON-RPC node. Every
//! call is remote and fallible; callers decide how to surface failures.

pub mod address;
mod error;
pub mod rpc;

pub use address::{parse_address, parse_signature};
pub use error::{ChainError, ChainResult};
pub use rpc::SolanaRpcClient;

use async_trait::async_trait;
use tipjar_core::Lamports;

/// Remote chain lookups used by the HTTP layer
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current balance of `address` in lamports
    async fn get_balance(&self, address: &str) -> ChainResult<Lamports>;

    /// Whether the node knows a confirmed transaction with this signature
    async fn get_transaction_confirmed(&self, signature: &str) -> ChainResult<bool>;
}
