//! Handler-facing services
//!
//! `LedgerService` owns the lock around the shared ledger and converts SOL
//! amounts to lamports. `WalletService` wraps the chain client. Handlers
//! never touch either resource directly.

pub mod ledger;
pub mod wallet;

pub use ledger::LedgerService;
pub use wallet::{TransferPlan, WalletService};
