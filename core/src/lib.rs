//! tipjar Core Library
//!
//! In-memory tipping ledger: posts, users, tips and the reputation model
//! that ties them together.

pub mod amount;
pub mod error;
pub mod leaderboard;
pub mod ledger;
pub mod model;
pub mod posts;
pub mod reputation;
pub mod store;
pub mod tips;

// Re-export main types
pub use amount::{lamports_to_sol, sol_to_lamports, Lamports, LAMPORTS_PER_SOL};
pub use error::{LedgerError, LedgerResult};
pub use leaderboard::DEFAULT_LEADERBOARD_LIMIT;
pub use ledger::{Ledger, UserProfile};
pub use model::{Post, PostId, Tip, TipReceipt, User, Wallet};
pub use posts::MAX_CONTENT_CHARS;
pub use reputation::{reputation, ReputationLevel, MAX_REPUTATION};
pub use store::LedgerStore;
pub use tips::DEFAULT_TIP_LAMPORTS;
