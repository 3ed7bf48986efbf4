//! Ledger facade
//!
//! One `Ledger` per process. Every public operation is a single `&mut self`
//! or `&self` call, so wrapping the ledger in one lock makes each of them
//! indivisible to concurrent callers.

use crate::amount::Lamports;
use crate::error::{LedgerError, LedgerResult};
use crate::leaderboard;
use crate::model::{Post, PostId, Tip, TipReceipt, User};
use crate::posts;
use crate::store::LedgerStore;
use crate::tips;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A user's stats together with their posts, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub stats: User,
    pub posts: Vec<Post>,
}

#[derive(Debug, Default)]
pub struct Ledger {
    store: LedgerStore,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only access to the underlying tables
    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn create_post(
        &mut self,
        wallet: &str,
        content: &str,
        signature: Option<String>,
    ) -> LedgerResult<Post> {
        self.create_post_at(wallet, content, signature, now_millis())
    }

    pub fn create_post_at(
        &mut self,
        wallet: &str,
        content: &str,
        signature: Option<String>,
        now: i64,
    ) -> LedgerResult<Post> {
        posts::create_post(&mut self.store, wallet, content, signature, now)
    }

    pub fn post(&self, id: PostId) -> LedgerResult<Post> {
        posts::get_post(&self.store, id)
    }

    pub fn list_posts(&self) -> Vec<Post> {
        posts::list_posts(&self.store)
    }

    pub fn list_posts_by_wallet(&self, wallet: &str) -> Vec<Post> {
        posts::list_posts_by_wallet(&self.store, wallet)
    }

    /// Tip a post. `amount` defaults to [`tips::DEFAULT_TIP_LAMPORTS`].
    pub fn tip_post(
        &mut self,
        post_id: PostId,
        from_wallet: &str,
        amount: Option<Lamports>,
        tx_signature: Option<String>,
    ) -> LedgerResult<TipReceipt> {
        self.tip_post_at(post_id, from_wallet, amount, tx_signature, now_millis())
    }

    pub fn tip_post_at(
        &mut self,
        post_id: PostId,
        from_wallet: &str,
        amount: Option<Lamports>,
        tx_signature: Option<String>,
        now: i64,
    ) -> LedgerResult<TipReceipt> {
        let amount = amount.unwrap_or(tips::DEFAULT_TIP_LAMPORTS);
        tips::tip_post(&mut self.store, post_id, from_wallet, amount, tx_signature, now)
    }

    pub fn tips_for_post(&self, post_id: PostId) -> LedgerResult<Vec<Tip>> {
        tips::tips_for_post(&self.store, post_id)
    }

    pub fn top_users(&self, limit: usize) -> Vec<User> {
        leaderboard::top_users(&self.store, limit)
    }

    /// Profile lookup. Like every other wallet reference, this creates the
    /// user if it has never been seen.
    pub fn user_profile(&mut self, wallet: &str) -> LedgerResult<UserProfile> {
        self.user_profile_at(wallet, now_millis())
    }

    pub fn user_profile_at(&mut self, wallet: &str, now: i64) -> LedgerResult<UserProfile> {
        if wallet.is_empty() {
            return Err(LedgerError::validation("Wallet address required"));
        }

        let stats = self.store.upsert_user(wallet, now).clone();
        let posts = posts::list_posts_by_wallet(&self.store, wallet);

        Ok(UserProfile { stats, posts })
    }
}
