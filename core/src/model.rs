//! Ledger entities

use crate::amount::Lamports;
use crate::reputation::{reputation, ReputationLevel};
use serde::{Deserialize, Serialize};

/// Wallet address (opaque to the ledger)
pub type Wallet = String;

/// Post identifier, 1-based
pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub wallet: Wallet,
    pub total_tips_received: Lamports,
    pub total_tips_given: Lamports,
    pub reputation_score: u32,
    pub post_count: u64,
    /// Milliseconds since epoch
    pub joined_at: i64,
}

impl User {
    pub fn new(wallet: Wallet, joined_at: i64) -> Self {
        Self {
            wallet,
            total_tips_received: 0,
            total_tips_given: 0,
            reputation_score: 0,
            post_count: 0,
            joined_at,
        }
    }

    /// Record an authored post
    pub fn record_post(&mut self) {
        self.post_count = self.post_count.saturating_add(1);
        self.refresh_reputation();
    }

    /// Record a tip received on one of this user's posts
    pub fn record_tip_received(&mut self, amount: Lamports) {
        self.total_tips_received = self.total_tips_received.saturating_add(amount);
        self.refresh_reputation();
    }

    /// Record a tip sent to another user
    pub fn record_tip_given(&mut self, amount: Lamports) {
        self.total_tips_given = self.total_tips_given.saturating_add(amount);
    }

    pub fn refresh_reputation(&mut self) {
        self.reputation_score = reputation(self.total_tips_received, self.post_count);
    }

    pub fn level(&self) -> ReputationLevel {
        ReputationLevel::from_score(self.reputation_score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub wallet: Wallet,
    pub content: String,
    /// Milliseconds since epoch
    pub timestamp: i64,
    pub tips_received: Lamports,
    pub tip_count: u64,
    /// Submission signature supplied by the client, never validated
    pub signature: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub post_id: PostId,
    pub from_wallet: Wallet,
    pub to_wallet: Wallet,
    pub amount: Lamports,
    /// On-chain transfer signature claimed by the tipper
    pub tx_signature: Option<String>,
    /// Milliseconds since epoch
    pub timestamp: i64,
}

/// Result of a successful tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipReceipt {
    pub post: Post,
    pub tip: Tip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::LAMPORTS_PER_SOL;

    #[test]
    fn test_new_user() {
        let user = User::new("W1".to_string(), 1000);
        assert_eq!(user.reputation_score, 0);
        assert_eq!(user.post_count, 0);
        assert_eq!(user.joined_at, 1000);
        assert_eq!(user.level(), ReputationLevel::Newcomer);
    }

    #[test]
    fn test_user_updates() {
        let mut user = User::new("W1".to_string(), 1000);

        user.record_post();
        assert_eq!(user.reputation_score, 2);

        user.record_tip_received(LAMPORTS_PER_SOL);
        assert_eq!(user.reputation_score, 12);

        // Giving never changes the giver's own score
        user.record_tip_given(5 * LAMPORTS_PER_SOL);
        assert_eq!(user.reputation_score, 12);
        assert_eq!(user.total_tips_given, 5 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn test_tip_totals_saturate() {
        let mut user = User::new("W1".to_string(), 0);
        user.record_tip_received(u64::MAX);
        user.record_tip_received(1);
        assert_eq!(user.total_tips_received, u64::MAX);
        assert_eq!(user.reputation_score, 1000);
    }

    #[test]
    fn test_post_serialization() {
        let post = Post {
            id: 3,
            wallet: "W1".to_string(),
            content: "gm".to_string(),
            timestamp: 1000,
            tips_received: 0,
            tip_count: 0,
            signature: None,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json["signature"].is_null());

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }
}
