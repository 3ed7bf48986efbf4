//! Request and response bodies
//!
//! Amounts travel as SOL on the wire, with the exact lamport value alongside.

use serde::{Deserialize, Serialize};
use tipjar_core::{lamports_to_sol, Lamports, Post, Tip, User};

/// Treat `""` the same as an absent field
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub wallet: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TipRequest {
    #[serde(default)]
    pub from_wallet: Option<String>,
    /// SOL; defaults to 0.01
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub tx_signature: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TransferPrepareRequest {
    #[serde(default)]
    pub from_wallet: Option<String>,
    #[serde(default)]
    pub to_wallet: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyTransactionRequest {
    #[serde(default)]
    pub signature: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: u64,
    pub wallet: String,
    pub content: String,
    pub timestamp: i64,
    pub tips_received: f64,
    pub tips_received_lamports: Lamports,
    pub tip_count: u64,
    pub signature: Option<String>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            wallet: post.wallet,
            content: post.content,
            timestamp: post.timestamp,
            tips_received: lamports_to_sol(post.tips_received),
            tips_received_lamports: post.tips_received,
            tip_count: post.tip_count,
            signature: post.signature,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub wallet: String,
    pub total_tips_received: f64,
    pub total_tips_received_lamports: Lamports,
    pub total_tips_given: f64,
    pub total_tips_given_lamports: Lamports,
    pub reputation_score: u32,
    pub level: String,
    pub post_count: u64,
    pub joined_at: i64,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            level: user.level().to_string(),
            total_tips_received: lamports_to_sol(user.total_tips_received),
            total_tips_received_lamports: user.total_tips_received,
            total_tips_given: lamports_to_sol(user.total_tips_given),
            total_tips_given_lamports: user.total_tips_given,
            reputation_score: user.reputation_score,
            post_count: user.post_count,
            joined_at: user.joined_at,
            wallet: user.wallet,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipView {
    pub post_id: u64,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount_sol: f64,
    pub amount_lamports: Lamports,
    pub tx_signature: Option<String>,
    pub timestamp: i64,
}

impl From<Tip> for TipView {
    fn from(tip: Tip) -> Self {
        Self {
            post_id: tip.post_id,
            from_wallet: tip.from_wallet,
            to_wallet: tip.to_wallet,
            amount_sol: lamports_to_sol(tip.amount),
            amount_lamports: tip.amount,
            tx_signature: tip.tx_signature,
            timestamp: tip.timestamp,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TipResponse {
    pub success: bool,
    pub post: PostView,
    pub tip: TipView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub wallet: String,
    pub stats: UserView,
    pub posts: Vec<PostView>,
    pub balance_sol: f64,
    pub balance_lamports: Lamports,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub wallet: String,
    pub balance_lamports: Lamports,
    pub balance_sol: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransferPlanResponse {
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount_lamports: Lamports,
    pub amount_sol: f64,
    pub network: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTransactionResponse {
    pub verified: bool,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub network: String,
    pub uptime_secs: u64,
}
