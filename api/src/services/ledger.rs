//! Ledger service - posts, tips and leaderboard over the shared ledger
//!
//! Writers hold the write lock for the whole operation, so a post or tip
//! is applied as one unit.

use crate::{ApiError, ApiResult};
use std::sync::Arc;
use tipjar_core::{sol_to_lamports, Ledger, Post, PostId, Tip, TipReceipt, User, UserProfile};
use tokio::sync::RwLock;

/// Service for ledger operations
#[derive(Clone)]
pub struct LedgerService {
    ledger: Arc<RwLock<Ledger>>,
}

impl LedgerService {
    /// Create a new ledger service
    pub fn new(ledger: Arc<RwLock<Ledger>>) -> Self {
        Self { ledger }
    }

    pub async fn create_post(
        &self,
        wallet: &str,
        content: &str,
        signature: Option<String>,
    ) -> ApiResult<Post> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.create_post(wallet, content, signature)?)
    }

    pub async fn get_post(&self, id: PostId) -> ApiResult<Post> {
        let ledger = self.ledger.read().await;
        Ok(ledger.post(id)?)
    }

    pub async fn list_posts(&self) -> Vec<Post> {
        self.ledger.read().await.list_posts()
    }

    pub async fn list_posts_by_wallet(&self, wallet: &str) -> Vec<Post> {
        self.ledger.read().await.list_posts_by_wallet(wallet)
    }

    /// Tip a post. `amount_sol` defaults to 0.01 SOL when absent.
    pub async fn tip_post(
        &self,
        post_id: PostId,
        from_wallet: &str,
        amount_sol: Option<f64>,
        tx_signature: Option<String>,
    ) -> ApiResult<TipReceipt> {
        let amount = amount_sol
            .map(|sol| {
                sol_to_lamports(sol)
                    .ok_or_else(|| ApiError::BadRequest(format!("Invalid tip amount: {}", sol)))
            })
            .transpose()?;

        let mut ledger = self.ledger.write().await;
        Ok(ledger.tip_post(post_id, from_wallet, amount, tx_signature)?)
    }

    pub async fn tips_for_post(&self, post_id: PostId) -> ApiResult<Vec<Tip>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.tips_for_post(post_id)?)
    }

    pub async fn top_users(&self, limit: usize) -> Vec<User> {
        self.ledger.read().await.top_users(limit)
    }

    /// Stats and posts for a wallet, creating the user on first sight
    pub async fn user_profile(&self, wallet: &str) -> ApiResult<UserProfile> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.user_profile(wallet)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> LedgerService {
        LedgerService::new(Arc::new(RwLock::new(Ledger::new())))
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let service = service();
        service.create_post("W1", "hello", None).await.unwrap();
        service.create_post("W2", "world", None).await.unwrap();

        assert_eq!(service.list_posts().await.len(), 2);
        assert_eq!(service.list_posts_by_wallet("W1").await.len(), 1);
        assert_eq!(service.get_post(2).await.unwrap().content, "world");
        assert!(matches!(
            service.get_post(3).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_tip_amount_conversion() {
        let service = service();
        service.create_post("W1", "hello", None).await.unwrap();

        let receipt = service.tip_post(1, "W2", Some(0.25), None).await.unwrap();
        assert_eq!(receipt.tip.amount, 250_000_000);

        let receipt = service.tip_post(1, "W2", None, None).await.unwrap();
        assert_eq!(receipt.tip.amount, 10_000_000);
        assert_eq!(receipt.post.tip_count, 2);
    }

    #[tokio::test]
    async fn test_negative_tip_rejected() {
        let service = service();
        service.create_post("W1", "hello", None).await.unwrap();

        let err = service
            .tip_post(1, "W2", Some(-1.0), None)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(service.tips_for_post(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_tips_are_all_counted() {
        let service = service();
        service.create_post("W1", "hello", None).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..50 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .tip_post(1, &format!("T{}", i), Some(0.1), None)
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let post = service.get_post(1).await.unwrap();
        assert_eq!(post.tip_count, 50);
        assert_eq!(post.tips_received, 5_000_000_000);

        let profile = service.user_profile("W1").await.unwrap();
        assert_eq!(profile.stats.total_tips_received, 5_000_000_000);
        // 5 SOL -> 50 points, plus 2 for the post
        assert_eq!(profile.stats.reputation_score, 52);
    }
}
