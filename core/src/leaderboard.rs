//! Reputation leaderboard

use crate::model::User;
use crate::store::LedgerStore;

pub const DEFAULT_LEADERBOARD_LIMIT: usize = 20;

/// Top `limit` users by reputation; equal scores keep creation order
pub fn top_users(store: &LedgerStore, limit: usize) -> Vec<User> {
    let mut users: Vec<&User> = store.users().iter().collect();
    users.sort_by(|a, b| b.reputation_score.cmp(&a.reputation_score));
    users.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_users_ordering() {
        let mut store = LedgerStore::new();
        store.upsert_user("A", 1).record_post();
        store.upsert_user("B", 2);
        store.upsert_user("C", 3).record_post();
        let d = store.upsert_user("D", 4);
        d.record_post();
        d.record_post();

        let wallets: Vec<_> = top_users(&store, 10).into_iter().map(|u| u.wallet).collect();
        assert_eq!(wallets, vec!["D", "A", "C", "B"]);
    }

    #[test]
    fn test_top_users_limit() {
        let mut store = LedgerStore::new();
        for i in 0..30 {
            store.upsert_user(&format!("W{}", i), i);
        }

        assert_eq!(top_users(&store, DEFAULT_LEADERBOARD_LIMIT).len(), 20);
        assert_eq!(top_users(&store, 0).len(), 0);
        assert_eq!(top_users(&store, 100).len(), 30);
    }
}
