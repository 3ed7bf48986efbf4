//! Ledger Store
//!
//! Owns the three in-memory tables (posts, users, tips by post). Lookups
//! that miss return `None`; nothing here fails.

use crate::model::{Post, PostId, Tip, User};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct LedgerStore {
    /// Posts in insertion order
    posts: Vec<Post>,
    post_index: HashMap<PostId, usize>,

    /// Users in creation order
    users: Vec<User>,
    user_index: HashMap<String, usize>,

    tips: HashMap<PostId, Vec<Tip>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the user for `wallet`, creating a zero-valued entry first if
    /// none exists. Idempotent; `joined_at` is only set on creation.
    pub fn upsert_user(&mut self, wallet: &str, now: i64) -> &mut User {
        let idx = match self.user_index.get(wallet) {
            Some(&idx) => idx,
            None => {
                let idx = self.users.len();
                self.users.push(User::new(wallet.to_string(), now));
                self.user_index.insert(wallet.to_string(), idx);
                log::debug!("New user {} joined at {}", wallet, now);
                idx
            }
        };
        &mut self.users[idx]
    }

    pub fn user(&self, wallet: &str) -> Option<&User> {
        self.user_index.get(wallet).map(|&idx| &self.users[idx])
    }

    /// All users in creation order
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Id the next appended post will carry
    pub fn next_post_id(&self) -> PostId {
        self.posts.len() as PostId + 1
    }

    pub fn append_post(&mut self, post: Post) {
        self.post_index.insert(post.id, self.posts.len());
        self.posts.push(post);
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.post_index.get(&id).map(|&idx| &self.posts[idx])
    }

    pub fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        match self.post_index.get(&id) {
            Some(&idx) => Some(&mut self.posts[idx]),
            None => None,
        }
    }

    /// All posts in insertion order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn append_tip(&mut self, tip: Tip) {
        self.tips.entry(tip.post_id).or_default().push(tip);
    }

    /// Tips recorded against a post, oldest first
    pub fn tips_for(&self, post_id: PostId) -> &[Tip] {
        self.tips.get(&post_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn tip_count(&self) -> usize {
        self.tips.values().map(Vec::len).sum()
    }
}
