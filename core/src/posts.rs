//! Post creation and feed ordering

use crate::error::{LedgerError, LedgerResult};
use crate::model::{Post, PostId};
use crate::store::LedgerStore;

/// Maximum post length in characters
pub const MAX_CONTENT_CHARS: usize = 280;

fn validate_post(wallet: &str, content: &str) -> LedgerResult<()> {
    if wallet.is_empty() || content.is_empty() {
        return Err(LedgerError::validation("Wallet and content required"));
    }

    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(LedgerError::validation(format!(
            "Post content too long (max {} chars)",
            MAX_CONTENT_CHARS
        )));
    }

    Ok(())
}

/// Validate, then credit the author and append the post.
///
/// Nothing is written when validation fails.
pub fn create_post(
    store: &mut LedgerStore,
    wallet: &str,
    content: &str,
    signature: Option<String>,
    now: i64,
) -> LedgerResult<Post> {
    validate_post(wallet, content)?;

    let author = store.upsert_user(wallet, now);
    author.record_post();
    let reputation = author.reputation_score;

    let post = Post {
        id: store.next_post_id(),
        wallet: wallet.to_string(),
        content: content.to_string(),
        timestamp: now,
        tips_received: 0,
        tip_count: 0,
        signature,
    };
    store.append_post(post.clone());

    log::info!(
        "Post {} created by {} (reputation {})",
        post.id,
        wallet,
        reputation
    );

    Ok(post)
}

pub fn get_post(store: &LedgerStore, id: PostId) -> LedgerResult<Post> {
    store
        .post(id)
        .cloned()
        .ok_or_else(|| LedgerError::post_not_found(id))
}

/// Newest first; posts sharing a timestamp keep insertion order
fn newest_first<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<Post> {
    let mut posts: Vec<Post> = posts.cloned().collect();
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    posts
}

pub fn list_posts(store: &LedgerStore) -> Vec<Post> {
    newest_first(store.posts().iter())
}

pub fn list_posts_by_wallet(store: &LedgerStore, wallet: &str) -> Vec<Post> {
    newest_first(store.posts().iter().filter(|p| p.wallet == wallet))
}
