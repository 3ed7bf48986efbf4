//! Tipping
//!
//! A tip is bookkeeping for a transfer the tipper claims to have made on
//! chain. The amount is trusted; nothing here checks balances.

use crate::amount::Lamports;
use crate::error::{LedgerError, LedgerResult};
use crate::model::{PostId, Tip, TipReceipt};
use crate::store::LedgerStore;

/// Default tip: 0.01 SOL
pub const DEFAULT_TIP_LAMPORTS: Lamports = 10_000_000;

/// Apply a tip to a post, its author and the tipper.
///
/// All checks run before the first write, so a rejected tip leaves the
/// store untouched.
pub fn tip_post(
    store: &mut LedgerStore,
    post_id: PostId,
    from_wallet: &str,
    amount: Lamports,
    tx_signature: Option<String>,
    now: i64,
) -> LedgerResult<TipReceipt> {
    if from_wallet.is_empty() {
        return Err(LedgerError::validation("Wallet address required"));
    }

    let post = store
        .post_mut(post_id)
        .ok_or_else(|| LedgerError::post_not_found(post_id))?;

    if post.wallet == from_wallet {
        return Err(LedgerError::validation("Cannot tip your own post"));
    }

    post.tips_received = post.tips_received.saturating_add(amount);
    post.tip_count = post.tip_count.saturating_add(1);
    let post = post.clone();

    store.upsert_user(from_wallet, now).record_tip_given(amount);

    let creator = store.upsert_user(&post.wallet, now);
    creator.record_tip_received(amount);
    let creator_reputation = creator.reputation_score;

    let tip = Tip {
        post_id,
        from_wallet: from_wallet.to_string(),
        to_wallet: post.wallet.clone(),
        amount,
        tx_signature,
        timestamp: now,
    };
    store.append_tip(tip.clone());

    log::info!(
        "Tip of {} lamports on post {} from {} to {} (creator reputation {})",
        amount,
        post_id,
        from_wallet,
        post.wallet,
        creator_reputation
    );

    Ok(TipReceipt { post, tip })
}

pub fn tips_for_post(store: &LedgerStore, post_id: PostId) -> LedgerResult<Vec<Tip>> {
    if store.post(post_id).is_none() {
        return Err(LedgerError::post_not_found(post_id));
    }
    Ok(store.tips_for(post_id).to_vec())
}
