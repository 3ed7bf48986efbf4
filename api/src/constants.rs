//! API Constants

/// Network label reported by `/api/health` when none is configured
pub const DEFAULT_NETWORK: &str = "devnet";

/// Upper bound for `/api/leaderboard?limit=`
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// Clamp a requested leaderboard size into `1..=MAX_LEADERBOARD_LIMIT`
pub fn leaderboard_limit(requested: Option<usize>) -> usize {
    requested
        .unwrap_or(tipjar_core::DEFAULT_LEADERBOARD_LIMIT)
        .clamp(1, MAX_LEADERBOARD_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaderboard_limit() {
        assert_eq!(leaderboard_limit(None), 20);
        assert_eq!(leaderboard_limit(Some(5)), 5);
        assert_eq!(leaderboard_limit(Some(0)), 1);
        assert_eq!(leaderboard_limit(Some(10_000)), MAX_LEADERBOARD_LIMIT);
    }
}
