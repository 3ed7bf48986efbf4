//! Fixed-point amounts
//!
//! Every amount in the ledger is held in lamports. SOL only exists at the
//! HTTP boundary.

/// Smallest unit of SOL
pub type Lamports = u64;

/// Lamports per SOL (9 decimal places)
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Convert lamports to a SOL value for display
pub fn lamports_to_sol(lamports: Lamports) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Convert a SOL value to lamports, rounded to the nearest lamport.
///
/// Returns `None` for negative, NaN or infinite input. Values beyond
/// `u64::MAX` lamports saturate.
pub fn sol_to_lamports(sol: f64) -> Option<Lamports> {
    if !sol.is_finite() || sol < 0.0 {
        return None;
    }
    // `as` saturates for out-of-range floats
    Some((sol * LAMPORTS_PER_SOL as f64).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
        assert_eq!(lamports_to_sol(500_000_000), 0.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }

    #[test]
    fn test_sol_to_lamports() {
        assert_eq!(sol_to_lamports(1.0), Some(1_000_000_000));
        assert_eq!(sol_to_lamports(0.5), Some(500_000_000));
        assert_eq!(sol_to_lamports(0.0), Some(0));
        assert_eq!(sol_to_lamports(0.29), Some(290_000_000));
        assert_eq!(sol_to_lamports(0.000_000_000_4), Some(0));
    }

    #[test]
    fn test_sol_to_lamports_rejects_bad_input() {
        assert_eq!(sol_to_lamports(-0.01), None);
        assert_eq!(sol_to_lamports(f64::NAN), None);
        assert_eq!(sol_to_lamports(f64::INFINITY), None);
    }

    #[test]
    fn test_sol_to_lamports_saturates() {
        assert_eq!(sol_to_lamports(1e30), Some(u64::MAX));
    }
}
