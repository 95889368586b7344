//! # Validity Window
//!
//! Pure date arithmetic for the quote validity window. The default window
//! is [`crate::DEFAULT_VALIDITY_DAYS`] days; assembly decides what window
//! a quote stores, this module only does the arithmetic.

use chrono::{DateTime, Duration, Utc};

// =============================================================================
// Window Arithmetic
// =============================================================================

/// Computes the expiry instant for a quote issued at `issued_at`.
///
/// Exactly `window_days` × 24 hours after issue. All engine timestamps
/// are UTC, where days are uniform, so this is also calendar arithmetic.
pub fn compute_valid_until(issued_at: DateTime<Utc>, window_days: i64) -> DateTime<Utc> {
    issued_at + Duration::days(window_days)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_VALIDITY_DAYS;
    use chrono::TimeZone;

    #[test]
    fn test_default_window_is_fifteen_days() {
        let issued = Utc.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap();
        let until = compute_valid_until(issued, DEFAULT_VALIDITY_DAYS);
        assert_eq!(until, Utc.with_ymd_and_hms(2025, 3, 22, 9, 30, 0).unwrap());
    }

    #[test]
    fn test_window_crosses_month_boundary() {
        let issued = Utc.with_ymd_and_hms(2025, 1, 25, 12, 0, 0).unwrap();
        let until = compute_valid_until(issued, 15);
        assert_eq!(until, Utc.with_ymd_and_hms(2025, 2, 9, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_window_crosses_leap_day() {
        let issued = Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap();
        let until = compute_valid_until(issued, 15);
        assert_eq!(until, Utc.with_ymd_and_hms(2024, 3, 6, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_zero_window_is_identity() {
        let issued = Utc.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap();
        assert_eq!(compute_valid_until(issued, 0), issued);
    }

    #[test]
    fn test_time_of_day_is_preserved() {
        let issued = Utc.with_ymd_and_hms(2025, 6, 1, 23, 59, 58).unwrap();
        let until = compute_valid_until(issued, 30);
        assert_eq!(until, Utc.with_ymd_and_hms(2025, 7, 1, 23, 59, 58).unwrap());
    }
}
