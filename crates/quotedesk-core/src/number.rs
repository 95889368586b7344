//! # Document Number Generation
//!
//! Human-readable business identifiers for quotes, separate from the
//! UUID primary key.
//!
//! ## Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    QT-20250307-4821                                     │
//! │                    ──  ────────  ────                                   │
//! │                    │      │        │                                    │
//! │       fixed prefix ┘      │        └ uniform random suffix, 0000-9999  │
//! │                           └ issue date, UTC, YYYYMMDD                  │
//! │                                                                         │
//! │  Sortable by day, readable over the phone, no counter to persist.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Uniqueness is enforced against the host's store through the `is_taken`
//! callback, with a bounded retry budget. Once a quote holds a number the
//! engine never regenerates it.

use rand::Rng;

use crate::clock::Clock;
use crate::error::{QuoteError, QuoteResult};
use crate::MAX_DOCUMENT_NUMBER_ATTEMPTS;

/// Prefix identifying quote documents. Invoices and receipts live in the
/// host and use their own prefixes.
pub const DOCUMENT_NUMBER_PREFIX: &str = "QT";

// =============================================================================
// Generation
// =============================================================================

/// Draws a candidate document number: `QT-{YYYYMMDD}-{NNNN}`.
///
/// The date segment is the clock's current UTC date; the suffix is a
/// uniform draw over 0000..=9999, zero padded.
///
/// ## Example
/// ```rust
/// use quotedesk_core::clock::FixedClock;
/// use quotedesk_core::number::generate_document_number;
/// use chrono::TimeZone;
/// use rand::SeedableRng;
///
/// let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap());
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let number = generate_document_number(&clock, &mut rng);
/// assert!(number.starts_with("QT-20250307-"));
/// assert_eq!(number.len(), "QT-20250307-0000".len());
/// ```
pub fn generate_document_number<C, R>(clock: &C, rng: &mut R) -> String
where
    C: Clock,
    R: Rng + ?Sized,
{
    let date = clock.now().format("%Y%m%d");
    let suffix: u16 = rng.gen_range(0..=9999);
    format!("{}-{}-{:04}", DOCUMENT_NUMBER_PREFIX, date, suffix)
}

/// Draws candidates until one is free, up to
/// [`MAX_DOCUMENT_NUMBER_ATTEMPTS`] attempts.
///
/// `is_taken` is the host's uniqueness check (typically a database
/// lookup done before this call, against an in-memory snapshot). When
/// every attempt collides the whole creation fails with
/// [`QuoteError::IdentifierCollision`]; an existing document is never
/// silently reused or overwritten.
pub fn generate_unique_document_number<C, R, F>(
    clock: &C,
    rng: &mut R,
    mut is_taken: F,
) -> QuoteResult<String>
where
    C: Clock,
    R: Rng + ?Sized,
    F: FnMut(&str) -> bool,
{
    for attempt in 1..=MAX_DOCUMENT_NUMBER_ATTEMPTS {
        let candidate = generate_document_number(clock, rng);
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
        tracing::warn!(
            candidate = %candidate,
            attempt,
            max_attempts = MAX_DOCUMENT_NUMBER_ATTEMPTS,
            "document number collision, retrying"
        );
    }

    Err(QuoteError::IdentifierCollision {
        attempts: MAX_DOCUMENT_NUMBER_ATTEMPTS,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
