//! # Clock Abstraction
//!
//! The engine never reads the wall clock directly. Hosts inject a
//! [`Clock`]; tests freeze one. This keeps document numbers and validity
//! windows deterministic under test without any I/O in the crate.

use chrono::{DateTime, Utc};

// =============================================================================
// Clock Trait
// =============================================================================

/// A source of "now", always in UTC.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// System Clock
// =============================================================================

/// The real wall clock. Hosts use this one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Fixed Clock
// =============================================================================

/// A clock frozen at a single instant.
///
/// Used by tests, and by hosts that need to re-derive a document exactly
/// as it was issued.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
