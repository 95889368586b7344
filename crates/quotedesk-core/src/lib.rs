//! # quotedesk-core: Pure Quote Engine for QuoteDesk
//!
//! This crate is the **heart** of QuoteDesk. It contains all quote pricing
//! and document logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       QuoteDesk Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin Frontend (React)                       │   │
//! │  │    Quote Editor ──► Line Items ──► Preview ──► Send/Download   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ REST API                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    CRM Backend (host)                           │   │
//! │  │    persistence, auth, PDF/HTML rendering, email delivery       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ quotedesk-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │  number   │  │  catalog  │  │   quote   │  │   │
//! │  │   │  totals   │  │ QT-…-NNNN │  │ labels/$€ │  │  assembly │  │   │
//! │  │   │  rounding │  │  retries  │  │ terms i18n│  │ snapshots │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, DiscountPolicy, TaxRate, QuoteTotals)
//! - [`money`] - Decimal money with half-up rounding (no floating point!)
//! - [`pricing`] - The total computation pipeline
//! - [`number`] - Document number generation with collision retries
//! - [`validity`] - Validity window arithmetic
//! - [`catalog`] - Currencies, languages, document labels, standard terms
//! - [`quote`] - Quote assembly and mutation operations
//! - [`validation`] - Business rule validation
//! - [`clock`] - Time source abstraction (hosts inject, tests freeze)
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values use exact decimal arithmetic,
//!    rounded half-up to 2 decimal places exactly once per computed field
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use quotedesk_core::{LineItem, DiscountPolicy, TaxRate};
//! use quotedesk_core::pricing::compute_totals;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let items = vec![LineItem {
//!     description: "Website redesign".to_string(),
//!     quantity: Decimal::from_str("10").unwrap(),
//!     unit_price: Decimal::from_str("150.00").unwrap(),
//! }];
//!
//! let totals = compute_totals(
//!     &items,
//!     &DiscountPolicy::Percentage { value: Decimal::from_str("10").unwrap() },
//!     TaxRate::from_percent(Decimal::from_str("12.5").unwrap()),
//! );
//!
//! // 1500.00 - 150.00 discount + 168.75 tax = 1518.75
//! assert_eq!(totals.total.to_string(), "1518.75");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod clock;
pub mod error;
pub mod money;
pub mod number;
pub mod pricing;
pub mod quote;
pub mod types;
pub mod validation;
pub mod validity;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use quotedesk_core::Quote` instead of
// `use quotedesk_core::quote::Quote`

pub use catalog::{CurrencyCode, LabelKey, Language};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigurationError, QuoteError, QuoteResult, ValidationError};
pub use money::Money;
pub use quote::{Quote, QuoteDraft};
pub use types::{DiscountPolicy, LineItem, QuoteTotals, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default validity window for a new quote, in days.
///
/// ## Business Reason
/// Quotes are priced against current rates and capacity. Two weeks (plus a
/// day of slack for timezone differences) keeps stale offers from being
/// accepted months later at outdated prices.
pub const DEFAULT_VALIDITY_DAYS: i64 = 15;

/// Maximum length of a line item description, in characters.
///
/// ## Business Reason
/// Descriptions print on a single document row. The host's persistence
/// layer also caps the column at this width.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Maximum length of the free-form notes field, in characters.
///
/// ## Business Reason
/// Notes render as a footer block on the document. Anything longer belongs
/// in an attachment, not the quote itself.
pub const MAX_NOTES_LEN: usize = 1000;

/// Maximum attempts when drawing a unique document number.
///
/// ## Business Reason
/// The suffix space is 10,000 numbers per calendar day. Five consecutive
/// collisions means the day's space is effectively saturated or the
/// uniqueness check is broken; either way we stop and surface the error
/// instead of looping forever.
pub const MAX_DOCUMENT_NUMBER_ATTEMPTS: u32 = 5;
