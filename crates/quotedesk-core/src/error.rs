//! # Error Types
//!
//! Domain-specific error types for quotedesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quotedesk-core errors (this file)                                     │
//! │  ├── QuoteError          - Top-level engine errors                     │
//! │  ├── ValidationError     - Input validation failures                   │
//! │  └── ConfigurationError  - Unknown currency/language/label lookups     │
//! │                                                                         │
//! │  Host application errors (out of tree)                                 │
//! │  └── ApiError            - What the frontend sees (serialized)         │
//! │                                                                         │
//! │  Flow: ValidationError → QuoteError → ApiError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. The pricing engine itself never errors; all fallibility lives at the
//!    boundaries (input validation, identifier assignment, catalog parsing)

use thiserror::Error;

// =============================================================================
// Quote Error
// =============================================================================

/// Top-level engine errors.
///
/// Every fallible engine operation returns this type. A rejected operation
/// is never partially applied; the caller's quote snapshot is untouched.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Input validation failed (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A static catalog lookup was asked for something that does not exist.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Document number generation exhausted its retry budget.
    ///
    /// ## When This Occurs
    /// The persistence boundary reported every candidate as taken for
    /// `attempts` consecutive draws. The quote creation attempt is fatal;
    /// an existing document is never silently overwritten.
    #[error("Document number collision after {attempts} attempts")]
    IdentifierCollision { attempts: u32 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw item/discount/tax input doesn't meet
/// requirements. Used for early validation before any pricing math runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Line item index does not exist on the quote.
    #[error("item index {index} is out of bounds for {len} items")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A timestamp ordering constraint was violated.
    #[error("{field} must be after {other}")]
    MustBeAfter { field: String, other: String },
}

impl ValidationError {
    /// The name of the field the error is about.
    ///
    /// Index and chronology errors report the logical field they guard
    /// (`items`, `valid_until`).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustNotBeNegative { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::MustBeAfter { field, .. } => field,
            ValidationError::IndexOutOfBounds { .. } => "items",
        }
    }
}

// =============================================================================
// Configuration Error
// =============================================================================

/// Static catalog lookup failures.
///
/// These are programming or configuration defects, not user-facing
/// conditions. They are propagated to the caller rather than silently
/// defaulted, so an untranslated or mis-priced document never ships.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Currency code is not in the supported set.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Language code is not in the supported set.
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// Document label key is not in the closed label set.
    #[error("unknown label key: {0}")]
    UnknownLabel(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
