//! # Quote Assembly
//!
//! The aggregate that ties everything together: items, discount, tax,
//! currency, language, identifiers and the validity window.
//!
//! ## Mutation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Snapshot In, Snapshot Out                            │
//! │                                                                         │
//! │   quote ──► add_item(item) ──┬── Ok(new quote, totals recomputed)      │
//! │     │                        │                                          │
//! │     │                        └── Err(ValidationError)                  │
//! │     │                                   │                               │
//! │     └───────────── unchanged ◄──────────┘                               │
//! │                                                                         │
//! │   A rejected operation is never partially applied. The caller's        │
//! │   quote is untouched either way; an Ok result is a fresh value.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derived totals are private and recomputed inside every operation that
//! can change them. There is no code path that stores items and totals
//! that disagree.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::{CurrencyCode, Language};
use crate::clock::Clock;
use crate::error::{QuoteResult, ValidationError};
use crate::money::Money;
use crate::number::generate_document_number;
use crate::pricing::compute_totals;
use crate::types::{DiscountPolicy, LineItem, QuoteTotals, TaxRate};
use crate::validation::{
    validate_discount, validate_item_index, validate_line_item, validate_notes,
    validate_tax_rate, validate_window_days,
};
use crate::validity::compute_valid_until;
use crate::DEFAULT_VALIDITY_DAYS;

// =============================================================================
// Quote Draft
// =============================================================================

/// Everything a caller supplies to create a quote.
///
/// All fields have sensible defaults: `QuoteDraft::default()` is a valid
/// empty USD/English quote with the standard validity window. Identifier
/// and date fields are normally left `None` and assigned by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteDraft {
    /// Initial line items. May be empty; items are usually added later.
    pub items: Vec<LineItem>,

    /// Discount to apply to the subtotal.
    pub discount: DiscountPolicy,

    /// Tax rate charged on the discounted base.
    pub tax_rate: TaxRate,

    /// Currency every amount on this quote is denominated in.
    pub currency: CurrencyCode,

    /// Language the document renders in.
    pub language: Language,

    /// Free-form notes printed on the document footer.
    pub notes: Option<String>,

    /// Explicit document number. `None` lets the engine draw one; hosts
    /// that enforce uniqueness draw via
    /// [`crate::number::generate_unique_document_number`] and pass the
    /// result here.
    pub document_number: Option<String>,

    /// Explicit expiry. Takes precedence over `validity_days`.
    #[ts(as = "Option<String>")]
    pub valid_until: Option<DateTime<Utc>>,

    /// Validity window in days. `None` means the 15-day default.
    pub validity_days: Option<i64>,
}

// =============================================================================
// Quote
// =============================================================================

/// A priced, dated, numbered quote document.
///
/// ## Identity
/// - `id`: UUID v4, immutable, used for database relations
/// - `document_number`: human-readable business identifier
///   (`QT-20250307-4821`), immutable once assigned, never regenerated
///
/// ## Invariants (hold for every value this module hands out)
/// - `valid_until > issued_at`
/// - item order is insertion order
/// - the stored totals equal [`compute_totals`] over the stored inputs
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Quote {
    #[ts(as = "String")]
    id: Uuid,
    document_number: String,
    #[ts(as = "String")]
    issued_at: DateTime<Utc>,
    #[ts(as = "String")]
    valid_until: DateTime<Utc>,
    /// Window policy in days, kept so reissue can recompute the dates.
    validity_days: i64,
    items: Vec<LineItem>,
    discount: DiscountPolicy,
    tax_rate: TaxRate,
    currency: CurrencyCode,
    language: Language,
    notes: Option<String>,
    totals: QuoteTotals,
}

impl Quote {
    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Creates a quote from a draft.
    ///
    /// Validates every field, assigns id, document number and dates, and
    /// computes the initial totals. On error nothing is assigned and no
    /// quote exists.
    ///
    /// ## Example
    /// ```rust
    /// use quotedesk_core::{Quote, QuoteDraft};
    /// use quotedesk_core::clock::FixedClock;
    /// use chrono::TimeZone;
    /// use rand::SeedableRng;
    ///
    /// let clock = FixedClock(chrono::Utc.with_ymd_and_hms(2025, 3, 7, 9, 0, 0).unwrap());
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    ///
    /// let quote = Quote::create(QuoteDraft::default(), &clock, &mut rng).unwrap();
    /// assert!(quote.document_number().starts_with("QT-20250307-"));
    /// assert_eq!(quote.validity_days(), 15);
    /// assert!(quote.total().is_zero());
    /// ```
    pub fn create<C, R>(draft: QuoteDraft, clock: &C, rng: &mut R) -> QuoteResult<Quote>
    where
        C: Clock,
        R: Rng + ?Sized,
    {
        for item in &draft.items {
            validate_line_item(item)?;
        }
        validate_discount(&draft.discount)?;
        validate_tax_rate(draft.tax_rate)?;
        validate_notes(draft.notes.as_deref())?;

        let issued_at = clock.now();

        // Explicit expiry wins over an explicit window; the stored window
        // is always whole days and at least 1, so reissue stays sound.
        let (valid_until, validity_days) = match (draft.valid_until, draft.validity_days) {
            (Some(explicit), _) => {
                if explicit <= issued_at {
                    return Err(ValidationError::MustBeAfter {
                        field: "valid_until".to_string(),
                        other: "issued_at".to_string(),
                    }
                    .into());
                }
                let days = (explicit - issued_at).num_days().max(1);
                (explicit, days)
            }
            (None, Some(days)) => {
                validate_window_days(days)?;
                (compute_valid_until(issued_at, days), days)
            }
            (None, None) => (
                compute_valid_until(issued_at, DEFAULT_VALIDITY_DAYS),
                DEFAULT_VALIDITY_DAYS,
            ),
        };

        let document_number = match draft.document_number {
            Some(explicit) => {
                let trimmed = explicit.trim().to_string();
                if trimmed.is_empty() {
                    return Err(ValidationError::Required {
                        field: "document number".to_string(),
                    }
                    .into());
                }
                trimmed
            }
            None => generate_document_number(clock, rng),
        };

        let totals = compute_totals(&draft.items, &draft.discount, draft.tax_rate);
        let quote = Quote {
            id: Uuid::new_v4(),
            document_number,
            issued_at,
            valid_until,
            validity_days,
            items: draft.items,
            discount: draft.discount,
            tax_rate: draft.tax_rate,
            currency: draft.currency,
            language: draft.language,
            notes: draft.notes,
            totals,
        };

        tracing::debug!(
            quote_id = %quote.id,
            document_number = %quote.document_number,
            items = quote.items.len(),
            total = %quote.totals.total,
            "quote created"
        );

        Ok(quote)
    }

    // -------------------------------------------------------------------------
    // Item Operations
    // -------------------------------------------------------------------------

    /// Returns a copy with the item appended at the end.
    pub fn add_item(&self, item: LineItem) -> QuoteResult<Quote> {
        validate_line_item(&item)?;

        let mut next = self.clone();
        next.items.push(item);
        next.recompute();
        Ok(next)
    }

    /// Returns a copy with the item at `index` replaced.
    pub fn update_item(&self, index: usize, item: LineItem) -> QuoteResult<Quote> {
        validate_item_index(index, self.items.len())?;
        validate_line_item(&item)?;

        let mut next = self.clone();
        next.items[index] = item;
        next.recompute();
        Ok(next)
    }

    /// Returns a copy with the item at `index` removed. Later items keep
    /// their relative order.
    pub fn remove_item(&self, index: usize) -> QuoteResult<Quote> {
        validate_item_index(index, self.items.len())?;

        let mut next = self.clone();
        next.items.remove(index);
        next.recompute();
        Ok(next)
    }

    // -------------------------------------------------------------------------
    // Policy Operations
    // -------------------------------------------------------------------------

    /// Returns a copy with a different discount policy.
    pub fn set_discount(&self, discount: DiscountPolicy) -> QuoteResult<Quote> {
        validate_discount(&discount)?;

        let mut next = self.clone();
        next.discount = discount;
        next.recompute();
        Ok(next)
    }

    /// Returns a copy with a different tax rate.
    pub fn set_tax_rate(&self, tax_rate: TaxRate) -> QuoteResult<Quote> {
        validate_tax_rate(tax_rate)?;

        let mut next = self.clone();
        next.tax_rate = tax_rate;
        next.recompute();
        Ok(next)
    }

    /// Returns a copy with different notes.
    pub fn set_notes(&self, notes: Option<String>) -> QuoteResult<Quote> {
        validate_notes(notes.as_deref())?;

        let mut next = self.clone();
        next.notes = notes;
        Ok(next)
    }

    /// Returns a copy denominated in a different currency.
    ///
    /// Amounts are NOT converted; the numbers stay as entered and only
    /// the denomination changes. Conversion belongs to the host.
    pub fn set_currency(&self, currency: CurrencyCode) -> Quote {
        let mut next = self.clone();
        next.currency = currency;
        next
    }

    /// Returns a copy rendered in a different language.
    pub fn set_language(&self, language: Language) -> Quote {
        let mut next = self.clone();
        next.language = language;
        next
    }

    // -------------------------------------------------------------------------
    // Reissue
    // -------------------------------------------------------------------------

    /// Returns a copy re-dated to `now` with a fresh validity window.
    ///
    /// `issued_at` and `valid_until` move together using the quote's
    /// stored window policy. Items, totals and the document number are
    /// untouched.
    pub fn reissue(&self, now: DateTime<Utc>) -> Quote {
        let mut next = self.clone();
        next.issued_at = now;
        next.valid_until = compute_valid_until(now, self.validity_days);

        tracing::debug!(
            quote_id = %next.id,
            document_number = %next.document_number,
            valid_until = %next.valid_until,
            "quote reissued"
        );

        next
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The immutable UUID primary key.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The human-readable business identifier.
    pub fn document_number(&self) -> &str {
        &self.document_number
    }

    /// When the quote was (re)issued.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// When the quote expires. Always after `issued_at`.
    pub fn valid_until(&self) -> DateTime<Utc> {
        self.valid_until
    }

    /// The validity window policy, in days.
    pub fn validity_days(&self) -> i64 {
        self.validity_days
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// The discount policy.
    pub fn discount(&self) -> DiscountPolicy {
        self.discount
    }

    /// The tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// The quote's currency.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// The document language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The free-form notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// All four derived fields at once, as raw decimals.
    pub fn totals(&self) -> QuoteTotals {
        self.totals
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        Money::new(self.totals.subtotal, self.currency)
    }

    /// Discount actually granted.
    pub fn discount_amount(&self) -> Money {
        Money::new(self.totals.discount_amount, self.currency)
    }

    /// Tax charged on the discounted base.
    pub fn tax_amount(&self) -> Money {
        Money::new(self.totals.tax_amount, self.currency)
    }

    /// What the customer pays.
    pub fn total(&self) -> Money {
        Money::new(self.totals.total, self.currency)
    }

    /// Whether the quote has expired as of `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.valid_until
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn recompute(&mut self) {
        self.totals = compute_totals(&self.items, &self.discount, self.tax_rate);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
