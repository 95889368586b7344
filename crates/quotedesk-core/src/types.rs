//! # Domain Types
//!
//! Core domain types used throughout the quote engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │ DiscountPolicy  │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  description    │   │  None           │   │  Decimal %      │       │
//! │  │  quantity       │   │  Percentage{v}  │   │  12.5 = 12.5%   │       │
//! │  │  unit_price     │   │  Fixed{amount}  │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────┐           │
//! │  │                     QuoteTotals                         │           │
//! │  │  subtotal ─ discount_amount ─ tax_amount ─ total        │           │
//! │  │  (every field already rounded to 2 decimal places)      │           │
//! │  └─────────────────────────────────────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::round2;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented as a decimal percentage.
///
/// ## Why a Decimal Percentage?
/// Tax authorities publish rates like 12.5% with fractional precision.
/// The rate is stored exactly as entered and only applied through the
/// pricing pipeline, which rounds the resulting amount, never the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(#[ts(as = "String")] Decimal);

impl TaxRate {
    /// Creates a tax rate from a percentage value (12.5 means 12.5%).
    #[inline]
    pub const fn from_percent(percent: Decimal) -> Self {
        TaxRate(percent)
    }

    /// Returns the rate as a percentage value.
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    /// Checks if the tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A single billable row on a quote.
///
/// Items carry no identity of their own; they are addressed by position
/// on the quote, and the quote preserves insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// What is being quoted ("Website redesign", "Hosting (12 months)").
    pub description: String,

    /// How many units. Fractional quantities are normal (2.5 hours).
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Price per unit. Zero is allowed for complimentary rows.
    #[ts(as = "String")]
    pub unit_price: Decimal,
}

impl LineItem {
    /// Creates a line item.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        LineItem {
            description: description.into(),
            quantity,
            unit_price,
        }
    }

    /// The row total: quantity × unit price, rounded to 2 decimal places.
    #[inline]
    pub fn line_total(&self) -> Decimal {
        round2(self.quantity * self.unit_price)
    }
}

// =============================================================================
// Discount Policy
// =============================================================================

/// The discount applied to a quote's subtotal.
///
/// Serialized with an internal `type` tag so the frontend gets
/// `{"type": "percentage", "value": "10"}` style payloads.
///
/// Whatever the variant, the computed discount amount never exceeds the
/// subtotal; the pricing pipeline clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountPolicy {
    /// No discount.
    None,
    /// Percentage of the subtotal, 0 to 100 inclusive.
    Percentage {
        #[ts(as = "String")]
        value: Decimal,
    },
    /// Fixed amount in the quote's currency.
    Fixed {
        #[ts(as = "String")]
        amount: Decimal,
    },
}

impl Default for DiscountPolicy {
    fn default() -> Self {
        DiscountPolicy::None
    }
}

impl DiscountPolicy {
    /// Checks whether this policy grants any discount at all.
    pub fn is_none(&self) -> bool {
        match self {
            DiscountPolicy::None => true,
            DiscountPolicy::Percentage { value } => value.is_zero(),
            DiscountPolicy::Fixed { amount } => amount.is_zero(),
        }
    }
}

// =============================================================================
// Quote Totals
// =============================================================================

/// The four derived monetary fields of a quote.
///
/// Produced only by [`crate::pricing::compute_totals`]; every field is
/// already rounded to 2 decimal places. The invariant
/// `total = max(0, subtotal - discount_amount + tax_amount)` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuoteTotals {
    /// Sum of all line totals.
    #[ts(as = "String")]
    pub subtotal: Decimal,

    /// Discount actually granted (clamped to the subtotal).
    #[ts(as = "String")]
    pub discount_amount: Decimal,

    /// Tax on the discounted base.
    #[ts(as = "String")]
    pub tax_amount: Decimal,

    /// What the customer pays.
    #[ts(as = "String")]
    pub total: Decimal,
}

impl QuoteTotals {
    /// Totals of an empty quote: everything zero.
    pub fn zero() -> Self {
        QuoteTotals {
            subtotal: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
