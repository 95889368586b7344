//! # Pricing Pipeline
//!
//! The single place quote totals come from. Pure, deterministic, total:
//! same items, discount and tax rate always produce the same four fields,
//! and nothing in here can fail or do I/O.
//!
//! ## The Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   items ──► Σ round2(qty × price) ──► subtotal                         │
//! │                                          │                              │
//! │   discount policy ──► percentage/fixed ──► discount_amount             │
//! │                       (clamped to subtotal)  │                          │
//! │                                              ▼                          │
//! │   tax rate ──► round2((subtotal − discount) × rate / 100) ──► tax      │
//! │                                              │                          │
//! │                                              ▼                          │
//! │              total = max(0, subtotal − discount + tax)                  │
//! │                                                                         │
//! │   round2 (half-up) is applied exactly once per derived field.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Order matters: the discount is taken off the subtotal first and tax is
//! charged on what the customer actually pays. Taxing the undiscounted
//! subtotal would overcharge on every discounted quote.

use rust_decimal::Decimal;

use crate::money::round2;
use crate::types::{DiscountPolicy, LineItem, QuoteTotals, TaxRate};

// =============================================================================
// Totals Computation
// =============================================================================

/// Computes the four derived monetary fields of a quote.
///
/// Inputs are assumed validated (see [`crate::validation`]); out-of-range
/// discounts are clamped rather than rejected here, so the function stays
/// total no matter what the caller holds.
///
/// ## Example
/// ```rust
/// use quotedesk_core::pricing::compute_totals;
/// use quotedesk_core::{DiscountPolicy, LineItem, TaxRate};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s| Decimal::from_str(s).unwrap();
///
/// let items = vec![
///     LineItem::new("Design", d("10"), d("150.00")),
///     LineItem::new("Hosting", d("1"), d("700.00")),
/// ];
/// let totals = compute_totals(
///     &items,
///     &DiscountPolicy::Percentage { value: d("10") },
///     TaxRate::from_percent(d("15")),
/// );
///
/// assert_eq!(totals.subtotal, d("2200.00"));
/// assert_eq!(totals.discount_amount, d("220.00"));
/// assert_eq!(totals.tax_amount, d("297.00"));
/// assert_eq!(totals.total, d("2277.00"));
/// ```
pub fn compute_totals(
    items: &[LineItem],
    discount: &DiscountPolicy,
    tax_rate: TaxRate,
) -> QuoteTotals {
    let subtotal = compute_subtotal(items);
    let discount_amount = compute_discount_amount(subtotal, discount);
    let tax_amount = compute_tax_amount(subtotal, discount_amount, tax_rate);

    let total = (subtotal - discount_amount + tax_amount).max(Decimal::ZERO);

    QuoteTotals {
        subtotal,
        discount_amount,
        tax_amount,
        total,
    }
}

/// Sum of the rounded line totals. Empty list sums to zero.
fn compute_subtotal(items: &[LineItem]) -> Decimal {
    round2(items.iter().map(LineItem::line_total).sum())
}

/// Discount granted by the policy, clamped to the subtotal.
fn compute_discount_amount(subtotal: Decimal, discount: &DiscountPolicy) -> Decimal {
    let raw = match discount {
        DiscountPolicy::None => Decimal::ZERO,
        DiscountPolicy::Percentage { value } => {
            round2(subtotal * *value / Decimal::ONE_HUNDRED)
        }
        DiscountPolicy::Fixed { amount } => round2(*amount),
    };
    raw.min(subtotal)
}

/// Tax on the discounted base.
fn compute_tax_amount(subtotal: Decimal, discount_amount: Decimal, tax_rate: TaxRate) -> Decimal {
    round2((subtotal - discount_amount) * tax_rate.percent() / Decimal::ONE_HUNDRED)
}

// =============================================================================
// Unit Tests
// =============================================================================
