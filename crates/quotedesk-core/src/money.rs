//! # Money Module
//!
//! Provides the `Money` type and the crate-wide rounding rule.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Quotes also carry fractional quantities:                               │
//! │    2.5 hours × $85.00/hour = $212.50                                    │
//! │    Integer cents cannot represent the 2.5 without a second scheme      │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimal Arithmetic                                 │
//! │    rust_decimal computes 2.5 × 85.00 exactly, then we round            │
//! │    half-up to 2 decimal places exactly once per derived field          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quotedesk_core::money::{round2, Money};
//! use quotedesk_core::catalog::CurrencyCode;
//! use rust_decimal::Decimal;
//! use std::str::FromStr;
//!
//! let raw = Decimal::from_str("212.505").unwrap();
//! assert_eq!(round2(raw).to_string(), "212.51"); // half rounds UP, not to even
//!
//! let total = Money::new(round2(raw), CurrencyCode::Usd);
//! assert_eq!(total.to_string(), "$212.51");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::catalog::CurrencyCode;

// =============================================================================
// Rounding
// =============================================================================

/// Rounds a decimal to 2 places, half away from zero.
///
/// ## Why Half-Up?
/// Commercial documents round 0.005 up to 0.01. Bankers rounding (half to
/// even) would make the printed total disagree with what customers compute
/// by hand, which generates support tickets, not fairness.
///
/// ## Example
/// ```rust
/// use quotedesk_core::money::round2;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s| Decimal::from_str(s).unwrap();
/// assert_eq!(round2(d("1.005")), d("1.01"));
/// assert_eq!(round2(d("1.004")), d("1.00"));
/// assert_eq!(round2(d("2.675")), d("2.68"));
/// ```
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount tagged with its currency.
///
/// ## Design Decisions
/// - **Decimal amount**: Exact arithmetic, fractional quantities supported
/// - **Currency carried on the value**: A quote has exactly one currency;
///   every derived amount the engine hands out carries it, so outer layers
///   can never format a TTD amount with a USD symbol
/// - **No cross-currency arithmetic**: Adding amounts in different
///   currencies is a logic error and panics in debug and release alike
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  Quote.subtotal() ──┬──► Money { 1500.00, USD }                        │
/// │  Quote.tax_amount() ┤                                                   │
/// │  Quote.total() ─────┘    ──► Displayed as "$1,500.00" on documents     │
/// │                                                                         │
/// │  EVERY monetary value the host shows comes out of this type           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money {
    /// The amount, already rounded to 2 decimal places by the engine.
    #[ts(as = "String")]
    pub amount: Decimal,
    /// The currency the amount is denominated in.
    pub currency: CurrencyCode,
}

impl Money {
    /// Creates a Money value from an amount and currency.
    ///
    /// ## Example
    /// ```rust
    /// use quotedesk_core::money::Money;
    /// use quotedesk_core::catalog::CurrencyCode;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::new(Decimal::new(1099, 2), CurrencyCode::Usd); // $10.99
    /// assert_eq!(price.amount.to_string(), "10.99");
    /// ```
    #[inline]
    pub const fn new(amount: Decimal, currency: CurrencyCode) -> Self {
        Money { amount, currency }
    }

    /// Returns zero in the given currency.
    #[inline]
    pub const fn zero(currency: CurrencyCode) -> Self {
        Money {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Checks if the amount is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Checks if the amount is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Checks if the amount is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with its currency symbol, thousands
/// separators and exactly two decimals, matching the printed documents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::catalog::format_amount(self.amount, self.currency))
    }
}

/// Addition of two Money values. Panics on mixed currencies.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        assert_eq!(
            self.currency, other.currency,
            "cannot add {} and {} amounts",
            self.currency.code(),
            other.currency.code()
        );
        Money::new(self.amount + other.amount, self.currency)
    }
}

/// Addition assignment (+=). Panics on mixed currencies.
impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Subtraction of two Money values. Panics on mixed currencies.
impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        assert_eq!(
            self.currency, other.currency,
            "cannot subtract {} from {} amounts",
            other.currency.code(),
            self.currency.code()
        );
        Money::new(self.amount - other.amount, self.currency)
    }
}

/// Subtraction assignment (-=). Panics on mixed currencies.
impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round2_half_goes_up() {
        assert_eq!(round2(d("1.005")), d("1.01"));
        assert_eq!(round2(d("1.015")), d("1.02")); // not bankers: 1.015 → 1.02
        assert_eq!(round2(d("1.025")), d("1.03"));
        assert_eq!(round2(d("-1.005")), d("-1.01")); // away from zero
    }

    #[test]
    fn test_round2_below_half_goes_down() {
        assert_eq!(round2(d("1.004")), d("1.00"));
        assert_eq!(round2(d("2.674")), d("2.67"));
    }

    #[test]
    fn test_round2_is_stable_on_two_decimals() {
        assert_eq!(round2(d("10.99")), d("10.99"));
        assert_eq!(round2(d("0")), d("0"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Money::new(d("10.99"), CurrencyCode::Usd)),
            "$10.99"
        );
        assert_eq!(
            format!("{}", Money::new(d("1234.50"), CurrencyCode::Ttd)),
            "TT$1,234.50"
        );
        assert_eq!(
            format!("{}", Money::new(d("0"), CurrencyCode::Eur)),
            "€0.00"
        );
    }

    #[test]
    fn test_arithmetic_same_currency() {
        let a = Money::new(d("10.00"), CurrencyCode::Usd);
        let b = Money::new(d("5.50"), CurrencyCode::Usd);

        assert_eq!((a + b).amount, d("15.50"));
        assert_eq!((a - b).amount, d("4.50"));

        let mut acc = Money::zero(CurrencyCode::Usd);
        acc += a;
        acc += b;
        assert_eq!(acc.amount, d("15.50"));
    }

    #[test]
    #[should_panic(expected = "cannot add")]
    fn test_mixed_currency_addition_panics() {
        let usd = Money::new(d("10.00"), CurrencyCode::Usd);
        let eur = Money::new(d("10.00"), CurrencyCode::Eur);
        let _ = usd + eur;
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero(CurrencyCode::Usd);
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::new(d("0.01"), CurrencyCode::Usd);
        assert!(positive.is_positive());

        let negative = Money::new(d("-0.01"), CurrencyCode::Usd);
        assert!(negative.is_negative());
    }
}
