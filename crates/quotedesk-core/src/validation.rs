//! # Validation Module
//!
//! Business rule validation for quote input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin Frontend (TypeScript)                                  │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Quote Engine (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Host Database                                                │
//! │  ├── NOT NULL and length constraints                                   │
//! │  └── UNIQUE constraint on document_number                              │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule here runs *before* any pricing math. The pricing pipeline
//! itself is total and assumes validated input.

use rust_decimal::Decimal;

use crate::error::{ValidationError, ValidationResult};
use crate::types::{DiscountPolicy, LineItem, TaxRate};
use crate::{MAX_DESCRIPTION_LEN, MAX_NOTES_LEN};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a line item description.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 500 characters
///
/// ## Example
/// ```rust
/// use quotedesk_core::validation::validate_description;
///
/// assert!(validate_description("Website redesign").is_ok());
/// assert!(validate_description("   ").is_err());
/// assert!(validate_description(&"x".repeat(501)).is_err());
/// ```
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

/// Validates the free-form notes field.
///
/// ## Rules
/// - Optional; `None` is always fine
/// - Must be at most 1000 characters when present
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<()> {
    if let Some(notes) = notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            return Err(ValidationError::TooLong {
                field: "notes".to_string(),
                max: MAX_NOTES_LEN,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be strictly positive; fractional values are fine (2.5 hours)
pub fn validate_quantity(quantity: Decimal) -> ValidationResult<()> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (complimentary rows)
pub fn validate_unit_price(unit_price: Decimal) -> ValidationResult<()> {
    if unit_price < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tax rate.
///
/// ## Rules
/// - Must be non-negative. No upper bound: compound levies above 100%
///   exist and the pricing math handles them fine.
pub fn validate_tax_rate(rate: TaxRate) -> ValidationResult<()> {
    if rate.percent() < Decimal::ZERO {
        return Err(ValidationError::MustNotBeNegative {
            field: "tax rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount policy.
///
/// ## Rules
/// - Percentage must be between 0 and 100 inclusive
/// - Fixed amount must be non-negative (clamping to the subtotal happens
///   later, in pricing)
pub fn validate_discount(discount: &DiscountPolicy) -> ValidationResult<()> {
    match discount {
        DiscountPolicy::None => Ok(()),
        DiscountPolicy::Percentage { value } => {
            if *value < Decimal::ZERO || *value > Decimal::ONE_HUNDRED {
                return Err(ValidationError::OutOfRange {
                    field: "discount percentage".to_string(),
                    min: 0,
                    max: 100,
                });
            }
            Ok(())
        }
        DiscountPolicy::Fixed { amount } => {
            if *amount < Decimal::ZERO {
                return Err(ValidationError::MustNotBeNegative {
                    field: "discount amount".to_string(),
                });
            }
            Ok(())
        }
    }
}

/// Validates a validity window in days.
///
/// ## Rules
/// - Must be at least 1 day, so `valid_until` always lands strictly
///   after `issued_at`
pub fn validate_window_days(window_days: i64) -> ValidationResult<()> {
    if window_days < 1 {
        return Err(ValidationError::MustBePositive {
            field: "validity window".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a whole line item: description, quantity, unit price.
///
/// Fails on the first broken rule, in field order.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_description(&item.description)?;
    validate_quantity(item.quantity)?;
    validate_unit_price(item.unit_price)?;
    Ok(())
}

/// Validates an item index against the current item count.
pub fn validate_item_index(index: usize, len: usize) -> ValidationResult<()> {
    if index >= len {
        return Err(ValidationError::IndexOutOfBounds { index, len });
    }

    Ok(())
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
    fn test_validate_description() {
        assert!(validate_description("Website redesign").is_ok());
        assert!(validate_description(&"x".repeat(500)).is_ok());

        assert!(validate_description("").is_err());
        assert!(validate_description("   ").is_err());
        assert!(validate_description(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_validate_notes() {
        assert!(validate_notes(None).is_ok());
        assert!(validate_notes(Some("Net 30 on request.")).is_ok());
        assert!(validate_notes(Some(&"x".repeat(1000))).is_ok());
        assert!(validate_notes(Some(&"x".repeat(1001))).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(d("1")).is_ok());
        assert!(validate_quantity(d("2.5")).is_ok());
        assert!(validate_quantity(d("0.001")).is_ok());

        let err = validate_quantity(d("0")).unwrap_err();
        assert_eq!(err.field(), "quantity");
        assert!(validate_quantity(d("-3")).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(d("0")).is_ok()); // complimentary row
        assert!(validate_unit_price(d("149.99")).is_ok());
        assert!(validate_unit_price(d("-0.01")).is_err());
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(TaxRate::zero()).is_ok());
        assert!(validate_tax_rate(TaxRate::from_percent(d("12.5"))).is_ok());
        assert!(validate_tax_rate(TaxRate::from_percent(d("150"))).is_ok()); // no upper bound
        assert!(validate_tax_rate(TaxRate::from_percent(d("-1"))).is_err());
    }

    #[test]
    fn test_validate_discount_percentage_bounds() {
        assert!(validate_discount(&DiscountPolicy::Percentage { value: d("0") }).is_ok());
        assert!(validate_discount(&DiscountPolicy::Percentage { value: d("100") }).is_ok());

        let err =
            validate_discount(&DiscountPolicy::Percentage { value: d("100.01") }).unwrap_err();
        assert_eq!(err.to_string(), "discount percentage must be between 0 and 100");
        assert!(validate_discount(&DiscountPolicy::Percentage { value: d("-5") }).is_err());
    }

    #[test]
    fn test_validate_discount_fixed() {
        assert!(validate_discount(&DiscountPolicy::Fixed { amount: d("0") }).is_ok());
        // Larger than any plausible subtotal is still valid input here;
        // pricing clamps it.
        assert!(validate_discount(&DiscountPolicy::Fixed { amount: d("1000000") }).is_ok());
        assert!(validate_discount(&DiscountPolicy::Fixed { amount: d("-1") }).is_err());
    }

    #[test]
    fn test_validate_window_days() {
        assert!(validate_window_days(1).is_ok());
        assert!(validate_window_days(365).is_ok());
        assert!(validate_window_days(0).is_err());
        assert!(validate_window_days(-15).is_err());
    }

    #[test]
    fn test_validate_line_item_field_order() {
        let item = LineItem::new("", d("0"), d("-1"));
        // Description is checked first.
        assert_eq!(validate_line_item(&item).unwrap_err().field(), "description");

        let item = LineItem::new("Hosting", d("0"), d("-1"));
        assert_eq!(validate_line_item(&item).unwrap_err().field(), "quantity");

        let item = LineItem::new("Hosting", d("1"), d("-1"));
        assert_eq!(validate_line_item(&item).unwrap_err().field(), "unit price");

        let item = LineItem::new("Hosting", d("1"), d("25.00"));
        assert!(validate_line_item(&item).is_ok());
    }

    #[test]
    fn test_validate_item_index() {
        assert!(validate_item_index(0, 1).is_ok());
        assert!(validate_item_index(2, 3).is_ok());

        let err = validate_item_index(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "item index 3 is out of bounds for 3 items");
        assert!(validate_item_index(0, 0).is_err());
    }
}
