//! # Validation Module
//!
//! Input validation for item ids and pricing data.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler (checkout-api)                                  │
//! │  ├── Type validation (JSON deserialization)                            │
//! │  └── Signed → unsigned conversion via `positive_*` helpers             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Domain constructors (this module)                            │
//! │  ├── ItemId::parse        → validate_item_id                           │
//! │  ├── PricingRule::new     → validate_unit_price                        │
//! │  └── SpecialOffer::new    → validate_special_quantity / _price         │
//! │                                                                         │
//! │  A rule that exists is a rule that passed Layer 2.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{positive_unit_price, validate_item_id};
//!
//! let item = validate_item_id("e").unwrap();
//! assert_eq!(item.as_char(), 'E');
//!
//! assert_eq!(positive_unit_price(50).unwrap(), 50);
//! assert!(positive_unit_price(-5).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::ItemId;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Smallest group size a special offer may use.
pub const MIN_SPECIAL_QUANTITY: u64 = 2;

// =============================================================================
// Item Id
// =============================================================================

/// Validates and normalizes an item identifier.
///
/// ## Rules
/// - Must not be empty
/// - Must be exactly one character
/// - Must be an ASCII letter; lowercase is folded to uppercase
pub fn validate_item_id(raw: &str) -> ValidationResult<ItemId> {
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "Item ID".to_string(),
        });
    }

    let mut chars = raw.chars();
    match (chars.next().and_then(ItemId::from_char), chars.next()) {
        (Some(item), None) => Ok(item),
        _ => Err(ValidationError::InvalidFormat {
            field: "Item ID".to_string(),
            reason: "must be a single alphabetical character".to_string(),
        }),
    }
}

// =============================================================================
// Unsigned Validators
// =============================================================================

/// Validates a unit price (must be > 0).
pub fn validate_unit_price(price: u64) -> ValidationResult<()> {
    if price == 0 {
        return Err(ValidationError::MustBePositive {
            field: "Unit price".to_string(),
        });
    }
    Ok(())
}

/// Validates a special-offer group size (must be > 1).
pub fn validate_special_quantity(quantity: u64) -> ValidationResult<()> {
    if quantity < MIN_SPECIAL_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "Special quantity".to_string(),
            min: MIN_SPECIAL_QUANTITY - 1,
        });
    }
    Ok(())
}

/// Validates a special-offer group price (must be > 0).
pub fn validate_special_price(price: u64) -> ValidationResult<()> {
    if price == 0 {
        return Err(ValidationError::MustBePositive {
            field: "Special price".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Signed Input Converters
// =============================================================================
// Clients send JSON numbers, which may be negative. These helpers turn them
// into the unsigned domain values with the same messages as above.

/// Converts a client-supplied unit price.
pub fn positive_unit_price(value: i64) -> ValidationResult<u64> {
    let price = u64::try_from(value).unwrap_or(0);
    validate_unit_price(price)?;
    Ok(price)
}

/// Converts a client-supplied special quantity.
pub fn positive_special_quantity(value: i64) -> ValidationResult<u64> {
    let quantity = u64::try_from(value).unwrap_or(0);
    validate_special_quantity(quantity)?;
    Ok(quantity)
}

/// Converts a client-supplied special price.
pub fn positive_special_price(value: i64) -> ValidationResult<u64> {
    let price = u64::try_from(value).unwrap_or(0);
    validate_special_price(price)?;
    Ok(price)
}

// =============================================================================
// Unit Tests
// =============================================================================
