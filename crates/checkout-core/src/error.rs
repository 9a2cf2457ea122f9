//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Basket and rule-store failures                 │
//! │  └── ValidationError  - Malformed input (item ids, pricing data)       │
//! │                                                                         │
//! │  checkout-api errors (separate crate)                                  │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending item in error messages
//! 3. Same invalid input always yields the same variant

use thiserror::Error;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The basket contains an identifier with no pricing rule.
    ///
    /// Carries the raw character because it may not even be a letter.
    #[error("Invalid item: {0}")]
    InvalidItem(char),

    /// A mutation targets an item absent from the store.
    #[error("Item {0} not found")]
    NotFound(ItemId),

    /// A creation targets an item already present in the store.
    #[error("Item {0} already exists")]
    AlreadyExists(ItemId),

    /// Pricing data failed validation.
    #[error("Invalid pricing rule: {0}")]
    InvalidRule(#[from] ValidationError),

    /// The basket total does not fit in a `u64`.
    #[error("Basket total exceeds the supported range")]
    Overflow,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be greater than {min}")]
    OutOfRange { field: String, min: u64 },

    /// Invalid format (e.g. an item id that is not a single letter).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A basket holds letters outside the known item set.
    #[error("{field} must only contain letters from: {letters}")]
    UnknownLetters { field: String, letters: String },

    /// One half of a paired field was supplied without the other.
    #[error("{field} must be set when {other} is provided")]
    MissingPair { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::InvalidItem('Z').to_string(), "Invalid item: Z");

        let item = ItemId::parse("e").unwrap();
        assert_eq!(CoreError::NotFound(item).to_string(), "Item E not found");
        assert_eq!(
            CoreError::AlreadyExists(item).to_string(),
            "Item E already exists"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "Unit price".to_string(),
        };
        assert_eq!(err.to_string(), "Unit price must be greater than 0");

        let err = ValidationError::MissingPair {
            field: "Special quantity".to_string(),
            other: "special price".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Special quantity must be set when special price is provided"
        );
    }

    #[test]
    fn test_unknown_letters_message() {
        let err = ValidationError::UnknownLetters {
            field: "Items".to_string(),
            letters: "A, B".to_string(),
        };
        assert_eq!(err.to_string(), "Items must only contain letters from: A, B");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "item_id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidRule(_)));
    }
}
