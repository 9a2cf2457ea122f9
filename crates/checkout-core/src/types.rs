//! # Domain Types
//!
//! Core domain types used throughout the checkout service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     ItemId      │   │   PricingRule   │   │   SpecialOffer  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  'A'..='Z'      │──►│  unit_price     │──►│  quantity (>1)  │       │
//! │  │  (uppercase)    │   │  special?       │   │  price    (>0)  │       │
//! │  └─────────────────┘   └────────┬────────┘   └─────────────────┘       │
//! │                                 │                                       │
//! │                                 ▼ RuleRecord::from_rule                 │
//! │                        ┌─────────────────┐                              │
//! │                        │   RuleRecord    │  flat wire projection        │
//! │                        │  item           │                              │
//! │                        │  unit_price     │                              │
//! │                        │  special_qty?   │                              │
//! │                        │  special_price? │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Both-or-Neither
//! A discount needs a group size AND a group price. Instead of two optional
//! fields that could drift apart, [`PricingRule`] holds a single
//! `Option<SpecialOffer>`, so a half-configured discount cannot be built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{self, ValidationResult};

// =============================================================================
// Item Identifier
// =============================================================================

/// A single uppercase alphabetic item identifier (`A`, `B`, ...).
///
/// Serialized as a one-character string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(char);

impl ItemId {
    /// Parses and normalizes an item id.
    ///
    /// Accepts exactly one alphabetic ASCII character in either case.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::ItemId;
    ///
    /// assert_eq!(ItemId::parse("e").unwrap().as_char(), 'E');
    /// assert!(ItemId::parse("AB").is_err());
    /// assert!(ItemId::parse("7").is_err());
    /// ```
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        validation::validate_item_id(raw)
    }

    /// Builds an id from a basket character, if it is a letter.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| ItemId(c.to_ascii_uppercase()))
    }

    /// Returns the underlying character.
    #[inline]
    pub const fn as_char(&self) -> char {
        self.0
    }

    /// Unchecked constructor for the built-in seed set.
    pub(crate) const fn seed(c: char) -> Self {
        ItemId(c)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ItemId::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0.to_string()
    }
}

// =============================================================================
// Special Offer
// =============================================================================

/// An "N for price" bulk discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecialOffer {
    quantity: u64,
    price: u64,
}

impl SpecialOffer {
    /// Creates a special offer.
    ///
    /// ## Rules
    /// - `quantity` must be greater than 1
    /// - `price` must be greater than 0
    pub fn new(quantity: u64, price: u64) -> ValidationResult<Self> {
        validation::validate_special_quantity(quantity)?;
        validation::validate_special_price(price)?;
        Ok(SpecialOffer { quantity, price })
    }

    /// Group size.
    #[inline]
    pub const fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price of one full group.
    #[inline]
    pub const fn price(&self) -> u64 {
        self.price
    }
}

impl fmt::Display for SpecialOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} for {}", self.quantity, self.price)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// Price behaviour for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingRule {
    unit_price: u64,
    special: Option<SpecialOffer>,
}

impl PricingRule {
    /// Creates a rule without a discount.
    pub fn new(unit_price: u64) -> ValidationResult<Self> {
        validation::validate_unit_price(unit_price)?;
        Ok(PricingRule {
            unit_price,
            special: None,
        })
    }

    /// Creates a rule with an "N for price" discount.
    pub fn with_special(unit_price: u64, quantity: u64, price: u64) -> ValidationResult<Self> {
        Ok(PricingRule {
            special: Some(SpecialOffer::new(quantity, price)?),
            ..PricingRule::new(unit_price)?
        })
    }

    /// Unchecked constructor for the built-in seed set.
    pub(crate) const fn seed(unit_price: u64, special: Option<(u64, u64)>) -> Self {
        let special = match special {
            Some((quantity, price)) => Some(SpecialOffer { quantity, price }),
            None => None,
        };
        PricingRule {
            unit_price,
            special,
        }
    }

    /// Price per single unit.
    #[inline]
    pub const fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// The bulk discount, if configured.
    #[inline]
    pub const fn special(&self) -> Option<SpecialOffer> {
        self.special
    }

    /// Returns a copy with a different unit price. The discount is kept.
    pub fn with_unit_price(self, unit_price: u64) -> ValidationResult<Self> {
        validation::validate_unit_price(unit_price)?;
        Ok(PricingRule { unit_price, ..self })
    }

    /// Returns a copy with the given discount (or none).
    pub fn with_offer(self, special: Option<SpecialOffer>) -> Self {
        PricingRule { special, ..self }
    }

    /// Price of `quantity` units of this item.
    ///
    /// Full groups are charged at the special price, the remainder at the
    /// unit price. Returns `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::PricingRule;
    ///
    /// let rule = PricingRule::with_special(50, 3, 130).unwrap();
    /// assert_eq!(rule.price_for(4), Some(180)); // 130 + 50
    /// ```
    pub fn price_for(&self, quantity: u64) -> Option<u64> {
        match self.special {
            None => quantity.checked_mul(self.unit_price),
            Some(offer) => {
                let groups = quantity / offer.quantity;
                let remainder = quantity % offer.quantity;
                groups
                    .checked_mul(offer.price)?
                    .checked_add(remainder.checked_mul(self.unit_price)?)
            }
        }
    }
}

// =============================================================================
// Pricing Data
// =============================================================================

/// Unvalidated pricing input for a new item.
///
/// Field-for-field the shape clients send; [`PricingData::to_rule`] checks
/// ranges and the both-or-neither pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PricingData {
    pub unit_price: u64,
    pub special_quantity: Option<u64>,
    pub special_price: Option<u64>,
}

impl PricingData {
    /// Converts into a [`PricingRule`], validating every field.
    pub fn to_rule(&self) -> ValidationResult<PricingRule> {
        match (self.special_quantity, self.special_price) {
            (None, None) => PricingRule::new(self.unit_price),
            (Some(quantity), Some(price)) => {
                PricingRule::with_special(self.unit_price, quantity, price)
            }
            (None, Some(_)) => Err(ValidationError::MissingPair {
                field: "Special quantity".to_string(),
                other: "special price".to_string(),
            }),
            (Some(_), None) => Err(ValidationError::MissingPair {
                field: "Special price".to_string(),
                other: "special quantity".to_string(),
            }),
        }
    }
}

// =============================================================================
// Rule Record
// =============================================================================

/// Flat, wire-facing view of one stored rule.
///
/// Returned by every mutating operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    pub item: ItemId,
    pub unit_price: u64,
    pub special_quantity: Option<u64>,
    pub special_price: Option<u64>,
}

impl RuleRecord {
    /// Projects a stored rule into its record form.
    pub fn from_rule(item: ItemId, rule: &PricingRule) -> Self {
        RuleRecord {
            item,
            unit_price: rule.unit_price(),
            special_quantity: rule.special().map(|s| s.quantity()),
            special_price: rule.special().map(|s| s.price()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_normalizes_case() {
        assert_eq!(ItemId::parse("a").unwrap(), ItemId::parse("A").unwrap());
        assert_eq!(ItemId::from_char('b').map(|i| i.as_char()), Some('B'));
        assert_eq!(ItemId::from_char('1'), None);
    }

    #[test]
    fn test_item_id_serializes_as_string() {
        let id = ItemId::parse("c").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C\"");

        let parsed: ItemId = serde_json::from_str("\"d\"").unwrap();
        assert_eq!(parsed.as_char(), 'D');
        assert!(serde_json::from_str::<ItemId>("\"DD\"").is_err());
    }

    #[test]
    fn test_price_without_special() {
        let rule = PricingRule::new(20).unwrap();
        assert_eq!(rule.price_for(0), Some(0));
        assert_eq!(rule.price_for(1), Some(20));
        assert_eq!(rule.price_for(7), Some(140));
    }

    #[test]
    fn test_price_with_special() {
        let rule = PricingRule::with_special(50, 3, 130).unwrap();
        assert_eq!(rule.price_for(2), Some(100));
        assert_eq!(rule.price_for(3), Some(130));
        assert_eq!(rule.price_for(5), Some(230));
        assert_eq!(rule.price_for(6), Some(260));
    }

    #[test]
    fn test_price_overflow() {
        let rule = PricingRule::new(u64::MAX).unwrap();
        assert_eq!(rule.price_for(2), None);
    }

    #[test]
    fn test_special_offer_bounds() {
        assert!(SpecialOffer::new(1, 10).is_err());
        assert!(SpecialOffer::new(2, 0).is_err());
        assert_eq!(SpecialOffer::new(2, 45).unwrap().to_string(), "2 for 45");
    }

    #[test]
    fn test_pricing_data_pairing() {
        let half = PricingData {
            unit_price: 10,
            special_quantity: None,
            special_price: Some(15),
        };
        assert!(matches!(
            half.to_rule(),
            Err(ValidationError::MissingPair { .. })
        ));

        let full = PricingData {
            unit_price: 10,
            special_quantity: Some(2),
            special_price: Some(15),
        };
        let rule = full.to_rule().unwrap();
        assert_eq!(rule.special().map(|s| s.price()), Some(15));
    }

    #[test]
    fn test_with_unit_price_keeps_offer() {
        let rule = PricingRule::with_special(30, 2, 45).unwrap();
        let updated = rule.with_unit_price(35).unwrap();
        assert_eq!(updated.unit_price(), 35);
        assert_eq!(updated.special(), rule.special());
        assert!(rule.with_unit_price(0).is_err());
    }

    #[test]
    fn test_record_projection() {
        let item = ItemId::parse("B").unwrap();
        let rule = PricingRule::with_special(30, 2, 45).unwrap();
        let record = RuleRecord::from_rule(item, &rule);
        assert_eq!(record.unit_price, 30);
        assert_eq!(record.special_quantity, Some(2));
        assert_eq!(record.special_price, Some(45));

        let record = RuleRecord::from_rule(item, &PricingRule::new(30).unwrap());
        assert_eq!(record.special_quantity, None);
        assert_eq!(record.special_price, None);
    }
}
