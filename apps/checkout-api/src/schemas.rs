//! Request and response bodies.
//!
//! Numeric request fields are signed so that a negative price reaches
//! validation and gets a readable message instead of a deserialization error.

use std::collections::BTreeMap;

use checkout_core::validation::{
    positive_special_price, positive_special_quantity, positive_unit_price,
};
use checkout_core::{ItemId, PricingData, PricingRule, PricingRuleStore, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// Checkout
// =============================================================================

/// `POST /checkout` body.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    pub items: String,
}

impl CheckoutRequest {
    /// Checks that every letter in the basket is a known item.
    ///
    /// The message lists the currently known items, e.g.
    /// `Items must only contain letters from: A, B, C, D`.
    pub fn validate(&self, store: &PricingRuleStore) -> Result<(), ValidationError> {
        let known = store.get_all_rules();
        let all_known = self.items.chars().all(|c| {
            ItemId::from_char(c).is_some_and(|id| id.as_char() == c && known.contains_key(&id))
        });

        if all_known {
            return Ok(());
        }

        let letters: Vec<String> = known.keys().map(ItemId::to_string).collect();
        Err(ValidationError::UnknownLetters {
            field: "Items".to_string(),
            letters: letters.join(", "),
        })
    }
}

/// `POST /checkout` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub total: u64,
}

// =============================================================================
// Price Listing
// =============================================================================

/// One entry of `GET /prices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub unit_price: u64,

    /// `"3 for 130"`, or `null` without a special offer
    pub special_offer: Option<String>,
}

impl From<&PricingRule> for PriceEntry {
    fn from(rule: &PricingRule) -> Self {
        PriceEntry {
            unit_price: rule.unit_price(),
            special_offer: rule.special().map(|offer| offer.to_string()),
        }
    }
}

/// Builds the `GET /prices` body, keyed by item letter.
pub fn price_list(rules: &BTreeMap<ItemId, PricingRule>) -> BTreeMap<String, PriceEntry> {
    rules
        .iter()
        .map(|(item, rule)| (item.to_string(), PriceEntry::from(rule)))
        .collect()
}

// =============================================================================
// Item Management
// =============================================================================

/// `?item_id=` query of `POST /items`.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemIdQuery {
    pub item_id: String,
}

/// `?unit_price=` query of `PUT /items/{item_id}/price`.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitPriceQuery {
    pub unit_price: i64,
}

/// `POST /items` body.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingRuleRequest {
    pub unit_price: i64,
    #[serde(default)]
    pub special_quantity: Option<i64>,
    #[serde(default)]
    pub special_price: Option<i64>,
}

impl PricingRuleRequest {
    /// Validates ranges and pairing, producing core pricing data.
    pub fn validate(&self) -> Result<PricingData, ValidationError> {
        let unit_price = positive_unit_price(self.unit_price)?;
        let special_price = self.special_price.map(positive_special_price).transpose()?;

        if special_price.is_some() && self.special_quantity.is_none() {
            return Err(ValidationError::MissingPair {
                field: "Special quantity".to_string(),
                other: "special price".to_string(),
            });
        }

        let special_quantity = self
            .special_quantity
            .map(positive_special_quantity)
            .transpose()?;

        if special_quantity.is_some() && special_price.is_none() {
            return Err(ValidationError::MissingPair {
                field: "Special price".to_string(),
                other: "special quantity".to_string(),
            });
        }

        Ok(PricingData {
            unit_price,
            special_quantity,
            special_price,
        })
    }
}

/// `PUT /items/{item_id}/special-price` body.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecialPriceRequest {
    pub quantity: i64,
    pub price: i64,
}

impl SpecialPriceRequest {
    /// Returns the validated `(quantity, price)` pair.
    pub fn validate(&self) -> Result<(u64, u64), ValidationError> {
        Ok((
            positive_special_quantity(self.quantity)?,
            positive_special_price(self.price)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_request(
        unit_price: i64,
        special_quantity: Option<i64>,
        special_price: Option<i64>,
    ) -> PricingRuleRequest {
        PricingRuleRequest {
            unit_price,
            special_quantity,
            special_price,
        }
    }

    #[test]
    fn test_checkout_request_lists_known_items() {
        let store = PricingRuleStore::seeded();
        let ok = CheckoutRequest {
            items: "AABD".to_string(),
        };
        assert!(ok.validate(&store).is_ok());

        let bad = CheckoutRequest {
            items: "AZ".to_string(),
        };
        assert_eq!(
            bad.validate(&store).unwrap_err().to_string(),
            "Items must only contain letters from: A, B, C, D"
        );

        let lower = CheckoutRequest {
            items: "a".to_string(),
        };
        assert!(lower.validate(&store).is_err());
    }

    #[test]
    fn test_pricing_rule_request_validation() {
        let data = rule_request(40, Some(2), Some(70)).validate().unwrap();
        assert_eq!(data.special_quantity, Some(2));

        assert!(rule_request(40, None, None).validate().is_ok());
        assert!(rule_request(0, None, None).validate().is_err());
        assert!(rule_request(40, Some(2), Some(-1)).validate().is_err());
        assert!(rule_request(40, Some(1), Some(70)).validate().is_err());
        assert!(rule_request(40, Some(2), None).validate().is_err());

        let err = rule_request(40, None, Some(70)).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Special quantity must be set when special price is provided"
        );
    }

    #[test]
    fn test_special_price_request_validation() {
        let ok = SpecialPriceRequest {
            quantity: 3,
            price: 100,
        };
        assert_eq!(ok.validate().unwrap(), (3, 100));

        let bad = SpecialPriceRequest {
            quantity: 1,
            price: 100,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_price_list_formats_offers() {
        let list = price_list(&PricingRuleStore::seeded().get_all_rules());
        assert_eq!(list["A"].special_offer.as_deref(), Some("3 for 130"));
        assert_eq!(list["C"].special_offer, None);
        assert_eq!(list["D"].unit_price, 15);
    }
}
