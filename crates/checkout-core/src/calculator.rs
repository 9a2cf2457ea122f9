//! # Checkout Calculator
//!
//! Turns a basket of item letters into a total, and guards rule mutations
//! with basket-domain checks ("already exists", "not found").
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_total("DABABA")                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Count letters:  A×3  B×2  D×1        (order is irrelevant)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Look up rules:  A 50 (3 for 130)  B 30 (2 for 45)  D 15               │
//! │       │          unknown letter? ──► InvalidItem(letter)               │
//! │       ▼                                                                 │
//! │  Subtotals:      A 130   B 45   D 15                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Total:          190                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::store::PricingRuleStore;
use crate::types::{ItemId, PricingData, PricingRule, RuleRecord, SpecialOffer};

/// Basket pricing and rule management on top of a shared store.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use checkout_core::{CheckoutCalculator, PricingRuleStore};
///
/// let calculator = CheckoutCalculator::new(Arc::new(PricingRuleStore::seeded()));
/// assert_eq!(calculator.calculate_total("AAABBD").unwrap(), 190);
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutCalculator {
    store: Arc<PricingRuleStore>,
}

impl CheckoutCalculator {
    /// Creates a calculator over the given store.
    pub fn new(store: Arc<PricingRuleStore>) -> Self {
        CheckoutCalculator { store }
    }

    /// The store this calculator prices against.
    pub fn store(&self) -> &Arc<PricingRuleStore> {
        &self.store
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Computes the total price of a basket.
    ///
    /// ## Behavior
    /// - Empty basket: 0
    /// - Every distinct letter must have a rule, else `InvalidItem`.
    ///   With several unknown letters, the smallest one is reported.
    /// - Result depends only on letter counts, never on order
    pub fn calculate_total(&self, items: &str) -> CoreResult<u64> {
        if items.is_empty() {
            return Ok(0);
        }

        let mut counts: BTreeMap<char, u64> = BTreeMap::new();
        for c in items.chars() {
            *counts.entry(c).or_default() += 1;
        }

        let mut total: u64 = 0;
        for (c, count) in counts {
            let rule = ItemId::from_char(c)
                .filter(|id| id.as_char() == c)
                .and_then(|id| self.store.get_rule(id))
                .ok_or(CoreError::InvalidItem(c))?;

            let subtotal = rule.price_for(count).ok_or(CoreError::Overflow)?;
            total = total.checked_add(subtotal).ok_or(CoreError::Overflow)?;
        }

        debug!(basket_size = items.chars().count(), total, "Calculated basket total");
        Ok(total)
    }

    // =========================================================================
    // Rule Management
    // =========================================================================

    /// Returns the rule for one item.
    pub fn rule(&self, item: ItemId) -> Option<PricingRule> {
        self.store.get_rule(item)
    }

    /// Returns every rule, ordered by item.
    pub fn rules(&self) -> BTreeMap<ItemId, PricingRule> {
        self.store.get_all_rules()
    }

    /// Adds a new item.
    ///
    /// Fails with `AlreadyExists` if the item has a rule, or `InvalidRule`
    /// if the pricing data is malformed.
    pub fn add_item(&self, item: ItemId, pricing: PricingData) -> CoreResult<RuleRecord> {
        if self.store.contains(item) {
            return Err(CoreError::AlreadyExists(item));
        }
        let rule = pricing.to_rule()?;
        self.store.insert_new(item, rule)
    }

    /// Changes the unit price of an existing item. The special offer is kept.
    pub fn update_unit_price(&self, item: ItemId, unit_price: u64) -> CoreResult<RuleRecord> {
        self.store
            .replace_with(item, |rule| rule.with_unit_price(unit_price))
    }

    /// Sets (or replaces) the "N for price" offer of an existing item.
    pub fn set_special_price(
        &self,
        item: ItemId,
        quantity: u64,
        price: u64,
    ) -> CoreResult<RuleRecord> {
        let offer = SpecialOffer::new(quantity, price)?;
        self.store
            .replace_with(item, |rule| Ok(rule.with_offer(Some(offer))))
    }

    /// Clears the special offer of an existing item.
    pub fn remove_special_price(&self, item: ItemId) -> CoreResult<RuleRecord> {
        self.store
            .replace_with(item, |rule| Ok(rule.with_offer(None)))
    }

    /// Deletes an item and its rule.
    pub fn delete_item(&self, item: ItemId) -> CoreResult<RuleRecord> {
        self.store.delete_rule(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
