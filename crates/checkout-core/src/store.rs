//! # Pricing Rule Store
//!
//! Authoritative in-memory storage of pricing rules, keyed by item.
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Access Paths                                   │
//! │                                                                         │
//! │  get_rule / get_all_rules ──► read lock  ──► copy out, release         │
//! │                                                                         │
//! │  add_rule / update_rule   ──► write lock ──► insert, project record    │
//! │  insert_new               ──► write lock ──► check + insert            │
//! │  replace_with             ──► write lock ──► read + build + swap       │
//! │  delete_rule              ──► write lock ──► remove, project record    │
//! │                                                                         │
//! │  Every read-modify-write happens under ONE write lock, so no caller    │
//! │  can observe a half-applied change.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `add_rule` overwrites silently. Uniqueness of new items is enforced by
//! [`crate::CheckoutCalculator::add_item`] through [`PricingRuleStore::insert_new`].

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{ItemId, PricingRule, RuleRecord};
use crate::validation::ValidationResult;

/// Keyed collection of pricing rules.
///
/// ## Usage
/// ```rust
/// use checkout_core::{ItemId, PricingRule, PricingRuleStore};
///
/// let store = PricingRuleStore::seeded();
/// let a = ItemId::parse("A").unwrap();
/// assert_eq!(store.get_rule(a).map(|r| r.unit_price()), Some(50));
///
/// let e = ItemId::parse("E").unwrap();
/// store.add_rule(e, PricingRule::new(10).unwrap());
/// assert_eq!(store.len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct PricingRuleStore {
    rules: RwLock<HashMap<ItemId, PricingRule>>,
}

impl PricingRuleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        PricingRuleStore::default()
    }

    /// Creates a store holding the default rule set.
    ///
    /// | Item | Unit | Special    |
    /// |------|------|------------|
    /// | A    | 50   | 3 for 130  |
    /// | B    | 30   | 2 for 45   |
    /// | C    | 20   |            |
    /// | D    | 15   |            |
    pub fn seeded() -> Self {
        let store = PricingRuleStore::new();
        {
            let mut rules = store.rules.write();
            for (item, rule) in seed_rules() {
                rules.insert(item, rule);
            }
        }
        store
    }

    /// Creates a store from explicit rules.
    pub fn with_rules(rules: impl IntoIterator<Item = (ItemId, PricingRule)>) -> Self {
        PricingRuleStore {
            rules: RwLock::new(rules.into_iter().collect()),
        }
    }

    /// Returns the rule for `item`, if any.
    pub fn get_rule(&self, item: ItemId) -> Option<PricingRule> {
        self.rules.read().get(&item).copied()
    }

    /// Returns a snapshot of every rule, ordered by item.
    ///
    /// The snapshot is taken under the read lock; later mutations do not
    /// affect it.
    pub fn get_all_rules(&self) -> BTreeMap<ItemId, PricingRule> {
        self.rules
            .read()
            .iter()
            .map(|(item, rule)| (*item, *rule))
            .collect()
    }

    /// Inserts a rule, replacing any existing rule for the same item.
    pub fn add_rule(&self, item: ItemId, rule: PricingRule) -> RuleRecord {
        debug!(item = %item, unit_price = rule.unit_price(), "Adding pricing rule");
        self.rules.write().insert(item, rule);
        RuleRecord::from_rule(item, &rule)
    }

    /// Replaces the rule for an item. Identical to [`Self::add_rule`] at this layer.
    pub fn update_rule(&self, item: ItemId, rule: PricingRule) -> RuleRecord {
        debug!(item = %item, unit_price = rule.unit_price(), "Updating pricing rule");
        self.rules.write().insert(item, rule);
        RuleRecord::from_rule(item, &rule)
    }

    /// Inserts a rule only if the item is not already present.
    pub fn insert_new(&self, item: ItemId, rule: PricingRule) -> CoreResult<RuleRecord> {
        let mut rules = self.rules.write();
        if rules.contains_key(&item) {
            return Err(CoreError::AlreadyExists(item));
        }

        debug!(item = %item, unit_price = rule.unit_price(), "Inserting new pricing rule");
        rules.insert(item, rule);
        Ok(RuleRecord::from_rule(item, &rule))
    }

    /// Atomically rebuilds the rule for an existing item.
    ///
    /// `f` receives the current rule and returns its replacement. If `f`
    /// fails, the stored rule is left untouched.
    pub fn replace_with<F>(&self, item: ItemId, f: F) -> CoreResult<RuleRecord>
    where
        F: FnOnce(PricingRule) -> ValidationResult<PricingRule>,
    {
        let mut rules = self.rules.write();
        let slot = rules.get_mut(&item).ok_or(CoreError::NotFound(item))?;

        let updated = f(*slot)?;
        *slot = updated;

        debug!(item = %item, unit_price = updated.unit_price(), "Replaced pricing rule");
        Ok(RuleRecord::from_rule(item, &updated))
    }

    /// Removes the rule for an item and returns its last record.
    pub fn delete_rule(&self, item: ItemId) -> CoreResult<RuleRecord> {
        let rule = self
            .rules
            .write()
            .remove(&item)
            .ok_or(CoreError::NotFound(item))?;

        debug!(item = %item, "Deleted pricing rule");
        Ok(RuleRecord::from_rule(item, &rule))
    }

    /// Returns true if the item has a rule.
    pub fn contains(&self, item: ItemId) -> bool {
        self.rules.read().contains_key(&item)
    }

    /// Number of stored rules.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns true if no rules are stored.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}

/// The default rule set a fresh process starts with.
fn seed_rules() -> [(ItemId, PricingRule); 4] {
    [
        (ItemId::seed('A'), PricingRule::seed(50, Some((3, 130)))),
        (ItemId::seed('B'), PricingRule::seed(30, Some((2, 45)))),
        (ItemId::seed('C'), PricingRule::seed(20, None)),
        (ItemId::seed('D'), PricingRule::seed(15, None)),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn item(c: &str) -> ItemId {
        ItemId::parse(c).unwrap()
    }

    #[test]
    fn test_seeded_rules() {
        let store = PricingRuleStore::seeded();
        assert_eq!(store.len(), 4);

        let a = store.get_rule(item("A")).unwrap();
        assert_eq!(a.unit_price(), 50);
        assert_eq!(a.special().map(|s| (s.quantity(), s.price())), Some((3, 130)));

        let d = store.get_rule(item("D")).unwrap();
        assert_eq!(d.unit_price(), 15);
        assert!(d.special().is_none());

        assert!(store.get_rule(item("Z")).is_none());
    }

    #[test]
    fn test_get_all_rules_is_ordered_snapshot() {
        let store = PricingRuleStore::seeded();
        let snapshot = store.get_all_rules();

        store.add_rule(item("E"), PricingRule::new(5).unwrap());

        let keys: Vec<char> = snapshot.keys().map(|k| k.as_char()).collect();
        assert_eq!(keys, vec!['A', 'B', 'C', 'D']);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_add_rule_overwrites() {
        let store = PricingRuleStore::seeded();
        let record = store.add_rule(item("A"), PricingRule::new(99).unwrap());

        assert_eq!(record.unit_price, 99);
        assert_eq!(record.special_quantity, None);
        assert_eq!(store.get_rule(item("A")).unwrap().unit_price(), 99);
    }

    #[test]
    fn test_update_rule_replaces_or_inserts() {
        let store = PricingRuleStore::seeded();

        let record = store.update_rule(item("A"), PricingRule::with_special(60, 4, 200).unwrap());
        assert_eq!(record.item, item("A"));
        assert_eq!(record.unit_price, 60);
        assert_eq!(record.special_quantity, Some(4));
        assert_eq!(record.special_price, Some(200));

        let stored = store.get_rule(item("A")).unwrap();
        assert_eq!(stored.unit_price(), 60);
        assert_eq!(stored.special().map(|s| (s.quantity(), s.price())), Some((4, 200)));

        let record = store.update_rule(item("E"), PricingRule::new(7).unwrap());
        assert_eq!(record.special_quantity, None);
        assert_eq!(store.get_rule(item("E")).unwrap().unit_price(), 7);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_insert_new_rejects_existing() {
        let store = PricingRuleStore::seeded();
        let result = store.insert_new(item("B"), PricingRule::new(1).unwrap());

        assert_eq!(result, Err(CoreError::AlreadyExists(item("B"))));
        assert_eq!(store.get_rule(item("B")).unwrap().unit_price(), 30);
    }

    #[test]
    fn test_replace_with_failure_leaves_rule() {
        let store = PricingRuleStore::seeded();
        let result = store.replace_with(item("A"), |rule| rule.with_unit_price(0));

        assert!(matches!(result, Err(CoreError::InvalidRule(_))));
        assert_eq!(store.get_rule(item("A")).unwrap().unit_price(), 50);
    }

    #[test]
    fn test_replace_with_missing_item() {
        let store = PricingRuleStore::new();
        let result = store.replace_with(item("A"), Ok);
        assert_eq!(result, Err(CoreError::NotFound(item("A"))));
    }

    #[test]
    fn test_delete_rule() {
        let store = PricingRuleStore::seeded();
        let record = store.delete_rule(item("C")).unwrap();

        assert_eq!(record.item, item("C"));
        assert_eq!(record.unit_price, 20);
        assert!(!store.contains(item("C")));
        assert_eq!(store.delete_rule(item("C")), Err(CoreError::NotFound(item("C"))));
    }

    #[test]
    fn test_concurrent_mutation_and_listing() {
        let store = Arc::new(PricingRuleStore::seeded());
        let letters: Vec<ItemId> = ('E'..='Z').filter_map(ItemId::from_char).collect();

        let writers: Vec<_> = letters
            .chunks(4)
            .map(|chunk| {
                let store = Arc::clone(&store);
                let chunk = chunk.to_vec();
                thread::spawn(move || {
                    for id in chunk {
                        store.add_rule(id, PricingRule::new(10).unwrap());
                        store
                            .replace_with(id, |r| r.with_unit_price(11))
                            .unwrap();
                    }
                })
            })
            .collect();

        let reader = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    let snapshot = store.get_all_rules();
                    assert!(snapshot.len() >= 4);
                }
            })
        };

        for handle in writers {
            handle.join().unwrap();
        }
        reader.join().unwrap();

        assert_eq!(store.len(), 26);
        assert!(letters
            .iter()
            .all(|id| store.get_rule(*id).map(|r| r.unit_price()) == Some(11)));
    }
}
