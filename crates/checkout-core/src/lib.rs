//! # checkout-core: Pure Pricing Logic
//!
//! This crate is the **heart** of the checkout service. It contains the
//! pricing rule model, the rule store and the basket calculator, with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Checkout Service Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-api (axum)                          │   │
//! │  │   POST /checkout   GET /prices   POST/PUT/DELETE /items        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐        ┌──────────────────┐             │   │
//! │  │   │ CheckoutCalculator│──────►│ PricingRuleStore │             │   │
//! │  │   │ totals, CRUD     │  Arc   │ RwLock<HashMap>  │             │   │
//! │  │   └──────────────────┘        └──────────────────┘             │   │
//! │  │                                                                 │   │
//! │  │   types • validation • error                                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBALS • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Item ids, pricing rules, records
//! - [`store`] - Keyed rule storage
//! - [`calculator`] - Basket totals and guarded rule mutations
//! - [`validation`] - Input rules for ids and prices
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use checkout_core::{CheckoutCalculator, ItemId, PricingRuleStore};
//!
//! let store = Arc::new(PricingRuleStore::seeded());
//! let calculator = CheckoutCalculator::new(store);
//!
//! assert_eq!(calculator.calculate_total("AAA").unwrap(), 130);
//!
//! let b = ItemId::parse("b").unwrap();
//! calculator.remove_special_price(b).unwrap();
//! assert_eq!(calculator.calculate_total("BB").unwrap(), 60);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::CheckoutCalculator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use store::PricingRuleStore;
pub use types::*;
