//! # Checkout API
//!
//! HTTP server for basket pricing and pricing-rule management.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Checkout API                                    │
//! │                                                                         │
//! │  Client ───► axum Router ───► routes::{checkout, items}                │
//! │                  │                    │                                 │
//! │             TraceLayer                ▼                                 │
//! │                              AppState.calculator                        │
//! │                                       │                                 │
//! │                                       ▼                                 │
//! │                          Arc<PricingRuleStore>  (in memory)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables, see [`config::ApiConfig`]:
//! - `CHECKOUT_BIND_ADDR` - Listen interface (default: 0.0.0.0)
//! - `CHECKOUT_PORT` - HTTP port (default: 8000)
//! - `CHECKOUT_LOG_LEVEL` - Fallback tracing filter (default: info)
//! - `CHECKOUT_SEED_RULES` - Start with the A/B/C/D rules (default: true)

use std::sync::Arc;

use axum::{response::IntoResponse, routing::get, Router};
use checkout_core::{CheckoutCalculator, PricingRuleStore};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod schemas;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;

/// Shared application state.
///
/// Cloned per request; the store behind the calculator is shared.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: CheckoutCalculator,
}

impl AppState {
    /// Wraps an explicitly constructed store.
    pub fn new(store: Arc<PricingRuleStore>) -> Self {
        AppState {
            calculator: CheckoutCalculator::new(store),
        }
    }

    /// Builds state from configuration.
    pub fn from_config(config: &ApiConfig) -> Self {
        let store = if config.seed_rules {
            PricingRuleStore::seeded()
        } else {
            PricingRuleStore::new()
        };
        AppState::new(Arc::new(store))
    }
}

/// Builds the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}
