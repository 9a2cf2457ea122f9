//! HTTP routes, nested under `/api/v1`.
//!
//! ```text
//! POST   /checkout                     checkout::process_checkout
//! GET    /prices                       checkout::get_prices
//! POST   /items?item_id=E              items::add_item
//! PUT    /items/{item_id}/price        items::update_unit_price
//! PUT    /items/{item_id}/special-price items::set_special_price
//! DELETE /items/{item_id}/special-price items::remove_special_price
//! DELETE /items/{item_id}              items::delete_item
//! ```

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::AppState;

pub mod checkout;
pub mod items;

/// Builds the versioned API router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", post(checkout::process_checkout))
        .route("/prices", get(checkout::get_prices))
        .route("/items", post(items::add_item))
        .route("/items/{item_id}", delete(items::delete_item))
        .route("/items/{item_id}/price", put(items::update_unit_price))
        .route(
            "/items/{item_id}/special-price",
            put(items::set_special_price).delete(items::remove_special_price),
        )
}
