//! Basket checkout and price listing.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use tracing::debug;

use crate::error::ApiError;
use crate::schemas::{price_list, CheckoutRequest, CheckoutResponse, PriceEntry};
use crate::AppState;

/// Prices a basket.
///
/// ```text
/// POST /api/v1/checkout  { "items": "AAABBD" }  →  { "total": 190 }
/// ```
pub async fn process_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    debug!(items = %request.items, "process_checkout");

    request.validate(state.calculator.store())?;
    let total = state.calculator.calculate_total(&request.items)?;

    Ok(Json(CheckoutResponse { total }))
}

/// Lists every item with its unit price and special offer.
pub async fn get_prices(State(state): State<AppState>) -> Json<BTreeMap<String, PriceEntry>> {
    Json(price_list(&state.calculator.rules()))
}
