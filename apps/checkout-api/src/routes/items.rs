//! # Item Management Routes
//!
//! CRUD over pricing rules. Every handler normalizes the item id (one
//! letter, any case → uppercase) before calling the calculator, and every
//! successful call returns the flat [`RuleRecord`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PUT /api/v1/items/b/special-price  { "quantity": 3, "price": 70 }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemId::parse("b") ──► B          bad id?   → 400                     │
//! │  SpecialPriceRequest::validate     bad body? → 400                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  calculator.set_special_price(B, 3, 70)                                │
//! │       │                            unknown?  → 404                     │
//! │       ▼                                                                 │
//! │  200 { "item": "B", "unit_price": 30,                                  │
//! │        "special_quantity": 3, "special_price": 70 }                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use checkout_core::{ItemId, RuleRecord};
use tracing::info;

use crate::error::ApiError;
use crate::schemas::{ItemIdQuery, PricingRuleRequest, SpecialPriceRequest, UnitPriceQuery};
use crate::AppState;

/// Adds a new item with its pricing.
pub async fn add_item(
    State(state): State<AppState>,
    Query(query): Query<ItemIdQuery>,
    Json(request): Json<PricingRuleRequest>,
) -> Result<(StatusCode, Json<RuleRecord>), ApiError> {
    let item = ItemId::parse(&query.item_id)?;
    let pricing = request.validate()?;

    let record = state.calculator.add_item(item, pricing)?;
    info!(item = %item, unit_price = record.unit_price, "Item added");

    Ok((StatusCode::CREATED, Json(record)))
}

/// Changes the unit price of an item.
pub async fn update_unit_price(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Query(query): Query<UnitPriceQuery>,
) -> Result<Json<RuleRecord>, ApiError> {
    let item = ItemId::parse(&item_id)?;
    let unit_price = checkout_core::validation::positive_unit_price(query.unit_price)?;

    let record = state.calculator.update_unit_price(item, unit_price)?;
    info!(item = %item, unit_price, "Unit price updated");

    Ok(Json(record))
}

/// Sets or replaces the special offer of an item.
pub async fn set_special_price(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(request): Json<SpecialPriceRequest>,
) -> Result<Json<RuleRecord>, ApiError> {
    let item = ItemId::parse(&item_id)?;
    let (quantity, price) = request.validate()?;

    let record = state.calculator.set_special_price(item, quantity, price)?;
    info!(item = %item, quantity, price, "Special price set");

    Ok(Json(record))
}

/// Removes the special offer of an item.
pub async fn remove_special_price(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<RuleRecord>, ApiError> {
    let item = ItemId::parse(&item_id)?;

    let record = state.calculator.remove_special_price(item)?;
    info!(item = %item, "Special price removed");

    Ok(Json(record))
}

/// Deletes an item and its pricing.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<RuleRecord>, ApiError> {
    let item = ItemId::parse(&item_id)?;

    let record = state.calculator.delete_item(item)?;
    info!(item = %item, "Item deleted");

    Ok(Json(record))
}
