//! Pricing API Handlers
//!
//! Thin glue: fetch facts from the catalog, hand them to the pure
//! calculators, serialize the result. The only errors surfacing here come
//! from the catalog collaborator - the core itself never fails.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::pricing::{DiscountEntry, OrderRequest, OrderTotals, PricingAdjustment, to_decimal};
use crate::utils::AppResult;

// ==================== POST /pricing/dynamic ====================

#[derive(Debug, Deserialize)]
pub struct DynamicPricingRequest {
    pub item_ids: Vec<i64>,
}

/// POST /pricing/dynamic - adjusted prices for a set of menu items
///
/// Menu and inventory reads are independent, so they run concurrently;
/// either failure aborts the request before the calculator sees anything.
pub async fn dynamic_pricing(
    State(state): State<ServerState>,
    Json(request): Json<DynamicPricingRequest>,
) -> AppResult<Json<Vec<PricingAdjustment>>> {
    let (menu, inventory) = tokio::join!(
        state.catalog.fetch_menu_items(&request.item_ids),
        state.catalog.fetch_inventory(&request.item_ids),
    );
    let (menu, inventory) = (menu?, inventory?);

    let adjustments =
        state
            .dynamic_pricing
            .adjust(&request.item_ids, &menu, &inventory, Local::now().naive_local());

    Ok(Json(adjustments))
}

// ==================== POST /pricing/calculate ====================

/// POST /pricing/calculate - full order totals
///
/// Pure computation over the payload; never fails for business reasons
/// (an unknown promo code simply contributes nothing).
pub async fn calculate_order(
    State(state): State<ServerState>,
    Json(order): Json<OrderRequest>,
) -> Json<OrderTotals> {
    Json(state.order_totals.calculate(&order))
}

// ==================== GET /pricing/promo/{code} ====================

#[derive(Debug, Deserialize)]
pub struct PromoQuery {
    #[serde(default)]
    pub subtotal: f64,
}

#[derive(Debug, Serialize)]
pub struct PromoValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /pricing/promo/{code}?subtotal=N - validate a promo code
///
/// "Unknown code" and "minimum order not met" surface identically as
/// not-applicable.
pub async fn validate_promo(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Query(query): Query<PromoQuery>,
) -> Json<PromoValidation> {
    match state
        .order_totals
        .promo_resolver()
        .resolve(&code, to_decimal(query.subtotal))
    {
        Some(discount) => Json(PromoValidation {
            valid: true,
            discount: Some(discount.into_entry()),
            message: None,
        }),
        None => Json(PromoValidation {
            valid: false,
            discount: None,
            message: Some("Invalid or expired promo code".to_string()),
        }),
    }
}
