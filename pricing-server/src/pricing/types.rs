//! Pricing data model
//!
//! Facts fetched from the catalog service (menu items, inventory rows),
//! request/response shapes for the pricing endpoints, and the static promo
//! code table. Field names on the wire are pinned by the existing clients -
//! note `price` on the catalog side vs `unit_price` internally, and
//! `dynamic_price` / `discount_percentage` on the adjustment output.

use serde::{Deserialize, Serialize};

// ==================== Catalog Facts ====================

/// Menu item snapshot from the catalog service
///
/// Immutable for the duration of one pricing call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemFact {
    pub id: i64,
    pub name: String,
    /// Base price as listed on the menu
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub category_id: i64,
    pub is_available: bool,
}

/// Inventory snapshot for one menu item
///
/// Optional per item - absence means "no inventory-based adjustment".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryFact {
    pub menu_item_id: i64,
    pub current_stock: i64,
    pub minimum_stock: i64,
}

// ==================== Dynamic Pricing ====================

/// Per-item adjusted price with a human-readable reason
///
/// At most one of `discount_percentage` / `surge_multiplier` is set;
/// neither means the item sells at base price.
#[derive(Debug, Clone, Serialize)]
pub struct PricingAdjustment {
    pub item_id: i64,
    pub original_price: f64,
    /// Adjusted price, rounded to 2 fractional digits
    pub dynamic_price: f64,
    /// Discount fraction in (0, 1]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<f64>,
    /// Surge factor > 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surge_multiplier: Option<f64>,
    pub reason: String,
}

// ==================== Order Calculation ====================

/// One order line as priced at order time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

/// How the order reaches the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    #[default]
    Delivery,
    Pickup,
    DineIn,
}

/// Order payload handed to [`OrderTotalCalculator`]
///
/// [`OrderTotalCalculator`]: crate::pricing::OrderTotalCalculator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderRequest {
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub order_type: OrderType,
    pub promo_code: Option<String>,
}

/// Discount entry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    FreeDelivery,
    PromoCode,
}

/// One applied (or informational) discount on an order
#[derive(Debug, Clone, Serialize)]
pub struct DiscountEntry {
    #[serde(rename = "type")]
    pub kind: DiscountType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub description: String,
    pub amount: f64,
}

/// Full order totals, every amount rounded to 2 fractional digits
#[derive(Debug, Clone, Serialize)]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub delivery_fee: f64,
    pub discount_amount: f64,
    pub total_amount: f64,
    pub applied_discounts: Vec<DiscountEntry>,
}

// ==================== Promo Codes ====================

/// Promo code kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoKind {
    /// Fraction of the subtotal (value in (0, 1])
    Percentage,
    /// Flat currency amount
    Fixed,
    /// Waives the delivery fee (value = the fee being waived)
    FreeDelivery,
}

/// One entry in the static promo code table
///
/// The table is fixed process-wide configuration - built at startup, never
/// mutated. Codes match case-insensitively.
#[derive(Debug, Clone)]
pub struct PromoCodeDefinition {
    pub code: String,
    pub kind: PromoKind,
    pub value: f64,
    pub minimum_order: f64,
}
