//! Dynamic Pricing Calculator
//!
//! Per-item price adjustments driven by inventory levels and time of day.
//! Inventory rules strictly dominate time rules; within each group the
//! first matching rule wins. Time windows live in an ordered rule table so
//! adding a window is a data change, not a code change.
//!
//! The clock is an explicit input - callers pass the timestamp, the
//! calculator never reads the system clock. That keeps it a pure function
//! and makes the hour-window tests deterministic.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use super::money::{to_decimal, to_f64};
use super::types::{InventoryFact, MenuItemFact, PricingAdjustment};

const REASON_BASE_PRICE: &str = "Base price";
const REASON_CRITICAL_INVENTORY: &str = "Critical inventory surge pricing";
const REASON_LOW_INVENTORY: &str = "Low inventory surge pricing";

/// A price adjustment, before it is applied to a concrete item
#[derive(Debug, Clone, Copy, PartialEq)]
enum Adjustment {
    /// Fraction in (0, 1] taken off the base price
    DiscountFraction(f64),
    /// Factor > 1 applied to raise the base price
    SurgeMultiplier(f64),
}

/// One time-of-day pricing window: matches when
/// `start_hour <= hour <= end_hour`
#[derive(Debug, Clone)]
struct TimeRule {
    start_hour: u32,
    end_hour: u32,
    adjustment: Adjustment,
    reason: &'static str,
}

/// The standard windows: happy hour, dinner peak, late night.
/// Evaluated in order, first match wins.
fn default_time_rules() -> Vec<TimeRule> {
    vec![
        TimeRule {
            start_hour: 14,
            end_hour: 17,
            adjustment: Adjustment::DiscountFraction(0.10),
            reason: "Happy hour discount",
        },
        TimeRule {
            start_hour: 18,
            end_hour: 20,
            adjustment: Adjustment::SurgeMultiplier(1.10),
            reason: "Peak hour surge pricing",
        },
        TimeRule {
            start_hour: 21,
            end_hour: 23,
            adjustment: Adjustment::DiscountFraction(0.15),
            reason: "Late night discount",
        },
    ]
}

/// Stateless per-item pricing calculator
#[derive(Debug, Clone)]
pub struct DynamicPricingCalculator {
    time_rules: Vec<TimeRule>,
}

impl Default for DynamicPricingCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicPricingCalculator {
    pub fn new() -> Self {
        Self {
            time_rules: default_time_rules(),
        }
    }

    /// Produce one adjustment per requested item, in request order
    ///
    /// Items without a menu fact are silently dropped - a missing catalog
    /// row is an omission, not an error. An empty id list yields an empty
    /// output. Never fails.
    pub fn adjust(
        &self,
        item_ids: &[i64],
        menu: &HashMap<i64, MenuItemFact>,
        inventory: &HashMap<i64, InventoryFact>,
        now: NaiveDateTime,
    ) -> Vec<PricingAdjustment> {
        let hour = now.hour();
        item_ids
            .iter()
            .filter_map(|id| {
                let item = menu.get(id)?;
                Some(self.adjust_item(item, inventory.get(id), hour))
            })
            .collect()
    }

    fn adjust_item(
        &self,
        item: &MenuItemFact,
        stock: Option<&InventoryFact>,
        hour: u32,
    ) -> PricingAdjustment {
        let matched = inventory_adjustment(stock).or_else(|| self.time_adjustment(hour));

        let original = to_decimal(item.unit_price);
        let mut discount_percentage = None;
        let mut surge_multiplier = None;

        let (dynamic_price, reason) = match matched {
            Some((Adjustment::SurgeMultiplier(factor), reason)) => {
                surge_multiplier = Some(factor);
                (original * to_decimal(factor), reason)
            }
            Some((Adjustment::DiscountFraction(fraction), reason)) => {
                discount_percentage = Some(fraction);
                (original * (Decimal::ONE - to_decimal(fraction)), reason)
            }
            None => (original, REASON_BASE_PRICE),
        };

        PricingAdjustment {
            item_id: item.id,
            original_price: item.unit_price,
            dynamic_price: to_f64(dynamic_price),
            discount_percentage,
            surge_multiplier,
            reason: reason.to_string(),
        }
    }

    /// First matching time window for the given hour (0-23)
    fn time_adjustment(&self, hour: u32) -> Option<(Adjustment, &'static str)> {
        self.time_rules
            .iter()
            .find(|rule| rule.start_hour <= hour && hour <= rule.end_hour)
            .map(|rule| (rule.adjustment, rule.reason))
    }
}

/// Inventory pressure tiers, checked before any time window.
/// Critical (at or below minimum stock) dominates low (at or below twice
/// the minimum).
fn inventory_adjustment(stock: Option<&InventoryFact>) -> Option<(Adjustment, &'static str)> {
    let stock = stock?;
    if stock.current_stock <= stock.minimum_stock {
        Some((
            Adjustment::SurgeMultiplier(1.25),
            REASON_CRITICAL_INVENTORY,
        ))
    } else if stock.current_stock <= stock.minimum_stock * 2 {
        Some((Adjustment::SurgeMultiplier(1.15), REASON_LOW_INVENTORY))
    } else {
        None
    }
}

// ==================== Tests ====================
