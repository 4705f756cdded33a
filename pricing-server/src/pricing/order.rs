//! Order Total Calculator
//!
//! Full order totals: subtotal, delivery fee, promo discount, tax, grand
//! total. Promo resolution is delegated to [`PromoCodeResolver`].
//!
//! # Calculation Steps
//! 1. subtotal = sum of unit_price * quantity over all line items
//! 2. Delivery fee (delivery orders only; waived above the free-delivery
//!    minimum, which appends an informational `free_delivery` entry)
//! 3. Promo code resolution; a resolved descriptor becomes the discount
//! 4. Tax on subtotal minus discount, never on the raw subtotal
//! 5. total = subtotal + tax + delivery fee - discount
//!
//! Steps 4-5 run on unrounded decimals; the five outputs are rounded only
//! when `OrderTotals` is built. No clock involved, so two calls with the
//! same input are bit-identical.

use rust_decimal::Decimal;

use super::money::{to_decimal, to_f64};
use super::promo::PromoCodeResolver;
use super::types::{DiscountEntry, DiscountType, OrderRequest, OrderTotals, OrderType};
use crate::core::config::PricingConfig;

/// Stateless order total calculator
///
/// Holds the pricing knobs and the promo table handed in at construction;
/// nothing here reads ambient state.
#[derive(Debug, Clone)]
pub struct OrderTotalCalculator {
    config: PricingConfig,
    promo: PromoCodeResolver,
}

impl OrderTotalCalculator {
    pub fn new(config: PricingConfig) -> Self {
        let promo = PromoCodeResolver::new(config.promo_codes.clone());
        Self { config, promo }
    }

    /// The resolver this calculator consults, for callers that only need
    /// promo validation
    pub fn promo_resolver(&self) -> &PromoCodeResolver {
        &self.promo
    }

    /// Compute full order totals
    ///
    /// Never fails: a promo code that does not resolve simply contributes
    /// no discount and no entry. Quantity is taken as-is - payload
    /// validation is the transport's job.
    pub fn calculate(&self, order: &OrderRequest) -> OrderTotals {
        let mut applied_discounts = Vec::new();

        // Step 1: subtotal, unrounded
        let subtotal: Decimal = order
            .items
            .iter()
            .map(|item| to_decimal(item.unit_price) * Decimal::from(item.quantity))
            .sum();

        // Step 2: delivery fee
        let base_fee = to_decimal(self.config.base_delivery_fee);
        let mut delivery_fee = Decimal::ZERO;
        if order.order_type == OrderType::Delivery {
            if subtotal < to_decimal(self.config.free_delivery_minimum) {
                delivery_fee = base_fee;
            } else {
                // Informational entry only: the fee was never charged, so
                // the amount is not part of discount_amount.
                applied_discounts.push(DiscountEntry {
                    kind: DiscountType::FreeDelivery,
                    code: None,
                    description: format!(
                        "Free delivery on orders over ${:.2}",
                        self.config.free_delivery_minimum
                    ),
                    amount: to_f64(base_fee),
                });
            }
        }

        // Step 3: promo discount
        let mut discount = Decimal::ZERO;
        if let Some(code) = order.promo_code.as_deref()
            && let Some(promo) = self.promo.resolve(code, subtotal)
        {
            discount = promo.amount;
            applied_discounts.push(promo.into_entry());
        }

        // Steps 4-5: tax on the discounted base, then the grand total
        let taxable = (subtotal - discount).max(Decimal::ZERO);
        let tax = taxable * to_decimal(self.config.tax_rate);
        let total = subtotal + tax + delivery_fee - discount;

        OrderTotals {
            subtotal: to_f64(subtotal),
            tax_amount: to_f64(tax),
            delivery_fee: to_f64(delivery_fee),
            discount_amount: to_f64(discount),
            total_amount: to_f64(total),
            applied_discounts,
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::types::LineItem;

    fn calculator() -> OrderTotalCalculator {
        OrderTotalCalculator::new(PricingConfig::default())
    }

    fn order(items: Vec<(f64, i64)>, order_type: OrderType, promo: Option<&str>) -> OrderRequest {
        OrderRequest {
            items: items
                .into_iter()
                .map(|(unit_price, quantity)| LineItem {
                    unit_price,
                    quantity,
                })
                .collect(),
            customer_id: None,
            order_type,
            promo_code: promo.map(str::to_string),
        }
    }

    #[test]
    fn test_delivery_below_threshold_charges_fee() {
        // $20.00 delivery order: fee applies, tax on the full subtotal
        let totals = calculator().calculate(&order(vec![(10.0, 2)], OrderType::Delivery, None));

        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.delivery_fee, 3.99);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.tax_amount, 1.75); // 20.00 * 0.0875
        assert_eq!(totals.total_amount, 25.74);
        assert!(totals.applied_discounts.is_empty());
    }

    #[test]
    fn test_free_delivery_entry_is_informational() {
        // $30.00 delivery order: fee waived, entry appended, but the
        // amount is never subtracted from the total
        let totals = calculator().calculate(&order(vec![(15.0, 2)], OrderType::Delivery, None));

        assert_eq!(totals.subtotal, 30.0);
        assert_eq!(totals.delivery_fee, 0.0);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.tax_amount, 2.63); // round(30.00 * 0.0875)
        assert_eq!(totals.total_amount, 32.63);

        assert_eq!(totals.applied_discounts.len(), 1);
        let entry = &totals.applied_discounts[0];
        assert_eq!(entry.kind, DiscountType::FreeDelivery);
        assert_eq!(entry.amount, 3.99);
        assert!(entry.code.is_none());
    }

    #[test]
    fn test_pickup_order_never_charges_delivery() {
        let totals = calculator().calculate(&order(vec![(10.0, 1)], OrderType::Pickup, None));

        assert_eq!(totals.delivery_fee, 0.0);
        // No free-delivery entry either - the threshold only matters for
        // delivery orders
        assert!(totals.applied_discounts.is_empty());
    }

    #[test]
    fn test_ineligible_promo_contributes_nothing() {
        // SAVE5 needs a $20.00 minimum; totals still compute
        let totals = calculator().calculate(&order(
            vec![(10.0, 1)],
            OrderType::Delivery,
            Some("SAVE5"),
        ));

        assert_eq!(totals.subtotal, 10.0);
        assert_eq!(totals.discount_amount, 0.0);
        assert!(totals.applied_discounts.is_empty());
        assert_eq!(totals.tax_amount, 0.88); // 10.00 * 0.0875 = 0.875
        assert_eq!(totals.total_amount, 14.87);
    }

    #[test]
    fn test_unknown_promo_contributes_nothing() {
        let totals = calculator().calculate(&order(
            vec![(30.0, 1)],
            OrderType::Delivery,
            Some("BOGUS"),
        ));

        assert_eq!(totals.discount_amount, 0.0);
        // Only the informational free-delivery entry remains
        assert_eq!(totals.applied_discounts.len(), 1);
        assert_eq!(totals.applied_discounts[0].kind, DiscountType::FreeDelivery);
    }

    #[test]
    fn test_tax_is_computed_on_discounted_base() {
        // $20.00 subtotal, lowercase welcome10: discount 2.00,
        // taxable 18.00, tax 1.575 -> 1.58, fee 3.99 (below threshold),
        // total 20.00 + 1.58 + 3.99 - 2.00 = 23.57
        let totals = calculator().calculate(&order(
            vec![(10.0, 2)],
            OrderType::Delivery,
            Some("welcome10"),
        ));

        assert_eq!(totals.subtotal, 20.0);
        assert_eq!(totals.discount_amount, 2.0);
        assert_eq!(totals.tax_amount, 1.58);
        assert_eq!(totals.delivery_fee, 3.99);
        assert_eq!(totals.total_amount, 23.57);

        assert_eq!(totals.applied_discounts.len(), 1);
        let entry = &totals.applied_discounts[0];
        assert_eq!(entry.kind, DiscountType::PromoCode);
        assert_eq!(entry.code.as_deref(), Some("welcome10"));
        assert_eq!(entry.amount, 2.0);
    }

    #[test]
    fn test_freeship_reduces_the_total() {
        // FREESHIP resolves to a $3.99 descriptor that does subtract,
        // on top of the fee charged for this below-threshold order
        let totals = calculator().calculate(&order(
            vec![(10.0, 1)],
            OrderType::Delivery,
            Some("FREESHIP"),
        ));

        assert_eq!(totals.discount_amount, 3.99);
        assert_eq!(totals.delivery_fee, 3.99);
        // taxable 6.01, tax 0.525875 -> 0.53
        assert_eq!(totals.tax_amount, 0.53);
        assert_eq!(totals.total_amount, 10.53);
    }

    #[test]
    fn test_empty_order() {
        let totals = calculator().calculate(&order(vec![], OrderType::Delivery, None));

        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.delivery_fee, 3.99);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total_amount, 3.99);
    }

    #[test]
    fn test_discount_larger_than_subtotal_clamps_taxable() {
        // $2.00 pickup order with SAVE5 ineligible; force eligibility with
        // a custom table where a $5 code has no minimum
        let config = PricingConfig {
            promo_codes: vec![crate::pricing::PromoCodeDefinition {
                code: "BIG".into(),
                kind: crate::pricing::PromoKind::Fixed,
                value: 5.0,
                minimum_order: 0.0,
            }],
            ..PricingConfig::default()
        };
        let totals = OrderTotalCalculator::new(config).calculate(&order(
            vec![(2.0, 1)],
            OrderType::Pickup,
            Some("BIG"),
        ));

        // taxable clamps to zero; the arithmetic identity still holds
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.discount_amount, 5.0);
        assert_eq!(totals.total_amount, -3.0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let request = order(vec![(12.49, 3), (4.2, 1)], OrderType::Delivery, Some("WELCOME10"));
        let calc = calculator();

        let first = calc.calculate(&request);
        let second = calc.calculate(&request);

        assert_eq!(first.subtotal, second.subtotal);
        assert_eq!(first.tax_amount, second.tax_amount);
        assert_eq!(first.delivery_fee, second.delivery_fee);
        assert_eq!(first.discount_amount, second.discount_amount);
        assert_eq!(first.total_amount, second.total_amount);
    }

    #[test]
    fn test_negative_quantity_is_accepted_arithmetically() {
        // Validation lives outside the core; a refund-style line just
        // subtracts
        let totals = calculator().calculate(&order(
            vec![(10.0, 3), (10.0, -1)],
            OrderType::Pickup,
            None,
        ));

        assert_eq!(totals.subtotal, 20.0);
    }
}
