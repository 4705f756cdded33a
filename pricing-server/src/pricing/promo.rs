//! Promo Code Resolver
//!
//! Resolves a code plus the current subtotal to a discount descriptor, or
//! "not applicable". Lookup is case-insensitive against a static table.
//! Unknown codes and codes whose minimum order is not met both surface as
//! `None` - callers cannot tell them apart, by contract.
//!
//! The resolver never touches delivery fees or the subtotal itself; turning
//! a descriptor into money off the order is the order calculator's job.

use rust_decimal::Decimal;

use super::money::{to_decimal, to_f64};
use super::types::{DiscountEntry, DiscountType, PromoCodeDefinition, PromoKind};

/// A resolved promo discount
///
/// `amount` stays an unrounded Decimal so downstream tax arithmetic works on
/// the exact value; rounding happens in [`PromoDiscount::into_entry`].
#[derive(Debug, Clone)]
pub struct PromoDiscount {
    pub code: String,
    pub description: String,
    pub amount: Decimal,
}

impl PromoDiscount {
    /// Convert to the wire-level discount entry (rounds the amount)
    pub fn into_entry(self) -> DiscountEntry {
        DiscountEntry {
            kind: DiscountType::PromoCode,
            code: Some(self.code),
            description: self.description,
            amount: to_f64(self.amount),
        }
    }
}

/// Case-insensitive resolver over the static promo table
#[derive(Debug, Clone)]
pub struct PromoCodeResolver {
    codes: Vec<PromoCodeDefinition>,
}

impl PromoCodeResolver {
    pub fn new(codes: Vec<PromoCodeDefinition>) -> Self {
        Self { codes }
    }

    /// Resolve a code against the table for the given (unrounded) subtotal
    ///
    /// Returns `None` for unknown codes and for codes whose `minimum_order`
    /// exceeds the subtotal. Pure and side-effect-free.
    pub fn resolve(&self, code: &str, subtotal: Decimal) -> Option<PromoDiscount> {
        let def = self
            .codes
            .iter()
            .find(|d| d.code.eq_ignore_ascii_case(code))?;

        if subtotal < to_decimal(def.minimum_order) {
            return None;
        }

        let value = to_decimal(def.value);
        let (amount, description) = match def.kind {
            PromoKind::Percentage => (
                subtotal * value,
                format!("{}% off your order", (def.value * 100.0).round() as i64),
            ),
            PromoKind::Fixed => (value, format!("${:.2} off your order", def.value)),
            PromoKind::FreeDelivery => (value, "Free delivery".to_string()),
        };

        Some(PromoDiscount {
            code: code.to_string(),
            description,
            amount,
        })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::builtin_promo_codes;

    fn resolver() -> PromoCodeResolver {
        PromoCodeResolver::new(builtin_promo_codes())
    }

    #[test]
    fn test_unknown_code() {
        assert!(resolver().resolve("NOPE", to_decimal(100.0)).is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let discount = resolver()
            .resolve("welcome10", to_decimal(20.0))
            .expect("lowercase code should resolve");

        assert_eq!(discount.code, "welcome10");
        assert_eq!(to_f64(discount.amount), 2.0);
        assert_eq!(discount.description, "10% off your order");
    }

    #[test]
    fn test_minimum_order_not_met() {
        // SAVE5 requires a $20.00 order
        assert!(resolver().resolve("SAVE5", to_decimal(10.0)).is_none());
        assert!(resolver().resolve("SAVE5", to_decimal(19.99)).is_none());
    }

    #[test]
    fn test_fixed_amount() {
        let discount = resolver()
            .resolve("SAVE5", to_decimal(20.0))
            .expect("SAVE5 eligible at $20.00");

        assert_eq!(to_f64(discount.amount), 5.0);
        assert_eq!(discount.description, "$5.00 off your order");
    }

    #[test]
    fn test_free_delivery_code() {
        // FREESHIP has no minimum; amount is the fee being waived
        let discount = resolver()
            .resolve("FREESHIP", Decimal::ZERO)
            .expect("FREESHIP has no minimum order");

        assert_eq!(to_f64(discount.amount), 3.99);
        assert_eq!(discount.description, "Free delivery");
    }

    #[test]
    fn test_percentage_amount_is_unrounded() {
        // 10% of $20.55 = $2.055 - the descriptor keeps the exact value,
        // the wire entry rounds it
        let discount = resolver()
            .resolve("WELCOME10", to_decimal(20.55))
            .unwrap();

        assert_eq!(discount.amount, to_decimal(20.55) * to_decimal(0.10));
        assert_eq!(discount.into_entry().amount, 2.06);
    }

    #[test]
    fn test_entry_shape() {
        let entry = resolver()
            .resolve("WELCOME10", to_decimal(20.0))
            .unwrap()
            .into_entry();

        assert_eq!(entry.kind, DiscountType::PromoCode);
        assert_eq!(entry.code.as_deref(), Some("WELCOME10"));
        assert_eq!(entry.amount, 2.0);
    }
}
