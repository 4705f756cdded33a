//! Pricing Decision Core
//!
//! The only part of the service carrying non-trivial decision logic.
//! Three stateless components, all pure functions over their inputs:
//!
//! - [`DynamicPricingCalculator`] - per-item adjusted prices from inventory
//!   and time-of-day rules
//! - [`OrderTotalCalculator`] - subtotal, tax, delivery fee, discounts
//! - [`PromoCodeResolver`] - promo code lookup against a static table
//!
//! Uses rust_decimal for precise calculations, f64 on the wire.

mod dynamic;
mod money;
mod order;
mod promo;
mod types;

pub use dynamic::*;
pub use money::{to_decimal, to_f64};
pub use order::*;
pub use promo::*;
pub use types::*;
