//! Money conversion helpers
//!
//! All pricing arithmetic runs on [`Decimal`]; f64 appears only at the wire
//! boundary. Rounding to 2 places (half-up) happens exactly once per derived
//! value, when it leaves the core through [`to_f64`] - intermediate sums stay
//! unrounded so repeated calculations are reproducible.

use rust_decimal::prelude::*;

/// Monetary values are presented with 2 fractional digits, half-up.
const DECIMAL_PLACES: u32 = 2;

/// Convert a wire-level f64 into a Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round a Decimal to 2 places and convert back to f64 for presentation
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        // 1.575 is the tax pin for a $18.00 taxable base at 8.75%
        assert_eq!(to_f64(to_decimal(18.0) * to_decimal(0.0875)), 1.58);
        assert_eq!(to_f64(Decimal::new(10005, 3)), 10.01); // 10.005
        assert_eq!(to_f64(Decimal::new(-10005, 3)), -10.01);
    }

    #[test]
    fn round_trip_is_stable() {
        let d = to_decimal(23.57);
        assert_eq!(to_f64(d), 23.57);
    }
}
