//! Discounts
//!
//! Percentage helpers shared by product promotions and cart coupons.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

/// Builds a fractional [`Percentage`] from whole percent points (`15` becomes `0.15`).
pub fn percent_from_points(points: u32) -> Percentage {
    Percentage::from(Decimal::from(points) / Decimal::ONE_HUNDRED)
}

/// Converts a fractional percentage back to percent points for display (`0.15` becomes `15`).
pub fn percent_points(percent: Percentage) -> Decimal {
    // decimal_percentage doesn't expose the inner value, multiplying unwraps it
    (percent * Decimal::ONE_HUNDRED).normalize()
}
