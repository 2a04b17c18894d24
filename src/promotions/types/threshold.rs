//! Threshold Promotion
//!
//! Units bought beyond the first `n` get a percentage off.

use std::num::NonZeroU32;

use decimal_percentage::Percentage;

use crate::{discounts::percent_points, money::Money};

/// Percentage off every unit strictly after the `after`th.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPromotion {
    after: NonZeroU32,
    percent: Percentage,
}

impl ThresholdPromotion {
    /// Create a new threshold promotion.
    pub fn new(after: NonZeroU32, percent: Percentage) -> Self {
        Self { after, percent }
    }

    /// Return the threshold quantity.
    pub fn after(&self) -> u32 {
        self.after.get()
    }

    /// Return the percentage taken off units past the threshold.
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Calculate the discount for `quantity` units at `unit_price`.
    pub fn discount(&self, unit_price: Money, quantity: u32) -> Money {
        match quantity.checked_sub(self.after()) {
            Some(extra) if extra > 0 => unit_price.times(extra).percent(self.percent),
            _ => Money::ZERO,
        }
    }

    /// Invoice description, e.g. `(10% off of every after the 3rd)`.
    pub fn description(&self) -> String {
        format!(
            "({}% off of every after the {}{})",
            percent_points(self.percent),
            self.after(),
            ordinal_suffix(self.after())
        )
    }
}

/// Suffix picked from the last digit only, so 11, 12 and 13 become `11st`, `12nd` and `13rd`.
pub fn ordinal_suffix(n: u32) -> &'static str {
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
