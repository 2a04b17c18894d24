//! Package Promotion
//!
//! Units bought in whole packages of `n` get a percentage off; the remainder is full price.

use std::num::NonZeroU32;

use decimal_percentage::Percentage;

use crate::{discounts::percent_points, money::Money};

/// Percentage off every unit that is part of a complete package.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackagePromotion {
    size: NonZeroU32,
    percent: Percentage,
}

impl PackagePromotion {
    /// Create a new package promotion.
    pub fn new(size: NonZeroU32, percent: Percentage) -> Self {
        Self { size, percent }
    }

    /// Return the package size.
    pub fn size(&self) -> u32 {
        self.size.get()
    }

    /// Return the percentage taken off packaged units.
    pub fn percent(&self) -> Percentage {
        self.percent
    }

    /// Calculate the discount for `quantity` units at `unit_price`.
    pub fn discount(&self, unit_price: Money, quantity: u32) -> Money {
        let packaged = quantity - quantity % self.size;

        unit_price.times(packaged).percent(self.percent)
    }

    /// Invoice description, e.g. `(get 20% off for every 5)`.
    pub fn description(&self) -> String {
        format!(
            "(get {}% off for every {})",
            percent_points(self.percent),
            self.size()
        )
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::discounts::percent_from_points;

    fn package(size: u32, percent: u32) -> Result<PackagePromotion, &'static str> {
        NonZeroU32::new(size)
            .map(|size| PackagePromotion::new(size, percent_from_points(percent)))
            .ok_or("package size must be non-zero")
    }

    #[test]
    fn only_whole_packages_are_discounted() -> TestResult {
        let promo = package(5, 20)?;
        let price = Money::from_minor(1000);

        assert_eq!(promo.discount(price, 4), Money::ZERO);
        assert_eq!(promo.discount(price, 7), Money::from_minor(1000));
        assert_eq!(promo.discount(price, 10), Money::from_minor(2000));

        Ok(())
    }

    #[test]
    fn fractional_discounts_keep_precision() -> TestResult {
        let promo = package(3, 15)?;

        // 3 * 0.99 * 0.15 = 0.4455
        assert_eq!(
            promo.discount(Money::from_minor(99), 4).amount(),
            rust_decimal::Decimal::new(4455, 4)
        );

        Ok(())
    }

    #[test]
    fn description_shows_percent_points_and_size() -> TestResult {
        assert_eq!(package(4, 20)?.description(), "(get 20% off for every 4)");

        Ok(())
    }
}
