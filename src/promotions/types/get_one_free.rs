//! Get One Free Promotion
//!
//! Every complete group of `n` units of a product makes one unit of that group free.

use std::num::NonZeroU32;

use crate::money::Money;

/// Buy `n - 1` units, get the `n`th free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetOneFreePromotion {
    every: NonZeroU32,
}

impl GetOneFreePromotion {
    /// Create a new promotion where every `every`th unit is free.
    pub fn new(every: NonZeroU32) -> Self {
        Self { every }
    }

    /// Return the group size.
    pub fn every(self) -> u32 {
        self.every.get()
    }

    /// One free unit per complete group, at the current unit price.
    pub fn discount(self, unit_price: Money, quantity: u32) -> Money {
        unit_price.times(quantity / self.every)
    }

    /// Invoice description, e.g. `(buy 2, get 1 free)`.
    pub fn description(self) -> String {
        format!("(buy {}, get 1 free)", self.every() - 1)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn every(n: u32) -> Result<GetOneFreePromotion, &'static str> {
        NonZeroU32::new(n)
            .map(GetOneFreePromotion::new)
            .ok_or("group size must be non-zero")
    }

    #[test]
    fn one_free_per_complete_group() -> TestResult {
        let promo = every(3)?;
        let price = Money::from_minor(79);

        assert_eq!(promo.discount(price, 2), Money::ZERO);
        assert_eq!(promo.discount(price, 3), Money::from_minor(79));
        assert_eq!(promo.discount(price, 5), Money::from_minor(79));
        assert_eq!(promo.discount(price, 6), Money::from_minor(158));

        Ok(())
    }

    #[test]
    fn group_of_one_makes_everything_free() -> TestResult {
        let promo = every(1)?;

        assert_eq!(
            promo.discount(Money::from_minor(250), 4),
            Money::from_minor(1000)
        );

        Ok(())
    }

    #[test]
    fn description_counts_paid_units() -> TestResult {
        assert_eq!(every(3)?.description(), "(buy 2, get 1 free)");
        assert_eq!(every(1)?.description(), "(buy 0, get 1 free)");

        Ok(())
    }
}
