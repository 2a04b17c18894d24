//! Coupon Fixtures

use serde::Deserialize;

use crate::coupons::CouponSpec;

/// Coupon Fixture
#[derive(Debug, Deserialize)]
pub struct CouponFixture {
    /// Coupon name
    pub name: String,

    /// What the coupon takes off
    #[serde(flatten)]
    pub discount: CouponDiscountFixture,
}

/// Coupon discount from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CouponDiscountFixture {
    /// Fixed amount off
    Amount {
        /// Amount as a decimal literal (e.g., "5.00")
        amount: String,
    },

    /// Percent off the cart total
    Percent {
        /// Percent points off
        percent: u32,
    },
}

impl From<CouponDiscountFixture> for CouponSpec {
    fn from(fixture: CouponDiscountFixture) -> Self {
        match fixture {
            CouponDiscountFixture::Amount { amount } => CouponSpec::Amount(amount),
            CouponDiscountFixture::Percent { percent } => CouponSpec::Percent(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn amount_coupon() -> TestResult {
        let coupon: CouponFixture =
            serde_norway::from_str("name: FIVER\ntype: amount\namount: \"5.00\"\n")?;

        assert_eq!(coupon.name, "FIVER");
        assert_eq!(
            CouponSpec::from(coupon.discount),
            CouponSpec::Amount("5.00".to_string())
        );

        Ok(())
    }

    #[test]
    fn percent_coupon() -> TestResult {
        let coupon: CouponFixture =
            serde_norway::from_str("name: TEATIME\ntype: percent\npercent: 20\n")?;

        assert_eq!(CouponSpec::from(coupon.discount), CouponSpec::Percent(20));

        Ok(())
    }
}
