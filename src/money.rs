//! Money
//!
//! Exact base-10 amounts. Prices are parsed straight from their textual form into a
//! [`Decimal`], intermediate results (percentages, multiplied line totals) keep full
//! precision, and rounding to two fraction digits only happens when an amount is displayed.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Deref, Neg, Sub},
    str::FromStr,
};

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of fraction digits shown when an amount is displayed.
pub const DISPLAY_SCALE: u32 = 2;

/// Error returned when a textual amount is not a plain decimal literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid decimal amount {0:?}")]
pub struct ParseMoneyError(String);

/// An exact decimal amount of money.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Zero
    pub const ZERO: Money = Money {
        amount: Decimal::ZERO,
    };

    /// Creates a new amount from a decimal value.
    pub const fn new(amount: Decimal) -> Self {
        Money { amount }
    }

    /// Creates a new amount from minor units (pence/cents).
    pub fn from_minor(minor: i64) -> Self {
        Money {
            amount: Decimal::new(minor, DISPLAY_SCALE),
        }
    }

    /// Parses a decimal literal such as `"12.50"` without going through floating point.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseMoneyError`] if the trimmed string is not a decimal literal.
    pub fn parse(s: &str) -> Result<Self, ParseMoneyError> {
        s.trim()
            .parse::<Decimal>()
            .map(Money::new)
            .map_err(|_err| ParseMoneyError(s.to_string()))
    }

    /// Returns the exact amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Price of `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Money {
            amount: self.amount * Decimal::from(quantity),
        }
    }

    /// The given percentage of this amount, at full precision.
    #[must_use]
    pub fn percent(self, percent: Percentage) -> Self {
        Money {
            amount: percent * self.amount,
        }
    }

    /// Whether the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// The amount rounded to two fraction digits, halves rounded away from zero.
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money::new(amount)
    }
}

impl Deref for Money {
    type Target = Decimal;

    fn deref(&self) -> &Self::Target {
        &self.amount
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money {
            amount: self.amount + rhs.amount,
        }
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money {
            amount: self.amount - rhs.amount,
        }
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money {
            amount: -self.amount,
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Renders the amount with exactly two fraction digits, honouring width and alignment.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.rounded();

        rounded.rescale(DISPLAY_SCALE);

        // -0.004 rounds to zero; never print "-0.00"
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        f.pad(&rounded.to_string())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::discounts::percent_from_points;

    #[test]
    fn parse_keeps_exact_decimal() -> TestResult {
        let price = Money::parse("0.10")?;

        assert_eq!(price.times(3), Money::parse("0.30")?);

        Ok(())
    }

    #[test]
    fn parse_trims_whitespace() -> TestResult {
        assert_eq!(Money::parse(" 12.5 ")?, Money::from_minor(1250));

        Ok(())
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            Money::parse("twelve"),
            Err(ParseMoneyError("twelve".to_string()))
        );
    }

    #[test]
    fn percent_keeps_full_precision() -> TestResult {
        let price = Money::parse("0.99")?;

        assert_eq!(
            price.percent(percent_from_points(15)).amount(),
            Decimal::new(1485, 4)
        );

        Ok(())
    }

    #[test]
    fn display_pads_to_two_fraction_digits() {
        assert_eq!(Money::from_minor(1000).to_string(), "10.00");
        assert_eq!(Money::new(Decimal::new(5, 0)).to_string(), "5.00");
    }

    #[test]
    fn display_rounds_half_away_from_zero() {
        assert_eq!(Money::new(Decimal::new(1485, 4)).to_string(), "0.15");
        assert_eq!(Money::new(Decimal::new(2675, 3)).to_string(), "2.68");
        assert_eq!(Money::new(Decimal::new(125, 3)).to_string(), "0.13");
        assert_eq!(Money::new(Decimal::new(-2675, 3)).to_string(), "-2.68");
    }

    #[test]
    fn display_respects_width() {
        assert_eq!(format!("{:>8}", -Money::from_minor(1234)), "  -12.34");
    }

    #[test]
    fn display_never_shows_negative_zero() {
        assert_eq!(format!("{}", -Money::ZERO), "0.00");
        assert_eq!(format!("{}", Money::new(Decimal::new(-4, 3))), "0.00");
    }

    #[test]
    fn sum_adds_all_amounts() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_minor).sum();

        assert_eq!(total, Money::from_minor(355));
    }
}
