//! Coupons
//!
//! Cart-level discounts, applied once to the cart total after product promotions.

use decimal_percentage::Percentage;
use slotmap::new_key_type;

use crate::{
    discounts::percent_points,
    invoice::InvoiceLine,
    money::Money,
};

new_key_type! {
    /// Coupon Key
    pub struct CouponKey;
}

/// Coupon descriptor, as supplied when registering a coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponSpec {
    /// Fixed amount off, given as a decimal literal (e.g. `"5.00"`).
    Amount(String),

    /// Percent points off the whole cart.
    Percent(u32),
}

/// What a coupon takes off the cart total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CouponDiscount {
    /// Fixed amount off, capped at the total.
    Amount(Money),

    /// Percentage off the total.
    Percent(Percentage),
}

/// Coupon
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    name: String,
    discount: CouponDiscount,
}

impl Coupon {
    /// Create a new coupon.
    pub fn new(name: impl Into<String>, discount: CouponDiscount) -> Self {
        Self {
            name: name.into(),
            discount,
        }
    }

    /// Coupon name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Coupon discount kind
    pub fn discount(&self) -> CouponDiscount {
        self.discount
    }

    /// Amount taken off `total`; a fixed amount never takes the total below zero.
    pub fn coupon_discount(&self, total: Money) -> Money {
        match self.discount {
            CouponDiscount::Amount(amount) => amount.min(total),
            CouponDiscount::Percent(percent) => total.percent(percent),
        }
    }

    /// Invoice description, e.g. `Coupon TEATIME - 20% off`.
    pub fn description(&self) -> String {
        match self.discount {
            CouponDiscount::Amount(amount) => format!("Coupon {} - {amount} off", self.name),
            CouponDiscount::Percent(percent) => {
                format!("Coupon {} - {}% off", self.name, percent_points(percent))
            }
        }
    }

    /// Invoice line for this coupon applied to `total`.
    pub fn invoice_info(&self, total: Money) -> InvoiceLine<'static> {
        InvoiceLine::Coupon {
            description: self.description(),
            discount: self.coupon_discount(total),
        }
    }
}
