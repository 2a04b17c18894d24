//! Promotions
//!
//! Product-level discounts driven by the purchased quantity of a single product.

use std::num::NonZeroU32;

use thiserror::Error;

use crate::{
    discounts::percent_from_points,
    invoice::InvoiceLine,
    money::Money,
    promotions::types::{GetOneFreePromotion, PackagePromotion, ThresholdPromotion},
};

pub mod types;

/// Errors raised while turning a [`PromotionSpec`] into a [`Promotion`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromotionError {
    /// The quantity a promotion is built around must be at least one.
    #[error("promotion quantity must be at least 1, got {0}")]
    ZeroQuantity(u32),
}

/// Promotion descriptor, as supplied when registering a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionSpec {
    /// Every `n`th unit is free.
    GetOneFree(u32),

    /// `percent` off every unit in a complete package of `size`.
    Package {
        /// Package size
        size: u32,

        /// Percent points off
        percent: u32,
    },

    /// `percent` off every unit after the first `after`.
    Threshold {
        /// Threshold quantity
        after: u32,

        /// Percent points off
        percent: u32,
    },
}

/// Promotion attached to a product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promotion {
    /// Buy `n - 1`, get one free
    GetOneFree(GetOneFreePromotion),

    /// Package discount
    Package(PackagePromotion),

    /// Threshold discount
    Threshold(ThresholdPromotion),
}

impl Promotion {
    /// Discount for `quantity` units at `unit_price`; never negative.
    pub fn discount(&self, unit_price: Money, quantity: u32) -> Money {
        match self {
            Promotion::GetOneFree(promo) => promo.discount(unit_price, quantity),
            Promotion::Package(promo) => promo.discount(unit_price, quantity),
            Promotion::Threshold(promo) => promo.discount(unit_price, quantity),
        }
    }

    /// Human readable description shown on the invoice.
    pub fn description(&self) -> String {
        match self {
            Promotion::GetOneFree(promo) => promo.description(),
            Promotion::Package(promo) => promo.description(),
            Promotion::Threshold(promo) => promo.description(),
        }
    }

    /// Invoice line for this promotion, or `None` when it takes nothing off.
    pub fn invoice_info(&self, unit_price: Money, quantity: u32) -> Option<InvoiceLine<'static>> {
        let discount = self.discount(unit_price, quantity);

        discount.is_positive().then(|| InvoiceLine::Promotion {
            description: self.description(),
            discount,
        })
    }
}

impl TryFrom<PromotionSpec> for Promotion {
    type Error = PromotionError;

    fn try_from(spec: PromotionSpec) -> Result<Self, Self::Error> {
        let promotion = match spec {
            PromotionSpec::GetOneFree(every) => {
                Promotion::GetOneFree(GetOneFreePromotion::new(non_zero(every)?))
            }
            PromotionSpec::Package { size, percent } => Promotion::Package(PackagePromotion::new(
                non_zero(size)?,
                percent_from_points(percent),
            )),
            PromotionSpec::Threshold { after, percent } => Promotion::Threshold(
                ThresholdPromotion::new(non_zero(after)?, percent_from_points(percent)),
            ),
        };

        Ok(promotion)
    }
}

fn non_zero(n: u32) -> Result<NonZeroU32, PromotionError> {
    NonZeroU32::new(n).ok_or(PromotionError::ZeroQuantity(n))
}
