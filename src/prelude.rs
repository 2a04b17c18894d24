//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    coupons::{Coupon, CouponDiscount, CouponKey, CouponSpec},
    errors::ErrorKind,
    fixtures::{Fixture, FixtureError},
    inventory::{Inventory, InventoryError},
    invoice::{Invoice, InvoiceLine},
    money::{Money, ParseMoneyError},
    products::{Product, ProductKey},
    promotions::{
        Promotion, PromotionError, PromotionSpec,
        types::{GetOneFreePromotion, PackagePromotion, ThresholdPromotion, ordinal_suffix},
    },
};
