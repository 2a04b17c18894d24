//! Checkout
//!
//! Point-of-sale pricing: an inventory of products and coupons, carts built against it,
//! quantity-based product promotions, a single cart-level coupon and a fixed-width invoice.
//! All amounts are exact decimals.

pub mod cart;
pub mod coupons;
pub mod discounts;
pub mod errors;
pub mod fixtures;
pub mod inventory;
pub mod invoice;
pub mod money;
pub mod prelude;
pub mod products;
pub mod promotions;
pub mod utils;
