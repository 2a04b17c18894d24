//! Cart
//!
//! A cart is bound to one [`Inventory`] for its whole life. It records purchased quantities in
//! the order products were first added and holds at most one coupon, which can't be replaced
//! or removed once applied. Totals and the invoice are derived on demand from that state.

use std::{ops::RangeInclusive, slice};

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    coupons::Coupon,
    errors::ErrorKind,
    inventory::{Inventory, InventoryError},
    invoice::Invoice,
    money::Money,
    products::Product,
};

/// Quantity of a single product a cart may hold.
pub const QUANTITY_RANGE: RangeInclusive<u32> = 1..=99;

/// Errors related to cart updates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Product or coupon lookup failed.
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// The resulting quantity would fall outside [`QUANTITY_RANGE`].
    #[error("invalid quantity {quantity} for product {name:?}; must be between 1 and 99")]
    InvalidQuantity {
        /// Product name
        name: String,
        /// Quantity the cart would have ended up with
        quantity: i64,
    },

    /// The cart already has a coupon applied.
    #[error("coupon {applied:?} is already applied; cannot use {requested:?}")]
    CouponAlreadyApplied {
        /// Coupon already on the cart
        applied: String,
        /// Coupon that was refused
        requested: String,
    },
}

impl CartError {
    /// Category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CartError::Inventory(err) => err.kind(),
            CartError::InvalidQuantity { .. } => ErrorKind::Validation,
            CartError::CouponAlreadyApplied { .. } => ErrorKind::State,
        }
    }
}

/// A product and how many units of it are in the cart.
#[derive(Debug, Clone, Copy)]
pub struct CartLine<'a> {
    product: &'a Product,
    quantity: u32,
}

impl<'a> CartLine<'a> {
    /// Purchased product
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Purchased quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Line total after the product's promotion.
    pub fn total(&self) -> Money {
        self.product.multi_price(self.quantity) - self.product.discount(self.quantity)
    }
}

/// Cart
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    inventory: &'a Inventory,
    lines: SmallVec<[CartLine<'a>; 8]>,
    coupon: Option<&'a Coupon>,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart bound to `inventory`.
    pub fn new(inventory: &'a Inventory) -> Self {
        Cart {
            inventory,
            lines: SmallVec::new(),
            coupon: None,
        }
    }

    /// Add a single unit of a product.
    ///
    /// # Errors
    ///
    /// See [`Cart::add`].
    pub fn add_one(&mut self, product_name: &str) -> Result<u32, CartError> {
        self.add(product_name, 1)
    }

    /// Add `quantity` units of a product, accumulating with earlier additions. A negative
    /// quantity takes units back out. Returns the product's new quantity.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the product isn't in the inventory, or if the resulting
    /// quantity would fall outside [`QUANTITY_RANGE`]. The cart is unchanged on error.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add(&mut self, product_name: &str, quantity: i32) -> Result<u32, CartError> {
        let product = self.inventory.find_product(product_name)?;

        let requested = i64::from(self.quantity_of(product_name)) + i64::from(quantity);

        let Some(updated) = u32::try_from(requested)
            .ok()
            .filter(|updated| QUANTITY_RANGE.contains(updated))
        else {
            warn!(quantity = requested, "rejected cart quantity");

            return Err(CartError::InvalidQuantity {
                name: product_name.to_string(),
                quantity: requested,
            });
        };

        match self
            .lines
            .iter_mut()
            .find(|line| line.product.name() == product_name)
        {
            Some(line) => line.quantity = updated,
            None => self.lines.push(CartLine {
                product,
                quantity: updated,
            }),
        }

        debug!(quantity = updated, "updated cart line");

        Ok(updated)
    }

    /// Apply a coupon to the cart. Only one coupon can ever be applied.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::CouponAlreadyApplied`] if the cart already has a coupon, otherwise
    /// a [`CartError::Inventory`] if no coupon has this name.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn use_coupon(&mut self, coupon_name: &str) -> Result<&'a Coupon, CartError> {
        if let Some(applied) = self.coupon {
            warn!(applied = applied.name(), "coupon already applied");

            return Err(CartError::CouponAlreadyApplied {
                applied: applied.name().to_string(),
                requested: coupon_name.to_string(),
            });
        }

        let coupon = self.inventory.find_coupon(coupon_name)?;
        self.coupon = Some(coupon);

        debug!("applied coupon");

        Ok(coupon)
    }

    /// Quantity of a product in the cart, zero if it hasn't been added.
    pub fn quantity_of(&self, product_name: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product.name() == product_name)
            .map_or(0, |line| line.quantity)
    }

    /// Iterate over cart lines in the order products were first added.
    pub fn iter(&self) -> slice::Iter<'_, CartLine<'a>> {
        self.lines.iter()
    }

    /// Coupon applied to the cart, if any.
    pub fn coupon(&self) -> Option<&'a Coupon> {
        self.coupon
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of every line's full price less its promotion discount.
    pub fn total_no_coupon(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Amount the coupon takes off [`Cart::total_no_coupon`], zero without a coupon.
    pub fn coupon_discount(&self) -> Money {
        self.coupon
            .map_or(Money::ZERO, |coupon| coupon.coupon_discount(self.total_no_coupon()))
    }

    /// Final price: promotions first, then the coupon on what's left.
    pub fn total(&self) -> Money {
        self.total_no_coupon() - self.coupon_discount()
    }

    /// Render the fixed-width invoice text.
    pub fn invoice(&self) -> String {
        Invoice::from_cart(self).to_string()
    }
}

impl<'c, 'a> IntoIterator for &'c Cart<'a> {
    type Item = &'c CartLine<'a>;
    type IntoIter = slice::Iter<'c, CartLine<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
