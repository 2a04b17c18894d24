//! Inventory
//!
//! Registry of the products and coupons a cart can be built from. An inventory is populated
//! once, then handed out read-only to any number of carts.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::Cart,
    coupons::{Coupon, CouponDiscount, CouponKey, CouponSpec},
    discounts::percent_from_points,
    errors::ErrorKind,
    money::Money,
    products::{Product, ProductKey},
    promotions::{Promotion, PromotionError, PromotionSpec},
};

/// Longest product name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 40;

/// Cheapest unit price accepted.
pub const MIN_PRICE: Money = Money::new(Decimal::from_parts(1, 0, 0, false, 2));

/// Most expensive unit price accepted.
pub const MAX_PRICE: Money = Money::new(Decimal::from_parts(99_999, 0, 0, false, 2));

/// Errors related to inventory registration and lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product with this name is already registered.
    #[error("product {0:?} is already registered")]
    DuplicateProduct(String),

    /// Product name is longer than [`MAX_NAME_LENGTH`] characters.
    #[error("product name {0:?} is longer than {max} characters", max = MAX_NAME_LENGTH)]
    NameTooLong(String),

    /// Product price is not a decimal literal.
    #[error("invalid price {price:?} for product {name:?}")]
    InvalidPrice {
        /// Product name
        name: String,
        /// Price as given
        price: String,
    },

    /// Product price is outside [`MIN_PRICE`]..=[`MAX_PRICE`].
    #[error(
        "price {price} for product {name:?} is outside {min}..={max}",
        min = MIN_PRICE,
        max = MAX_PRICE
    )]
    PriceOutOfRange {
        /// Product name
        name: String,
        /// Parsed price
        price: Money,
    },

    /// Promotion descriptor could not be built.
    #[error("invalid promotion for product {name:?}: {source}")]
    InvalidPromotion {
        /// Product name
        name: String,
        /// Underlying promotion error
        source: PromotionError,
    },

    /// A coupon with this name is already registered.
    #[error("coupon {0:?} is already registered")]
    DuplicateCoupon(String),

    /// Flat coupon amount is not a non-negative decimal literal.
    #[error("invalid amount {amount:?} for coupon {name:?}")]
    InvalidCouponAmount {
        /// Coupon name
        name: String,
        /// Amount as given
        amount: String,
    },

    /// No product with this name is registered.
    #[error("product {0:?} not found")]
    ProductNotFound(String),

    /// No coupon with this name is registered.
    #[error("coupon {0:?} not found")]
    CouponNotFound(String),
}

impl InventoryError {
    /// Category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InventoryError::ProductNotFound(_) | InventoryError::CouponNotFound(_) => {
                ErrorKind::NotFound
            }
            InventoryError::DuplicateProduct(_)
            | InventoryError::NameTooLong(_)
            | InventoryError::InvalidPrice { .. }
            | InventoryError::PriceOutOfRange { .. }
            | InventoryError::InvalidPromotion { .. }
            | InventoryError::DuplicateCoupon(_)
            | InventoryError::InvalidCouponAmount { .. } => ErrorKind::Validation,
        }
    }
}

/// Inventory
#[derive(Debug, Default)]
pub struct Inventory {
    products: SlotMap<ProductKey, Product>,
    product_keys: FxHashMap<String, ProductKey>,
    coupons: SlotMap<CouponKey, Coupon>,
    coupon_keys: FxHashMap<String, CouponKey>,
}

impl Inventory {
    /// Create a new, empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product. The price is parsed from its decimal text, never through a float.
    ///
    /// # Errors
    ///
    /// Returns an [`InventoryError`] if the name is taken or longer than [`MAX_NAME_LENGTH`],
    /// if the price is not a decimal literal within [`MIN_PRICE`]..=[`MAX_PRICE`], or if the
    /// promotion is invalid. The inventory is left unchanged on error.
    pub fn register(
        &mut self,
        name: &str,
        price: &str,
        promotion: Option<PromotionSpec>,
    ) -> Result<ProductKey, InventoryError> {
        let product = self
            .validate_product(name, price, promotion)
            .inspect_err(|err| warn!(product = name, error = %err, "rejected product"))?;

        let key = self.products.insert(product);
        self.product_keys.insert(name.to_string(), key);

        debug!(product = name, price, ?promotion, "registered product");

        Ok(key)
    }

    fn validate_product(
        &self,
        name: &str,
        price: &str,
        promotion: Option<PromotionSpec>,
    ) -> Result<Product, InventoryError> {
        if self.product_keys.contains_key(name) {
            return Err(InventoryError::DuplicateProduct(name.to_string()));
        }

        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(InventoryError::NameTooLong(name.to_string()));
        }

        let unit_price = Money::parse(price).map_err(|_err| InventoryError::InvalidPrice {
            name: name.to_string(),
            price: price.to_string(),
        })?;

        if !(MIN_PRICE..=MAX_PRICE).contains(&unit_price) {
            return Err(InventoryError::PriceOutOfRange {
                name: name.to_string(),
                price: unit_price,
            });
        }

        let promotion = promotion
            .map(Promotion::try_from)
            .transpose()
            .map_err(|source| InventoryError::InvalidPromotion {
                name: name.to_string(),
                source,
            })?;

        Ok(Product::new(name, unit_price, promotion))
    }

    /// Register a coupon.
    ///
    /// # Errors
    ///
    /// Returns an [`InventoryError`] if a coupon with this name already exists, or if a flat
    /// amount is not a non-negative decimal literal. The inventory is left unchanged on error.
    pub fn register_coupon(
        &mut self,
        name: &str,
        kind: CouponSpec,
    ) -> Result<CouponKey, InventoryError> {
        let coupon = self
            .validate_coupon(name, kind)
            .inspect_err(|err| warn!(coupon = name, error = %err, "rejected coupon"))?;

        debug!(coupon = name, discount = ?coupon.discount(), "registered coupon");

        let key = self.coupons.insert(coupon);
        self.coupon_keys.insert(name.to_string(), key);

        Ok(key)
    }

    fn validate_coupon(&self, name: &str, kind: CouponSpec) -> Result<Coupon, InventoryError> {
        if self.coupon_keys.contains_key(name) {
            return Err(InventoryError::DuplicateCoupon(name.to_string()));
        }

        let discount = match kind {
            CouponSpec::Amount(amount) => match Money::parse(&amount) {
                Ok(parsed) if parsed >= Money::ZERO => CouponDiscount::Amount(parsed),
                _ => {
                    return Err(InventoryError::InvalidCouponAmount {
                        name: name.to_string(),
                        amount,
                    });
                }
            },
            CouponSpec::Percent(points) => CouponDiscount::Percent(percent_from_points(points)),
        };

        Ok(Coupon::new(name, discount))
    }

    /// Look up a product by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::ProductNotFound`] if no product has this name.
    pub fn find_product(&self, name: &str) -> Result<&Product, InventoryError> {
        self.product_keys
            .get(name)
            .and_then(|key| self.products.get(*key))
            .ok_or_else(|| InventoryError::ProductNotFound(name.to_string()))
    }

    /// Look up a coupon by name.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::CouponNotFound`] if no coupon has this name.
    pub fn find_coupon(&self, name: &str) -> Result<&Coupon, InventoryError> {
        self.coupon_keys
            .get(name)
            .and_then(|key| self.coupons.get(*key))
            .ok_or_else(|| InventoryError::CouponNotFound(name.to_string()))
    }

    /// Get a product by key.
    pub fn product(&self, key: ProductKey) -> Option<&Product> {
        self.products.get(key)
    }

    /// Get a coupon by key.
    pub fn coupon(&self, key: CouponKey) -> Option<&Coupon> {
        self.coupons.get(key)
    }

    /// Iterate over products in registration order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Iterate over coupons in registration order.
    pub fn coupons(&self) -> impl Iterator<Item = &Coupon> {
        self.coupons.values()
    }

    /// Create a new, empty cart bound to this inventory.
    pub fn new_cart(&self) -> Cart<'_> {
        Cart::new(self)
    }
}
