//! Fixtures
//!
//! YAML fixture sets describing an inventory and a cart built against it. Everything loaded
//! here goes through the same validating calls as programmatic use, so a bad fixture fails
//! with the same [`InventoryError`] or [`CartError`] a caller would see.
//!
//! ```yaml
//! # fixtures/inventories/<set>.yml
//! products:
//!   - name: Earl Grey
//!     price: "0.99"
//!     promotion:
//!       type: get_one_free
//!       every: 3
//! coupons:
//!   - name: TEATIME
//!     type: percent
//!     percent: 20
//!
//! # fixtures/carts/<set>.yml
//! items:
//!   - product: Earl Grey
//!     quantity: 3
//! coupon: TEATIME
//! ```

use std::{fs, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    fixtures::{carts::CartFixture, coupons::CouponFixture, products::ProductFixture},
    inventory::{Inventory, InventoryError},
};

pub mod carts;
pub mod coupons;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A product or coupon was rejected by the inventory
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// A cart item or coupon was rejected by the cart
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Wrapper for an inventory in YAML
#[derive(Debug, Deserialize)]
pub struct InventoryFixture {
    /// Products in registration order
    #[serde(default)]
    pub products: Vec<ProductFixture>,

    /// Coupons in registration order
    #[serde(default)]
    pub coupons: Vec<CouponFixture>,
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Inventory populated from loaded fixture files
    inventory: Inventory,

    /// Cart contents, replayed onto a fresh cart by [`Fixture::cart`]
    cart: CartFixture,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            inventory: Inventory::new(),
            cart: CartFixture::default(),
        }
    }

    /// Register the products and coupons from `inventories/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the inventory rejects a
    /// product or coupon.
    pub fn load_inventory(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("inventories")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        let fixture: InventoryFixture = serde_norway::from_str(&contents)?;

        for product in fixture.products {
            self.inventory.register(
                &product.name,
                &product.price,
                product.promotion.map(Into::into),
            )?;
        }

        for coupon in fixture.coupons {
            self.inventory
                .register_coupon(&coupon.name, coupon.discount.into())?;
        }

        debug!(path = %file_path.display(), "loaded inventory fixture");

        Ok(self)
    }

    /// Load cart contents from `carts/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;
        self.cart = serde_norway::from_str(&contents)?;

        debug!(path = %file_path.display(), "loaded cart fixture");

        Ok(self)
    }

    /// Load a complete fixture set (inventory and cart with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_inventory(name)?.load_cart(name)?;

        Ok(fixture)
    }

    /// Get the loaded inventory
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Build a cart from the loaded cart contents
    ///
    /// # Errors
    ///
    /// Returns an error if the cart rejects an item or the coupon.
    pub fn cart(&self) -> Result<Cart<'_>, FixtureError> {
        let mut cart = self.inventory.new_cart();

        for item in &self.cart.items {
            cart.add(&item.product, item.quantity)?;
        }

        if let Some(coupon) = &self.cart.coupon {
            cart.use_coupon(coupon)?;
        }

        Ok(cart)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
