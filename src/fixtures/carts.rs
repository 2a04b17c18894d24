//! Cart Fixtures

use serde::Deserialize;

/// Wrapper for a cart in YAML
#[derive(Debug, Default, Deserialize)]
pub struct CartFixture {
    /// Items in the order they are added
    #[serde(default)]
    pub items: Vec<CartItemFixture>,

    /// Coupon to apply after the items are added
    #[serde(default)]
    pub coupon: Option<String>,
}

/// Cart item from YAML
#[derive(Debug, Deserialize)]
pub struct CartItemFixture {
    /// Product name, as registered in the inventory
    pub product: String,

    /// Quantity to add; may be negative to take units back out
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}
