//! Products

use slotmap::new_key_type;
use smallvec::{SmallVec, smallvec};

use crate::{invoice::InvoiceLine, money::Money, promotions::Promotion};

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Money,
    promotion: Option<Promotion>,
}

impl Product {
    /// Create a new product. Name and price are validated by the inventory on registration.
    pub(crate) fn new(name: impl Into<String>, price: Money, promotion: Option<Promotion>) -> Self {
        Self {
            name: name.into(),
            price,
            promotion,
        }
    }

    /// Product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price
    pub fn price(&self) -> Money {
        self.price
    }

    /// Promotion attached to the product, if any
    pub fn promotion(&self) -> Option<&Promotion> {
        self.promotion.as_ref()
    }

    /// Full price of `quantity` units.
    pub fn multi_price(&self, quantity: u32) -> Money {
        self.price.times(quantity)
    }

    /// Promotion discount for `quantity` units, zero without a promotion.
    pub fn discount(&self, quantity: u32) -> Money {
        self.promotion
            .map_or(Money::ZERO, |promotion| promotion.discount(self.price, quantity))
    }

    /// Invoice lines for `quantity` units: the product line, then the promotion line if it
    /// takes anything off.
    pub fn invoice_info(&self, quantity: u32) -> SmallVec<[InvoiceLine<'_>; 2]> {
        let mut lines: SmallVec<[InvoiceLine<'_>; 2]> = smallvec![InvoiceLine::Product {
            name: &self.name,
            quantity,
            price: self.multi_price(quantity),
        }];

        if let Some(line) = self
            .promotion
            .and_then(|promotion| promotion.invoice_info(self.price, quantity))
        {
            lines.push(line);
        }

        lines
    }
}
