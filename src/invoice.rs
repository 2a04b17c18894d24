//! Invoice
//!
//! Fixed-width text rendering of a cart:
//!
//! ```text
//! +------------------------------------------------+----------+
//! | Name                                       qty |    price |
//! +------------------------------------------------+----------+
//! | Earl Grey                                    3 |     2.97 |
//! |   (buy 2, get 1 free)                          |    -0.99 |
//! | Coupon TEATIME - 20% off                       |    -0.40 |
//! +------------------------------------------------+----------+
//! | TOTAL                                          |     1.58 |
//! +------------------------------------------------+----------+
//! ```

use std::{fmt, io};

use smallvec::SmallVec;

use crate::{cart::Cart, money::Money};

const BORDER: &str = "+------------------------------------------------+----------+";
const COLUMN_HEADER: &str = "| Name                                       qty |    price |";

/// A single row between the invoice header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceLine<'a> {
    /// Purchased product, quantity and full line price.
    Product {
        /// Product name
        name: &'a str,
        /// Purchased quantity
        quantity: u32,
        /// Full price of all units
        price: Money,
    },

    /// Promotion discount for the product line above it. Shown with a leading minus, even
    /// when it rounds to zero.
    Promotion {
        /// Promotion description
        description: String,
        /// Amount taken off
        discount: Money,
    },

    /// Coupon discount on the cart total.
    Coupon {
        /// Coupon description
        description: String,
        /// Amount taken off
        discount: Money,
    },
}

impl fmt::Display for InvoiceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceLine::Product {
                name,
                quantity,
                price,
            } => write!(f, "| {name:<43}{quantity:>3} | {price:>8} |"),
            InvoiceLine::Promotion {
                description,
                discount,
            } => {
                let amount = format!("-{discount}");
                write!(f, "|   {description:<45}| {amount:>8} |")
            }
            InvoiceLine::Coupon {
                description,
                discount,
            } => {
                let amount = format!("-{discount}");
                write!(f, "| {description:<47}| {amount:>8} |")
            }
        }
    }
}

/// Invoice for a cart, as of the moment it was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice<'a> {
    lines: SmallVec<[InvoiceLine<'a>; 16]>,

    /// Full price of everything, before promotions and coupon
    gross_total: Money,

    /// Total after promotions, before the coupon
    subtotal: Money,

    /// Amount paid
    total: Money,
}

impl<'a> Invoice<'a> {
    /// Build the invoice for the current state of `cart`.
    pub fn from_cart(cart: &Cart<'a>) -> Self {
        let mut lines: SmallVec<[InvoiceLine<'a>; 16]> = SmallVec::new();

        for line in cart.iter() {
            lines.extend(line.product().invoice_info(line.quantity()));
        }

        let subtotal = cart.total_no_coupon();
        let mut total = subtotal;

        if let Some(coupon) = cart.coupon() {
            lines.push(coupon.invoice_info(subtotal));
            total = total - coupon.coupon_discount(subtotal);
        }

        let gross_total = cart
            .iter()
            .map(|line| line.product().multi_price(line.quantity()))
            .sum();

        Invoice {
            lines,
            gross_total,
            subtotal,
            total,
        }
    }

    /// Rows between the header and footer, in display order.
    pub fn lines(&self) -> &[InvoiceLine<'a>] {
        &self.lines
    }

    /// Full price of everything, before promotions and coupon.
    pub fn gross_total(&self) -> Money {
        self.gross_total
    }

    /// Total after promotions, before the coupon.
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Amount paid.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Everything promotions and the coupon took off.
    pub fn savings(&self) -> Money {
        self.gross_total - self.total
    }

    /// Writes the rendered invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for Invoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BORDER}")?;
        writeln!(f, "{COLUMN_HEADER}")?;
        writeln!(f, "{BORDER}")?;

        for line in &self.lines {
            writeln!(f, "{line}")?;
        }

        writeln!(f, "{BORDER}")?;
        writeln!(f, "| {:<47}| {:>8} |", "TOTAL", self.total)?;
        writeln!(f, "{BORDER}")
    }
}
