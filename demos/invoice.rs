//! Invoice Example
//!
//! This example loads an inventory and cart fixture set and prints the cart's invoice.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to read fixture sets from a different directory
//! Set `RUST_LOG=checkout=debug` to trace registration and cart updates

use std::io;

use anyhow::Result;

use checkout::{fixtures::Fixture, invoice::Invoice, utils::ExampleInvoiceArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Invoice Example
pub fn main() -> Result<()> {
    let args = ExampleInvoiceArgs::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new("warn")),
        )
        .init();

    let mut fixture = Fixture::with_base_path(&args.base_path);

    fixture
        .load_inventory(&args.fixture)?
        .load_cart(&args.fixture)?;

    let cart = fixture.cart()?;

    let stdout = io::stdout();
    let handle = stdout.lock();

    Invoice::from_cart(&cart).write_to(handle)?;

    Ok(())
}
