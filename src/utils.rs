//! Utils

use clap::Parser;

/// Arguments for the invoice example
#[derive(Debug, Parser)]
pub struct ExampleInvoiceArgs {
    /// Fixture set to build the inventory & cart from
    #[clap(short, long, default_value = "sample")]
    pub fixture: String,

    /// Directory holding the `inventories/` and `carts/` fixture files
    #[clap(short, long, default_value = "fixtures")]
    pub base_path: String,
}
