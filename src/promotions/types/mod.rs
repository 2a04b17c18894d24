//! Promotion Types

mod get_one_free;
mod package;
mod threshold;

pub use get_one_free::*;
pub use package::*;
pub use threshold::*;
