//! Error kinds

use std::fmt;

/// Broad category of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad name, price, quantity, promotion or duplicate registration.
    Validation,

    /// Unknown product or coupon name.
    NotFound,

    /// Operation not allowed in the current cart state.
    State,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::Validation => "validation error",
            ErrorKind::NotFound => "not found",
            ErrorKind::State => "state error",
        })
    }
}
