use std::fmt;

/// Errors raised by this crate's public entry points.
///
/// Grounded on `geo-types`' `geometry::error::Error`: a small enum with a
/// hand-written `Display` and a blanket `std::error::Error` impl, rather
/// than a `thiserror`/`anyhow` dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    /// Raised by the generic [`crate::boolean_op`] entry point for an
    /// operation code outside the four supported variants (§7). The four
    /// convenience functions (`intersection`, `union`, `difference`, `xor`)
    /// never hit this path since they hard-code a valid [`crate::Operation`].
    InvalidOperation,
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::InvalidOperation => write!(f, "unsupported Boolean operation code"),
        }
    }
}

impl std::error::Error for OpError {}
