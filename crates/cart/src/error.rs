//! Cart error taxonomy.
//!
//! Every variant is locally recoverable and suitable for direct display
//! next to the offending control; a rejected operation never leaves the
//! cart partially updated.

use thiserror::Error;

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;

/// Rejection reasons for cart mutations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CartError {
    /// Quantity was zero (sub-1 quantities are rejected, prior state kept).
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// Unit price violated the cart's minimum-price rule.
    #[error("unit price must be greater than zero")]
    InvalidPrice,

    /// The cart prices lines from the catalog; lines cannot be re-priced.
    #[error("unit price is fixed by the catalog")]
    PriceFixedByCatalog,

    /// The requested quantity exceeds the stock ceiling captured when the
    /// cart was opened. Carries the ceiling for display.
    #[error("insufficient stock, available: {available}")]
    StockExceeded { available: u32 },

    /// No cart line exists for the given product variant.
    #[error("no cart line for that product variant")]
    NotFound,
}
