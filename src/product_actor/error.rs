//! Error types for the Product actor.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Prices cannot be negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(Decimal),
}
