//! Error types for order placement.

use crate::model::{CustomerId, ProductId};
use crate::ports::StoreError;
use thiserror::Error;

/// Why an order could not be placed.
///
/// The first three variants are validation failures detected before anything
/// is written; retrying them without changing the request or the stock will
/// fail the same way. `Store` carries a collaborator fault unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateOrderError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CreateOrderError {
    /// `true` for failures caused by the request itself, as opposed to
    /// infrastructure faults. A transport layer maps these to client errors.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CreateOrderError::Store(_))
    }
}
