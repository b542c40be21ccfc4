//! Error types for the Order actor.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Orders are fixed once stored; there is no mutation path.
    #[error("Order {0} is immutable")]
    Immutable(OrderId),
}
