//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The customer data provided is invalid.
    #[error("Customer validation error: {0}")]
    ValidationError(String),
}
