//! Error type shared by every collaborator port.

use thiserror::Error;

/// Failure reported by a data-access collaborator.
///
/// These are infrastructure faults. The order workflow never reinterprets
/// them; they reach its caller inside
/// [`CreateOrderError::Store`](crate::workflow::CreateOrderError::Store).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backing store refused the write.
    #[error("Store rejected the request: {0}")]
    Rejected(String),

    /// A write targeted a record that does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),
}
