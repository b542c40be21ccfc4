//! # Collaborator Ports
//!
//! The data-access capabilities the order workflow consumes. The workflow is
//! generic over these traits, so the actor-backed clients in
//! [`crate::clients`] can be swapped for in-memory fakes in tests.
//!
//! "Not found" on a read is not an error here: `find_by_id` answers `None`
//! and `find_all_by_id` leaves missing ids out of its result. Deciding what
//! absence means belongs to the caller.

pub mod error;

pub use error::*;

use crate::model::{
    Customer, CustomerId, Order, OrderId, OrderLineItem, ProductId, StockAdjustment, StockProduct,
};
use async_trait::async_trait;

/// Resolves customers by id.
#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;
}

/// Reads and writes back stock records.
#[async_trait]
pub trait ProductStockLookup: Send + Sync {
    /// Fetches the stock records that exist among `ids` in one round trip.
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<StockProduct>, StoreError>;

    /// Overwrites the quantity of every listed product with its new remaining
    /// quantity. Whether a partial write can happen is up to the implementation.
    async fn apply_deltas(&self, adjustments: &[StockAdjustment]) -> Result<(), StoreError>;
}

/// Persists orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Stores a new order, assigning its id and timestamp.
    async fn create(
        &self,
        customer: &Customer,
        items: Vec<OrderLineItem>,
    ) -> Result<Order, StoreError>;

    /// Removes an order that must not survive, e.g. after its stock write-back failed.
    async fn discard(&self, id: OrderId) -> Result<(), StoreError>;
}
