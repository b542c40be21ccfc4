//! # Product Actor
//!
//! Owns the stock records ([`StockProduct`]) that orders are priced from and
//! decremented against.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`StockProduct`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Batch access
//!
//! The order workflow reads every product of an order with one `get_many`
//! request and writes the new quantities back with one `update_many` request.
//! Both are served in a single actor turn; the write-back is all-or-nothing.
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::clients::ProductClient;
//! use order_placement::model::ProductCreate;
//! use order_placement::product_actor;
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let product = client
//!         .create_product(ProductCreate {
//!             name: "Widget".to_string(),
//!             price: Decimal::new(2999, 2),
//!             quantity: 100,
//!         })
//!         .await?;
//!
//!     assert_eq!(client.check_stock(product.id).await?, 100);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{ProductId, StockProduct};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<StockProduct>, ResourceClient<StockProduct>) {
    ResourceActor::new(capacity, ProductId::new)
}
