//! # Customer Actor
//!
//! Manages customer entities with plain CRUD operations: no dependencies and
//! no custom actions. The order workflow reads from it through
//! [`CustomerClient`](crate::clients::CustomerClient) to check that the customer
//! placing an order exists.
//!
//! ## Usage
//!
//! ```rust
//! use order_placement::clients::CustomerClient;
//! use order_placement::customer_actor;
//! use order_placement::model::CustomerCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = customer_actor::new(32);
//!     let client = CustomerClient::new(generic_client);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let customer = client
//!         .create_customer(CustomerCreate {
//!             name: "Alice".to_string(),
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(customer.name, "Alice");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Customer, CustomerId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(capacity, CustomerId::new)
}
