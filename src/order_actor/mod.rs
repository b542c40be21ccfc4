//! Order storage. Orders are created once by the workflow and never changed.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Order, OrderId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(capacity, OrderId::new)
}
