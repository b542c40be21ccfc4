//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the request shapes the order workflow consumes.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::*;
pub use order::*;
pub use product::*;
