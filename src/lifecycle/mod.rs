//! Startup, wiring and shutdown of the actor system.

pub mod config;
pub mod error;
pub mod order_system;
pub mod tracing;

pub use config::SystemConfig;
pub use error::*;
pub use order_system::OrderSystem;
