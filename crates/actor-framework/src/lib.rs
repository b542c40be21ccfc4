//! # Actor Framework
//!
//! Building blocks for type-safe actor systems in Rust. Each resource type gets
//! its own actor that owns its state and serves a uniform CRUD + Action API,
//! following a **Resource-Oriented Architecture** on top of the **Actor Model**.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - business rules of one resource type
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and state ownership
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! Business logic is written once in the entity trait; the framework handles
//! message passing, id generation and error plumbing.
//!
//! ## Batch Operations
//!
//! Besides single-entity CRUD, the client offers [`ResourceClient::get_many`] and
//! [`ResourceClient::update_many`]. Both are served in a single actor turn, so a
//! batch read costs one round trip and a batch update is all-or-nothing.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via [`ResourceActor::run`], not at
//! construction time. Actors are created first, then started with the clients
//! they depend on, which avoids circular wiring problems.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks)
//! - Multiple actors run in **parallel**
//! - An actor shuts down when the last clone of its client is dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides [`mock::MockClient`], which answers requests from
//! scripted expectations so client logic can be tested without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
