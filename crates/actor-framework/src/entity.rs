//! # ActorEntity Trait
//!
//! The contract every resource (Customer, Product, Order, …) implements to be
//! managed by the generic [`ResourceActor`](crate::ResourceActor). Associated
//! types pin down the id, the create/update payloads, custom actions, the
//! injected context and the error type, so a `ProductUpdate` can never be sent
//! to the order actor.
//!
//! # Provided Methods (Hooks)
//! [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! Override them to validate or to reach other actors through the context.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are async so they may call other actors. The `Context` associated type
/// is injected into every hook by [`ResourceActor::run`](crate::ResourceActor::run),
/// which lets dependencies be bound after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Ids are produced by the id
    /// generator handed to [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the generated id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    ///
    /// The actor applies the update to a copy and only commits it on success,
    /// so a failing hook leaves the stored entity untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
