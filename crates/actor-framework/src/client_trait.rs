//! # ActorClient Trait
//!
//! Common interface for resource-specific clients, adding default `get` and
//! `delete` methods on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard CRUD operations.
///
/// A domain client wraps a [`ResourceClient`] and only has to say how framework
/// errors map onto its own error type.
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32 }
/// #[derive(Debug)] struct NoteCreate;
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32; type Create = NoteCreate; type Update = NoteUpdate;
///     type Action = NoteAction; type ActionResult = (); type Context = (); type Error = NoteError;
///     fn from_create_params(id: u32, _: NoteCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct NoteClient { inner: ResourceClient<Note> }
///
/// #[async_trait]
/// impl ActorClient<Note> for NoteClient {
///     type Error = NoteError;
///     fn inner(&self) -> &ResourceClient<Note> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error { NoteError(e.to_string()) }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get() and delete() come for free
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
