//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of
//! one resource type and processes requests for it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the in-memory store,
/// the receiving end of the channel and the id generator. Each actor runs in its
/// own Tokio task and handles one message at a time, so the store needs no lock:
/// a batch request such as [`ResourceRequest::UpdateMany`] is observed by other
/// callers either entirely or not at all.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the actor and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u32, value: u32 }
/// #[derive(Debug)] struct CounterCreate;
/// #[derive(Debug)] struct CounterUpdate(u32);
/// #[derive(Debug)] enum CounterAction {}
/// #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u32;
///     type Create = CounterCreate;
///     type Update = CounterUpdate;
///     type Action = CounterAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CounterError;
///
///     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, value: 0 })
///     }
///     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
///         self.value = update.0;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: CounterAction, _: &()) -> Result<(), Self::Error> {
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Counter>::new(10, move || {
///         next += 1;
///         next
///     });
///     tokio::spawn(actor.run(()));
///
///     let counter = client.create(CounterCreate).await.unwrap();
///     assert_eq!(counter.id, 1);
///     let updated = client.update(counter.id, CounterUpdate(7)).await.unwrap();
///     assert_eq!(updated.value, 7);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    /// * `next_id` - Produces the id of every entity created through this actor.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "order_placement::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    if let Err(e) = &result {
                        warn!(entity_type, error = %e, "Create failed");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items: Vec<T> = ids
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, requested = ids.len(), found = items.len(), "GetMany");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(id.clone(), update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::UpdateMany {
                    updates,
                    respond_to,
                } => {
                    let count = updates.len();
                    debug!(entity_type, count, ?updates, "UpdateMany");
                    let result = self.update_many(updates, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, count, "Updated batch"),
                        Err(e) => warn!(entity_type, count, error = %e, "Batch update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.action(&id, action, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let id = (self.next_id)();
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(context).await.map_err(entity_error)?;
        self.store.insert(id.clone(), item.clone());
        info!(%id, size = self.store.len(), "Created");
        Ok(item)
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut item = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(update, context).await.map_err(entity_error)?;
        self.store.insert(id, item.clone());
        Ok(item)
    }

    /// Applies every update to staged copies and commits only if all succeed.
    async fn update_many(
        &mut self,
        updates: Vec<(T::Id, T::Update)>,
        context: &T::Context,
    ) -> Result<Vec<T>, FrameworkError> {
        if let Some((missing, _)) = updates.iter().find(|(id, _)| !self.store.contains_key(id)) {
            return Err(FrameworkError::NotFound(missing.to_string()));
        }

        let mut staged: Vec<(T::Id, T)> = Vec::with_capacity(updates.len());
        for (id, update) in updates {
            // A repeated id builds on the copy staged earlier in this batch.
            let mut item = staged
                .iter()
                .rev()
                .find(|(staged_id, _)| *staged_id == id)
                .map(|(_, item)| item.clone())
                .or_else(|| self.store.get(&id).cloned())
                .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
            item.on_update(update, context).await.map_err(entity_error)?;
            staged.push((id, item));
        }

        let mut updated = Vec::with_capacity(staged.len());
        for (id, item) in staged {
            self.store.insert(id, item.clone());
            updated.push(item);
        }
        Ok(updated)
    }

    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<(), FrameworkError> {
        let item = self
            .store
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete(context).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn action(
        &mut self,
        id: &T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let item = self
            .store
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.handle_action(action, context).await.map_err(entity_error)
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}
