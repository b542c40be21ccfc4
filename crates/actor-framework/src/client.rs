//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// The client forwards each request over a Tokio mpsc channel and awaits the
/// answer on a oneshot channel. It only holds a sender, so cloning is cheap and
/// clones can be shared across tasks. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> std::fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClient")
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Creates an entity and returns it as stored, including its generated id.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    /// Fetches every entity that exists among `ids`, in the order requested.
    /// Unknown ids are skipped rather than reported.
    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    /// Applies a batch of updates in one actor turn. Either every update is
    /// committed or none is.
    pub async fn update_many(
        &self,
        updates: Vec<(T::Id, T::Update)>,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateMany {
            updates,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
