//! # Generic Messages
//!
//! Request types exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the CRUD lifecycle of a resource, plus batch forms of
/// read and update that are processed inside a single message, and a custom
/// `Action` variant for resource-specific logic.
///
/// - **Create**: builds the entity from [`ActorEntity::Create`] and answers with the stored entity.
/// - **Get** / **GetMany**: read one entity, or every entity that exists among a set of ids.
/// - **Update** / **UpdateMany**: apply [`ActorEntity::Update`] payloads. A batch is all-or-nothing.
/// - **Delete**: removes the resource.
/// - **Action**: executes a custom [`ActorEntity::Action`].
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    UpdateMany {
        updates: Vec<(T::Id, T::Update)>,
        respond_to: Response<Vec<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// Short name of the operation, used in logs and mock diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::GetMany { .. } => "GetMany",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::UpdateMany { .. } => "UpdateMany",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Action { .. } => "Action",
        }
    }
}
