//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, independent of any entity type.
//! Entity-level failures are boxed into [`FrameworkError::EntityError`] so the
//! caller can downcast them back to the entity's own error enum.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
