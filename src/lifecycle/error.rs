use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
