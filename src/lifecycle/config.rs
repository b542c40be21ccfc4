//! Runtime settings for [`OrderSystem`](super::OrderSystem).

use super::ConfigError;
use serde::Deserialize;

/// Environment variable overriding [`SystemConfig::channel_capacity`].
pub const CHANNEL_CAPACITY_VAR: &str = "ORDER_SYSTEM_CHANNEL_CAPACITY";

const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Request buffer of each actor's mailbox.
    pub channel_capacity: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl SystemConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each known key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = parse_capacity(&raw)?;
        }

        Ok(config)
    }
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: CHANNEL_CAPACITY_VAR,
        value: raw.to_string(),
        reason,
    };

    // tokio::sync::mpsc::channel panics on a zero buffer
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(capacity) => Ok(capacity),
        Err(e) => Err(invalid(e.to_string())),
    }
}
