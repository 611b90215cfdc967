// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker configuration
//!
//! Loaded from an optional TOML file; every field has a default.
//!
//! ```toml
//! channel_capacity = 64
//! max_message_bytes = 67108864
//! log_filter = "info,beacon::performance=info"
//! ```

use crate::error::ConfigError;
use beacon_core::DEFAULT_MAX_MESSAGE_BYTES;
use serde::Deserialize;
use std::path::Path;

/// Worker configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkerConfig {
    /// Requests that may be queued before `post` waits
    pub channel_capacity: usize,
    /// Largest framed message accepted by the stream transport
    pub max_message_bytes: usize,
    /// Default log filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
            log_filter: "info".to_string(),
        }
    }
}

impl WorkerConfig {
    /// Load configuration from `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        if self.max_message_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_message_bytes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
