// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup for processes that host a worker

use crate::config::WorkerConfig;
use crate::error::WorkerError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a global subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `config.log_filter`. Stdout is left
/// untouched so it can carry the framed message stream.
pub fn init(config: &WorkerConfig) -> Result<(), WorkerError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .map_err(|e| WorkerError::Logging(e.to_string()))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| WorkerError::Logging(e.to_string()))
}
