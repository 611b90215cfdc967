// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the worker

use beacon_adapters::EngineError;
use beacon_core::ProtocolError;
use std::path::PathBuf;
use thiserror::Error;

/// Faults raised while handling a request. All of them end the worker.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("no engine to process frames")]
    NotReady,
}

/// Errors observed by the host side of a worker
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("worker terminated")]
    Terminated,
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Errors loading worker configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
