// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker lifecycle state machine
//!
//! The state machine is pure: it decides whether a request may act in the
//! current state, while the dispatcher owns the engine and carries out the
//! work.

use crate::message::Request;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a worker context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkerState {
    /// No `init` received yet
    #[default]
    Uninitialized,
    /// Engine construction is in flight
    Initializing,
    /// Engine reported readiness and accepts frames
    Ready,
}

/// Why a request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NotInitialized,
    StillInitializing,
    AlreadyInitialized,
    UnknownMessage,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IgnoreReason::NotInitialized => "engine not initialized",
            IgnoreReason::StillInitializing => "engine still initializing",
            IgnoreReason::AlreadyInitialized => "engine already initialized",
            IgnoreReason::UnknownMessage => "unknown message type",
        };
        f.write_str(reason)
    }
}

impl WorkerState {
    /// Check whether `request` may act in this state
    pub fn admit(&self, request: &Request) -> Result<(), IgnoreReason> {
        match request {
            Request::Init(_) => self.check_init(),
            Request::Process(_) => self.check_process(),
            Request::Unknown => Err(IgnoreReason::UnknownMessage),
        }
    }

    /// `init` is accepted exactly once, before any engine exists
    pub fn check_init(&self) -> Result<(), IgnoreReason> {
        match self {
            WorkerState::Uninitialized => Ok(()),
            WorkerState::Initializing | WorkerState::Ready => {
                Err(IgnoreReason::AlreadyInitialized)
            }
        }
    }

    /// `process` needs an engine that has reported readiness
    pub fn check_process(&self) -> Result<(), IgnoreReason> {
        match self {
            WorkerState::Ready => Ok(()),
            WorkerState::Initializing => Err(IgnoreReason::StillInitializing),
            WorkerState::Uninitialized => Err(IgnoreReason::NotInitialized),
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WorkerState::Uninitialized => "uninitialized",
            WorkerState::Initializing => "initializing",
            WorkerState::Ready => "ready",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
