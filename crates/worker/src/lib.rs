// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Beacon worker: runs a tag-detection engine behind an async message boundary
//!
//! A host posts `init` once and then `process` for every frame; the worker
//! answers with `loaded` and one `result` per frame, in order.

pub mod config;
mod context;
mod dispatcher;
mod error;
pub mod logging;
mod transport;

pub use config::WorkerConfig;
pub use context::{run, spawn, WorkerHandle};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DispatchError, WorkerError};
pub use transport::serve;
