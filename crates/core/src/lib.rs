// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! beacon-core: shared types for the Beacon tag-detection worker
//!
//! This crate provides:
//! - Request/reply message types exchanged between a host and the worker
//! - The pure lifecycle state machine that decides how requests are routed
//! - A clock abstraction for testable timing
//! - The length-prefixed JSON wire codec

pub mod clock;
pub mod message;
pub mod protocol;
pub mod state;

pub use clock::{Clock, FakeClock, SystemClock};
pub use message::{
    Code, DetectorTuning, Frame, InitRequest, Options, ProcessRequest, Reply, Request,
    TagDescriptor,
};
pub use protocol::{ProtocolError, DEFAULT_MAX_MESSAGE_BYTES};
pub use state::{IgnoreReason, WorkerState};
