// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Contract between the worker and a detection engine

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{EngineCall, FakeEngine, FakeLoader};

use async_trait::async_trait;
use beacon_core::{Frame, InitRequest, Options, TagDescriptor};
use thiserror::Error;

/// Errors raised by an engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine failed to initialize: {0}")]
    InitFailed(String),
    #[error("invalid code: {0:?}")]
    InvalidCode(String),
    #[error("detection failed: {0}")]
    DetectFailed(String),
    #[error("failed to encode detection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A constructed, ready-to-use engine
///
/// Detection runs against the most recently ingested frame. The returned
/// descriptors are in detector order and must reach the host unchanged.
pub trait DetectionEngine: Send + 'static {
    /// Options the engine was constructed with
    fn options(&self) -> &Options;

    /// Replace the current frame
    fn ingest_frame(&mut self, frame: Frame);

    /// Detect tags in the current frame
    fn detect(&mut self) -> Result<Vec<TagDescriptor>, EngineError>;
}

/// Builds an engine from an `init` request
///
/// The returned future completes once, when the engine is ready; its
/// completion is the readiness signal.
#[async_trait]
pub trait EngineLoader: Send + Sync + 'static {
    type Engine: DetectionEngine;

    async fn load(&self, init: &InitRequest) -> Result<Self::Engine, EngineError>;
}
