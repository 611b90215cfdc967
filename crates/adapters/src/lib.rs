// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters around the external detection engine

pub mod diagnostics;
pub mod engine;
pub mod grayscale;
pub mod traced;

#[cfg(test)]
mod test_logs;

pub use diagnostics::{performance_line, DiagnosticSink, NoOpDiagnostics, TracingDiagnostics};
pub use engine::{DetectionEngine, EngineError, EngineLoader};
pub use grayscale::{
    Detection, GrayImage, GrayscaleEngine, GrayscaleLoader, Point, Pose, TagDetector,
};
pub use traced::{TracedEngine, TracedLoader};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use diagnostics::{FakeDiagnostics, PerformanceRecord};
#[cfg(any(test, feature = "test-support"))]
pub use engine::{EngineCall, FakeEngine, FakeLoader};
#[cfg(any(test, feature = "test-support"))]
pub use grayscale::{DetectorCall, FakeDetector};
