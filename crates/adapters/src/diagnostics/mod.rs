// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic sinks for optional performance output

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeDiagnostics, PerformanceRecord};

use std::time::Duration;

/// Receives timing measurements the worker was asked to report
pub trait DiagnosticSink: Send + Sync + 'static {
    fn performance(&self, label: &str, elapsed: Duration);
}

/// Render a measurement as a log line, e.g. `[performance] Detect: 12`
pub fn performance_line(label: &str, elapsed: Duration) -> String {
    format!("[performance] {}: {}", label, elapsed.as_millis())
}

/// Emits measurements as `info` events on the `beacon::performance` target
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn performance(&self, label: &str, elapsed: Duration) {
        tracing::info!(
            target: "beacon::performance",
            elapsed_ms = elapsed.as_millis() as u64,
            "{}",
            performance_line(label, elapsed)
        );
    }
}

/// Discards measurements
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDiagnostics;

impl DiagnosticSink for NoOpDiagnostics {
    fn performance(&self, _label: &str, _elapsed: Duration) {}
}
