// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake diagnostic sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{performance_line, DiagnosticSink};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded measurement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceRecord {
    pub label: String,
    pub elapsed: Duration,
}

/// Fake sink that records every measurement
#[derive(Clone, Default)]
pub struct FakeDiagnostics {
    records: Arc<Mutex<Vec<PerformanceRecord>>>,
}

impl FakeDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded measurements
    pub fn records(&self) -> Vec<PerformanceRecord> {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Recorded measurements rendered as log lines
    pub fn lines(&self) -> Vec<String> {
        self.records()
            .iter()
            .map(|r| performance_line(&r.label, r.elapsed))
            .collect()
    }
}

impl DiagnosticSink for FakeDiagnostics {
    fn performance(&self, label: &str, elapsed: Duration) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(PerformanceRecord {
                label: label.to_string(),
                elapsed,
            });
    }
}
