// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake detector for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Detection, GrayImage, TagDetector};
use crate::engine::EngineError;
use beacon_core::DetectorTuning;
use std::sync::{Arc, Mutex};

/// Recorded detector call
#[derive(Debug, Clone, PartialEq)]
pub enum DetectorCall {
    AddCode(u8),
    Configure(DetectorTuning),
    Detect {
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    },
}

#[derive(Default)]
struct FakeDetectorState {
    calls: Vec<DetectorCall>,
    detections: Vec<Detection>,
    rejected_code: Option<u8>,
}

/// Fake detector returning scripted detections
#[derive(Clone, Default)]
pub struct FakeDetector {
    state: Arc<Mutex<FakeDetectorState>>,
}

impl FakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detections returned by every `detect` call
    pub fn set_detections(&self, detections: Vec<Detection>) {
        self.lock().detections = detections;
    }

    /// Refuse to register `code`
    pub fn reject_code(&self, code: u8) {
        self.lock().rejected_code = Some(code);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<DetectorCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeDetectorState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TagDetector for FakeDetector {
    fn add_code(&mut self, code: u8) -> Result<(), EngineError> {
        let mut state = self.lock();
        if state.rejected_code == Some(code) {
            return Err(EngineError::InvalidCode(code.to_string()));
        }
        state.calls.push(DetectorCall::AddCode(code));
        Ok(())
    }

    fn configure(&mut self, tuning: &DetectorTuning) {
        self.lock().calls.push(DetectorCall::Configure(tuning.clone()));
    }

    fn detect(&mut self, image: &GrayImage<'_>) -> Result<Vec<Detection>, EngineError> {
        let mut state = self.lock();
        state.calls.push(DetectorCall::Detect {
            width: image.width,
            height: image.height,
            pixels: image.pixels.to_vec(),
        });
        Ok(state.detections.clone())
    }
}
