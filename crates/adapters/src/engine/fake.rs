// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake engine for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DetectionEngine, EngineError, EngineLoader};
use async_trait::async_trait;
use beacon_core::{Code, Frame, InitRequest, Options, TagDescriptor};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded engine call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Load {
        codes: Vec<Code>,
        width: u32,
        height: u32,
    },
    Ingest {
        len: usize,
    },
    Detect,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<EngineCall>,
    tags_by_frame: HashMap<Vec<u8>, Vec<TagDescriptor>>,
    default_tags: Vec<TagDescriptor>,
    load_delay: Option<Duration>,
    load_error: Option<String>,
    detect_error: Option<String>,
}

/// Fake loader that hands out deterministic [`FakeEngine`]s
///
/// Clones share state, so a test can keep one clone to script responses and
/// inspect calls while the worker owns the other.
#[derive(Clone, Default)]
pub struct FakeLoader {
    state: Arc<Mutex<FakeState>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags returned for a frame with exactly these bytes
    pub fn set_tags_for(&self, frame: &[u8], tags: Vec<TagDescriptor>) {
        self.lock().tags_by_frame.insert(frame.to_vec(), tags);
    }

    /// Tags returned for frames without a scripted response
    pub fn set_default_tags(&self, tags: Vec<TagDescriptor>) {
        self.lock().default_tags = tags;
    }

    /// Delay readiness by `delay`
    pub fn set_load_delay(&self, delay: Duration) {
        self.lock().load_delay = Some(delay);
    }

    /// Make the next loads fail
    pub fn fail_load(&self, message: &str) {
        self.lock().load_error = Some(message.to_string());
    }

    /// Make detection fail
    pub fn fail_detect(&self, message: &str) {
        self.lock().detect_error = Some(message.to_string());
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<EngineCall> {
        self.lock().calls.clone()
    }

    /// Number of times an engine was constructed
    pub fn load_count(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| matches!(call, EngineCall::Load { .. }))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl EngineLoader for FakeLoader {
    type Engine = FakeEngine;

    async fn load(&self, init: &InitRequest) -> Result<FakeEngine, EngineError> {
        let delay = {
            let mut state = self.lock();
            state.calls.push(EngineCall::Load {
                codes: init.codes.clone(),
                width: init.width,
                height: init.height,
            });
            state.load_delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.lock().load_error.clone() {
            return Err(EngineError::InitFailed(message));
        }

        Ok(FakeEngine {
            state: Arc::clone(&self.state),
            options: init.options.clone(),
            frame: None,
        })
    }
}

/// Engine produced by [`FakeLoader`]
pub struct FakeEngine {
    state: Arc<Mutex<FakeState>>,
    options: Options,
    frame: Option<Frame>,
}

impl DetectionEngine for FakeEngine {
    fn options(&self) -> &Options {
        &self.options
    }

    fn ingest_frame(&mut self, frame: Frame) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .push(EngineCall::Ingest { len: frame.len() });
        self.frame = Some(frame);
    }

    fn detect(&mut self) -> Result<Vec<TagDescriptor>, EngineError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(EngineCall::Detect);

        if let Some(message) = &state.detect_error {
            return Err(EngineError::DetectFailed(message.clone()));
        }

        let tags = self
            .frame
            .as_ref()
            .and_then(|frame| state.tags_by_frame.get(frame.as_bytes()))
            .unwrap_or(&state.default_tags)
            .clone();
        Ok(tags)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
