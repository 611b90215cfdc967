// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced engine wrappers for consistent observability

use crate::engine::{DetectionEngine, EngineError, EngineLoader};
use async_trait::async_trait;
use beacon_core::{Frame, InitRequest, Options, TagDescriptor};
use tracing::Instrument;

/// Wrapper that adds tracing to any EngineLoader
#[derive(Clone)]
pub struct TracedLoader<L> {
    inner: L,
}

impl<L> TracedLoader<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<L: EngineLoader> EngineLoader for TracedLoader<L> {
    type Engine = TracedEngine<L::Engine>;

    async fn load(&self, init: &InitRequest) -> Result<Self::Engine, EngineError> {
        let span = tracing::info_span!(
            "engine.load",
            codes = init.codes.len(),
            width = init.width,
            height = init.height
        );

        async {
            tracing::info!("loading");

            let start = std::time::Instant::now();
            let result = self.inner.load(init).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "engine ready"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "load failed"
                ),
            }

            result.map(TracedEngine::new)
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any DetectionEngine
pub struct TracedEngine<E> {
    inner: E,
}

impl<E> TracedEngine<E> {
    pub fn new(inner: E) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: DetectionEngine> DetectionEngine for TracedEngine<E> {
    fn options(&self) -> &Options {
        self.inner.options()
    }

    fn ingest_frame(&mut self, frame: Frame) {
        tracing::trace!(bytes = frame.len(), "ingest frame");
        self.inner.ingest_frame(frame);
    }

    fn detect(&mut self) -> Result<Vec<TagDescriptor>, EngineError> {
        let span = tracing::debug_span!("engine.detect");
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.detect();
        let elapsed = start.elapsed();

        match &result {
            Ok(tags) => tracing::debug!(
                tags = tags.len(),
                elapsed_us = elapsed.as_micros() as u64,
                "detected"
            ),
            Err(e) => tracing::error!(error = %e, "detect failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
