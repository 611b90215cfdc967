// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request dispatcher
//!
//! Owns the engine and the lifecycle state. Requests are handled one at a
//! time: `init` builds the engine and answers `loaded` once it is ready,
//! `process` runs detection on a frame and answers `result`. Requests that
//! are not admitted in the current state are dropped without a reply.

use crate::error::DispatchError;
use beacon_adapters::{DetectionEngine, DiagnosticSink, EngineLoader};
use beacon_core::{
    Clock, IgnoreReason, InitRequest, ProcessRequest, Reply, Request, TagDescriptor, WorkerState,
};
use tracing::{debug, info, warn};

/// Label used for detection timing
const DETECT_LABEL: &str = "Detect";

enum Lifecycle<E> {
    Uninitialized,
    Initializing,
    Ready(E),
}

/// Routes requests to the engine and packages its output as replies
pub struct Dispatcher<L: EngineLoader, S, C> {
    loader: L,
    diagnostics: S,
    clock: C,
    lifecycle: Lifecycle<L::Engine>,
    last_tags: Option<Vec<TagDescriptor>>,
}

impl<L, S, C> Dispatcher<L, S, C>
where
    L: EngineLoader,
    S: DiagnosticSink,
    C: Clock,
{
    pub fn new(loader: L, diagnostics: S, clock: C) -> Self {
        Self {
            loader,
            diagnostics,
            clock,
            lifecycle: Lifecycle::Uninitialized,
            last_tags: None,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> WorkerState {
        match self.lifecycle {
            Lifecycle::Uninitialized => WorkerState::Uninitialized,
            Lifecycle::Initializing => WorkerState::Initializing,
            Lifecycle::Ready(_) => WorkerState::Ready,
        }
    }

    /// Tags from the most recent detection
    pub fn last_tags(&self) -> Option<&[TagDescriptor]> {
        self.last_tags.as_deref()
    }

    /// Handle one request to completion
    ///
    /// Returns the reply to send, or `None` when the request was dropped.
    /// An error means the engine faulted and the worker must stop.
    pub async fn handle(&mut self, request: Request) -> Result<Option<Reply>, DispatchError> {
        let state = self.state();
        if let Err(reason) = state.admit(&request) {
            log_ignored(request.kind(), state, reason);
            return Ok(None);
        }

        match request {
            Request::Init(init) => self.load(init).await.map(Some),
            Request::Process(process) => self.detect(process).map(Some),
            Request::Unknown => Ok(None),
        }
    }

    pub async fn handle_init(&mut self, init: InitRequest) -> Result<Option<Reply>, DispatchError> {
        self.handle(Request::Init(init)).await
    }

    pub async fn handle_process(
        &mut self,
        process: ProcessRequest,
    ) -> Result<Option<Reply>, DispatchError> {
        self.handle(Request::Process(process)).await
    }

    async fn load(&mut self, init: InitRequest) -> Result<Reply, DispatchError> {
        info!(
            codes = init.codes.len(),
            width = init.width,
            height = init.height,
            "initializing engine"
        );
        self.lifecycle = Lifecycle::Initializing;

        let engine = self.loader.load(&init).await?;

        self.lifecycle = Lifecycle::Ready(engine);
        info!("engine loaded");
        Ok(Reply::Loaded)
    }

    fn detect(&mut self, process: ProcessRequest) -> Result<Reply, DispatchError> {
        let Lifecycle::Ready(engine) = &mut self.lifecycle else {
            return Err(DispatchError::NotReady);
        };

        let start = self.clock.now();
        engine.ingest_frame(process.imagedata);
        let tags = engine.detect()?;
        let elapsed = self.clock.now().saturating_duration_since(start);

        if engine.options().print_performance {
            self.diagnostics.performance(DETECT_LABEL, elapsed);
        }
        debug!(tags = tags.len(), "frame processed");

        self.last_tags = Some(tags.clone());
        Ok(Reply::Result { tags })
    }
}

fn log_ignored(kind: &str, state: WorkerState, reason: IgnoreReason) {
    match reason {
        IgnoreReason::AlreadyInitialized => {
            warn!(kind, %state, %reason, "ignoring request")
        }
        _ => debug!(kind, %state, %reason, "ignoring request"),
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
