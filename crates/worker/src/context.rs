// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Worker context: a dispatcher running on its own task
//!
//! The host talks to the context only through channels. Requests are
//! handled strictly in arrival order; a request that arrives while `init`
//! is still waiting for the engine stays queued until `loaded` is sent.

use crate::config::WorkerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::{DispatchError, WorkerError};
use beacon_adapters::{DiagnosticSink, EngineLoader};
use beacon_core::{Clock, Reply, Request};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Host-side handle to a running worker context
pub struct WorkerHandle {
    requests: Option<mpsc::Sender<Request>>,
    replies: mpsc::UnboundedReceiver<Reply>,
    task: JoinHandle<Result<(), DispatchError>>,
}

impl WorkerHandle {
    /// Post a request to the worker
    ///
    /// Fails with [`WorkerError::Terminated`] once the worker has stopped or
    /// the handle was closed.
    pub async fn post(&self, request: Request) -> Result<(), WorkerError> {
        let requests = self.requests.as_ref().ok_or(WorkerError::Terminated)?;
        requests
            .send(request)
            .await
            .map_err(|_| WorkerError::Terminated)
    }

    /// Wait for the next reply
    ///
    /// Returns `None` once the worker has stopped and every reply it sent
    /// has been received.
    pub async fn recv(&mut self) -> Option<Reply> {
        self.replies.recv().await
    }

    /// Stop accepting requests. The worker finishes what is already queued
    /// and then exits.
    pub fn close(&mut self) {
        self.requests = None;
    }

    /// Wait for the worker to exit and report how it ended
    pub async fn join(mut self) -> Result<(), WorkerError> {
        self.close();
        self.task.await??;
        Ok(())
    }
}

/// Start a worker context for `dispatcher` on the current tokio runtime
pub fn spawn<L, S, C>(dispatcher: Dispatcher<L, S, C>, config: &WorkerConfig) -> WorkerHandle
where
    L: EngineLoader,
    S: DiagnosticSink,
    C: Clock,
{
    let (request_tx, request_rx) = mpsc::channel(config.channel_capacity);
    let (reply_tx, reply_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(run(dispatcher, request_rx, reply_tx));

    WorkerHandle {
        requests: Some(request_tx),
        replies: reply_rx,
        task,
    }
}

/// Handle requests until the request channel closes or the engine faults
///
/// A fault ends the loop immediately; no reply is sent for the request that
/// caused it and later requests are never handled.
pub async fn run<L, S, C>(
    mut dispatcher: Dispatcher<L, S, C>,
    mut requests: mpsc::Receiver<Request>,
    replies: mpsc::UnboundedSender<Reply>,
) -> Result<(), DispatchError>
where
    L: EngineLoader,
    S: DiagnosticSink,
    C: Clock,
{
    info!("worker started");

    while let Some(request) = requests.recv().await {
        let reply = match dispatcher.handle(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(error = %e, "worker terminated");
                return Err(e);
            }
        };

        if let Some(reply) = reply {
            if replies.send(reply).is_err() {
                debug!("host dropped reply receiver");
            }
        }
    }

    info!("request channel closed, worker stopping");
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
