// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stream transport for out-of-process hosts

use crate::config::WorkerConfig;
use crate::dispatcher::Dispatcher;
use crate::error::WorkerError;
use beacon_adapters::{DiagnosticSink, EngineLoader};
use beacon_core::protocol::{self, ProtocolError};
use beacon_core::Clock;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error};

/// Serve framed requests from `reader` until the host closes the stream
///
/// Replies are written to `writer` in request order, each one flushed before
/// the next request is read. A clean end of stream returns `Ok(())`; engine
/// faults and malformed frames end serving with an error.
pub async fn serve<L, S, C, R, W>(
    dispatcher: &mut Dispatcher<L, S, C>,
    reader: &mut R,
    writer: &mut W,
    config: &WorkerConfig,
) -> Result<(), WorkerError>
where
    L: EngineLoader,
    S: DiagnosticSink,
    C: Clock,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let request = match protocol::read_request(reader, config.max_message_bytes).await {
            Ok(request) => request,
            Err(ProtocolError::ConnectionClosed) => {
                debug!("host closed stream");
                return Ok(());
            }
            Err(e) => {
                error!(error = %e, "failed to read request");
                return Err(e.into());
            }
        };

        debug!(kind = request.kind(), "received request");

        if let Some(reply) = dispatcher.handle(request).await? {
            protocol::write_reply(writer, &reply).await?;
        }
    }
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
