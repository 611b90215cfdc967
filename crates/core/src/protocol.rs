// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wire codec for hosts that talk to the worker over a byte stream
//!
//! Each message is a JSON object preceded by its length as a 4-byte
//! big-endian integer.

use crate::message::{Reply, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Largest message accepted unless configured otherwise (64 MiB)
pub const DEFAULT_MAX_MESSAGE_BYTES: usize = 64 * 1024 * 1024;

/// Errors from reading or writing framed messages
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("connection closed")]
    ConnectionClosed,
    #[error("message of {size} bytes exceeds limit of {max} bytes")]
    MessageTooLarge { size: usize, max: usize },
}

/// Serialize a message to JSON bytes (no length prefix)
pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(message)?)
}

/// Deserialize a message from JSON bytes
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ProtocolError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write one length-prefixed message and flush
pub async fn write_message<W>(writer: &mut W, data: &[u8]) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let len = u32::try_from(data.len()).map_err(|_| ProtocolError::MessageTooLarge {
        size: data.len(),
        max: u32::MAX as usize,
    })?;
    writer.write_all(&len.to_be_bytes()).await?;
    writer.write_all(data).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one length-prefixed message
///
/// A stream that ends before a new length prefix yields
/// [`ProtocolError::ConnectionClosed`]; a stream that ends inside a message
/// body is an I/O error.
pub async fn read_message<R>(reader: &mut R, max_len: usize) -> Result<Vec<u8>, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let mut prefix = [0u8; 4];
    match reader.read_exact(&mut prefix).await {
        Ok(_) => {}
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
            return Err(ProtocolError::ConnectionClosed);
        }
        Err(e) => return Err(e.into()),
    }

    let len = u32::from_be_bytes(prefix) as usize;
    if len > max_len {
        return Err(ProtocolError::MessageTooLarge {
            size: len,
            max: max_len,
        });
    }

    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).await?;
    Ok(body)
}

/// Read and decode the next request
pub async fn read_request<R>(reader: &mut R, max_len: usize) -> Result<Request, ProtocolError>
where
    R: AsyncRead + Unpin,
{
    let body = read_message(reader, max_len).await?;
    decode(&body)
}

/// Encode and write a reply
pub async fn write_reply<W>(writer: &mut W, reply: &Reply) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let body = encode(reply)?;
    write_message(writer, &body).await
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
