// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Messages exchanged between a host and the detection worker
//!
//! Requests flow host → worker (`init`, `process`); replies flow
//! worker → host (`loaded`, `result`). Both are internally tagged on a
//! `type` field so they can be carried as plain JSON objects.

use serde::{de, Deserialize, Deserializer, Serialize};

/// A recognizable code registered with the engine at initialization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Code(String);

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the code as a single byte.
    ///
    /// Decimal values `0..=255` map to themselves; any other single ASCII
    /// character maps to its byte value. Everything else has no byte form.
    pub fn to_byte(&self) -> Option<u8> {
        if let Ok(value) = self.0.parse::<u8>() {
            return Some(value);
        }
        let mut chars = self.0.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Some(c as u8),
            _ => None,
        }
    }
}

impl From<&str> for Code {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Tuning knobs forwarded to the detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectorTuning {
    pub range_thres: u32,
    pub min_white_black_diff: u32,
    /// Frames a lost tag is kept alive for
    pub ttl_frames: u32,
    pub thres_dist_shape: f64,
    pub thres_dist_shape_ttl: f64,
    pub thres_dist_center: f64,
    pub quad_decimate: f32,
}

impl Default for DetectorTuning {
    fn default() -> Self {
        Self {
            range_thres: 0,
            min_white_black_diff: 5,
            ttl_frames: 8,
            thres_dist_shape: 50.0,
            thres_dist_shape_ttl: 20.0,
            thres_dist_center: 25.0,
            quad_decimate: 1.0,
        }
    }
}

/// Engine options supplied with `init`
///
/// Unrecognized keys are accepted and dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Log elapsed detection time for every processed frame
    pub print_performance: bool,
    #[serde(flatten)]
    pub tuning: DetectorTuning,
}

/// One frame of RGBA pixel data
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame(Vec<u8>);

impl Frame {
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for Frame {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

/// A detected tag, as produced by the engine
///
/// The worker never looks inside a descriptor; it is forwarded to the host
/// exactly as the engine returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagDescriptor(serde_json::Value);

impl TagDescriptor {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

/// Payload of an `init` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitRequest {
    pub codes: Vec<Code>,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub options: Options,
}

/// Payload of a `process` request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub imagedata: Frame,
}

/// Host → worker message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    Init(InitRequest),
    Process(ProcessRequest),
    /// Any message without a recognized `type`, including one with no
    /// `type` at all or a non-string `type`
    Unknown,
}

impl<'de> Deserialize<'de> for Request {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some("init") => InitRequest::deserialize(value)
                .map(Request::Init)
                .map_err(de::Error::custom),
            Some("process") => ProcessRequest::deserialize(value)
                .map(Request::Process)
                .map_err(de::Error::custom),
            _ => Ok(Request::Unknown),
        }
    }
}

impl Request {
    /// Message type name, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Init(_) => "init",
            Request::Process(_) => "process",
            Request::Unknown => "unknown",
        }
    }
}

/// Worker → host message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Reply {
    /// The engine finished initializing
    Loaded,
    /// Detection finished for one frame
    Result { tags: Vec<TagDescriptor> },
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
