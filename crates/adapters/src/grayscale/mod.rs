// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grayscale engine adapter
//!
//! Wraps a [`TagDetector`] (the marker recognition algorithm) so it can be
//! driven as a [`DetectionEngine`](crate::DetectionEngine): RGBA frames are
//! reduced to a single-channel image and detections are converted into
//! opaque tag descriptors.

mod engine;

pub use engine::{GrayscaleEngine, GrayscaleLoader};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{DetectorCall, FakeDetector};

use crate::engine::EngineError;
use beacon_core::DetectorTuning;
use serde::Serialize;

/// Borrowed single-channel image, one byte per pixel, stride = width
#[derive(Debug, Clone, Copy)]
pub struct GrayImage<'a> {
    pub width: u32,
    pub height: u32,
    pub pixels: &'a [u8],
}

/// Image-space coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One recognized marker
///
/// `homography` and `pose` are only present when the detector computes them;
/// absent fields are left out of the serialized tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub code: u8,
    pub corners: [Point; 4],
    pub center: Point,
    /// Row-major 3x3 homography from tag space to image space
    #[serde(rename = "H", skip_serializing_if = "Option::is_none")]
    pub homography: Option<[f64; 9]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<Pose>,
}

impl Detection {
    pub fn new(code: u8, corners: [Point; 4], center: Point) -> Self {
        Self {
            code,
            corners,
            center,
            homography: None,
            pose: None,
        }
    }

    pub fn with_homography(mut self, homography: [f64; 9]) -> Self {
        self.homography = Some(homography);
        self
    }

    pub fn with_pose(mut self, pose: Pose) -> Self {
        self.pose = Some(pose);
        self
    }
}

/// Estimated tag pose relative to the camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    /// Row-major 3x3 rotation
    #[serde(rename = "R")]
    pub rotation: [f64; 9],
    #[serde(rename = "T")]
    pub translation: [f64; 3],
}

/// Marker recognition algorithm
pub trait TagDetector: Send + 'static {
    /// Register a code the detector should recognize
    fn add_code(&mut self, code: u8) -> Result<(), EngineError>;

    /// Apply tuning parameters
    fn configure(&mut self, tuning: &DetectorTuning);

    /// Find markers in `image`
    fn detect(&mut self, image: &GrayImage<'_>) -> Result<Vec<Detection>, EngineError>;
}
