// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{GrayImage, TagDetector};
use crate::engine::{DetectionEngine, EngineError, EngineLoader};
use async_trait::async_trait;
use beacon_core::{Frame, InitRequest, Options, TagDescriptor};
use std::marker::PhantomData;

/// Engine that converts RGBA frames to grayscale before detection
pub struct GrayscaleEngine<D> {
    detector: D,
    width: u32,
    height: u32,
    options: Options,
    gray: Vec<u8>,
}

impl<D: TagDetector> GrayscaleEngine<D> {
    /// Register every code with `detector`, apply tuning, and size the
    /// grayscale buffer for the request's dimensions
    pub fn new(mut detector: D, init: &InitRequest) -> Result<Self, EngineError> {
        let gray = gray_buffer(init.width, init.height)?;

        for code in &init.codes {
            let byte = code
                .to_byte()
                .ok_or_else(|| EngineError::InvalidCode(code.as_str().to_string()))?;
            detector.add_code(byte)?;
        }
        detector.configure(&init.options.tuning);

        Ok(Self {
            detector,
            width: init.width,
            height: init.height,
            options: init.options.clone(),
            gray,
        })
    }

    /// Current grayscale image
    pub fn grayscale(&self) -> &[u8] {
        &self.gray
    }
}

impl<D: TagDetector> DetectionEngine for GrayscaleEngine<D> {
    fn options(&self) -> &Options {
        &self.options
    }

    /// Keeps the first channel of each 4-byte pixel. Frames shorter than
    /// `width * height` pixels leave the rest of the image black; extra bytes
    /// are ignored.
    fn ingest_frame(&mut self, frame: Frame) {
        let mut written = 0;
        for (dst, pixel) in self.gray.iter_mut().zip(frame.as_bytes().chunks_exact(4)) {
            *dst = pixel[0];
            written += 1;
        }
        self.gray[written..].fill(0);
    }

    fn detect(&mut self) -> Result<Vec<TagDescriptor>, EngineError> {
        let image = GrayImage {
            width: self.width,
            height: self.height,
            pixels: &self.gray,
        };
        self.detector
            .detect(&image)?
            .into_iter()
            .map(|detection| Ok(TagDescriptor::new(serde_json::to_value(detection)?)))
            .collect()
    }
}

/// Zeroed `width * height` buffer, or `InitFailed` if it cannot be allocated
fn gray_buffer(width: u32, height: u32) -> Result<Vec<u8>, EngineError> {
    let too_large = || EngineError::InitFailed(format!("frame {width}x{height} is too large"));

    let pixels = usize::try_from(width)
        .ok()
        .zip(usize::try_from(height).ok())
        .and_then(|(w, h)| w.checked_mul(h))
        .ok_or_else(too_large)?;

    let mut gray = Vec::new();
    gray.try_reserve_exact(pixels).map_err(|_| too_large())?;
    gray.resize(pixels, 0);
    Ok(gray)
}

/// Loader that builds a [`GrayscaleEngine`] around a freshly created detector
pub struct GrayscaleLoader<D, F> {
    make_detector: F,
    _detector: PhantomData<fn() -> D>,
}

impl<D, F> GrayscaleLoader<D, F>
where
    F: Fn() -> Result<D, EngineError>,
{
    pub fn new(make_detector: F) -> Self {
        Self {
            make_detector,
            _detector: PhantomData,
        }
    }
}

#[async_trait]
impl<D, F> EngineLoader for GrayscaleLoader<D, F>
where
    D: TagDetector,
    F: Fn() -> Result<D, EngineError> + Send + Sync + 'static,
{
    type Engine = GrayscaleEngine<D>;

    async fn load(&self, init: &InitRequest) -> Result<GrayscaleEngine<D>, EngineError> {
        let detector = (self.make_detector)()?;
        GrayscaleEngine::new(detector, init)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
