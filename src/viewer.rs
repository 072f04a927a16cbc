// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A zoom session.  The viewer holds the frame currently on display
//! behind an `Arc`: readers take a clone of the handle and keep a
//! finished, immutable frame for as long as they like.  A new frame is
//! built off to the side and only swapped in once every worker has
//! joined, so nobody ever sees a half-drawn buffer.
//!
//! Requests are taken one at a time.  A second zoom that arrives while
//! one is computing waits for the first to be swapped in, then runs
//! against the frame it produced.  Nothing is cancelled.

use crate::capture;
use crate::engine::{compute, ColorBuffer, ComputationRequest};
use crate::errors::Result;
use crate::escape::{evaluate, EscapeResult};
use crate::planes::{Pixel, Region};
use num::Complex;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

/// A request and the buffer it produced.
#[derive(Debug)]
pub struct Frame {
    /// What was asked for.
    pub request: ComputationRequest,
    /// What came back.
    pub buffer: ColorBuffer,
}

impl Frame {
    /// Computes a complete frame.
    pub fn render(request: ComputationRequest) -> Result<Frame> {
        let buffer = compute(&request)?;
        Ok(Frame { request, buffer })
    }

    /// The complex coordinate under a pixel, and what happens to it.
    pub fn probe(&self, pixel: Pixel) -> (Complex<f64>, EscapeResult) {
        let point = self.request.mapper().pixel_to_point(pixel.1, pixel.0);
        (point, evaluate(point, self.request.max_iterations()))
    }

    /// Saves this frame as a PNG in `dir`.
    pub fn capture(&self, dir: &Path) -> Result<PathBuf> {
        capture::save_capture(dir, &self.request, &self.buffer)
    }
}

/// The displayed frame, and the lock that keeps computations in line.
pub struct Viewer {
    current: RwLock<Arc<Frame>>,
    computing: Mutex<()>,
}

impl Viewer {
    /// Renders the first frame before returning.
    pub fn new(request: ComputationRequest) -> Result<Viewer> {
        let frame = Frame::render(request)?;
        Ok(Viewer {
            current: RwLock::new(Arc::new(frame)),
            computing: Mutex::new(()),
        })
    }

    /// The frame on display right now.  Always complete.
    pub fn frame(&self) -> Arc<Frame> {
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&current)
    }

    /// Renders `request` and puts it on display.  On error the old
    /// frame stays up.
    pub fn show(&self, request: ComputationRequest) -> Result<Arc<Frame>> {
        let _turn = self.computing.lock().unwrap_or_else(|e| e.into_inner());
        self.render_and_swap(request)
    }

    /// Zooms to the rectangle dragged out between two pixels of the
    /// current frame.  Resolution, iteration cap and worker count carry
    /// over.
    pub fn zoom(&self, from: Pixel, to: Pixel) -> Result<Arc<Frame>> {
        let _turn = self.computing.lock().unwrap_or_else(|e| e.into_inner());
        let current = self.frame();
        let region = current.request.mapper().select(from, to)?;
        self.render_and_swap(current.request.with_region(region))
    }

    /// Goes back to a specific region at the current settings.
    pub fn reset(&self, region: Region) -> Result<Arc<Frame>> {
        let _turn = self.computing.lock().unwrap_or_else(|e| e.into_inner());
        let request = self.frame().request.with_region(region);
        self.render_and_swap(request)
    }

    /// The complex coordinate and escape result under a pixel of the
    /// current frame.
    pub fn probe(&self, pixel: Pixel) -> (Complex<f64>, EscapeResult) {
        self.frame().probe(pixel)
    }

    fn render_and_swap(&self, request: ComputationRequest) -> Result<Arc<Frame>> {
        let frame = Arc::new(Frame::render(request)?);
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = Arc::clone(&frame);
        debug!("Swapped in {}", capture::capture_filename(&frame.request));
        Ok(frame)
    }
}
