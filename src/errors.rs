// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong between a region being chosen and a
//! capture landing on disk.  Invalid requests are rejected before a
//! single worker is spawned; nothing in the escape-time loop itself
//! can fail.

use failure::Fail;
use std::path::PathBuf;

/// The error type for the whole crate.
#[derive(Debug, Fail, PartialEq)]
pub enum MandelError {
    /// Width or height was zero.
    #[fail(display = "Resolution must be positive, got {}x{}", width, height)]
    InvalidResolution {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// A computation needs at least one worker.
    #[fail(display = "Worker count must be at least 1")]
    NoWorkers,

    /// A computation needs at least one iteration.
    #[fail(display = "Iteration limit must be at least 1")]
    NoIterations,

    /// One of the bounds, or the distance between them, was NaN or
    /// infinite.
    #[fail(display = "Region bounds must be finite numbers")]
    NonFiniteRegion,

    /// The region has no area: min and max coincide (or are inverted).
    #[fail(
        display = "Degenerate region: x=({} to {}) y=({} to {})",
        x_min, x_max, y_min, y_max
    )]
    DegenerateRegion {
        /// Lower real bound.
        x_min: f64,
        /// Upper real bound.
        x_max: f64,
        /// Lower imaginary bound.
        y_min: f64,
        /// Upper imaginary bound.
        y_max: f64,
    },

    /// A drag corner fell outside the frame it was drawn on.
    #[fail(
        display = "Selection corner ({}, {}) is outside the {}x{} frame",
        col, row, width, height
    )]
    SelectionOutsideFrame {
        /// Corner column.
        col: usize,
        /// Corner row.
        row: usize,
        /// Frame width.
        width: usize,
        /// Frame height.
        height: usize,
    },

    /// A worker thread panicked before finishing its rows.
    #[fail(display = "A render worker panicked")]
    WorkerPanicked,

    /// The buffer could not be turned into an image of the expected size.
    #[fail(display = "Color buffer does not match a {}x{} image", width, height)]
    ImageMismatch {
        /// Expected width.
        width: usize,
        /// Expected height.
        height: usize,
    },

    /// Captures go into an existing directory; we don't create it.
    #[fail(display = "Capture directory {:?} does not exist", _0)]
    MissingCaptureDir(PathBuf),

    /// Writing the PNG failed.
    #[fail(display = "Could not write capture {:?}: {}", path, reason)]
    CaptureFailed {
        /// Where we tried to write.
        path: PathBuf,
        /// The encoder's or filesystem's complaint.
        reason: String,
    },
}

/// Shorthand used throughout the crate.
pub type Result<T> = ::std::result::Result<T, MandelError>;
