#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot renderer
//!
//! The Mandelbrot set is the set of points `c` on the complex plane for
//! which repeatedly squaring `z` and adding `c`, starting from zero,
//! never runs off to infinity.  Points outside the set do run off, and
//! how quickly they do it (the number of iterations before `|z|`
//! passes 2) is the number used to color the image.
//!
//! This crate samples a rectangle of the complex plane at a fixed
//! pixel resolution, splits the rows across worker threads, and
//! produces a complete color buffer.  On top of that sits a zoom
//! session: drag out a rectangle on the current frame and the whole
//! thing is recomputed over the new region, with the visible frame
//! swapped only once the new one is finished.  Frames can be saved as
//! PNG captures named after the region they show.
//!
//! Everything is `f64`; zooming past double precision just gives you
//! big blocky pixels.

extern crate crossbeam;
extern crate failure;
extern crate image;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;
extern crate num_cpus;

pub mod capture;
pub mod config;
pub mod engine;
pub mod errors;
pub mod escape;
pub mod palette;
pub mod planes;
pub mod viewer;

pub use config::Config;
pub use engine::{compute, compute_single, ColorBuffer, ComputationRequest};
pub use errors::{MandelError, Result};
pub use escape::{evaluate, EscapeResult};
pub use palette::{color_of, Rgb};
pub use planes::{Pixel, PlaneMapper, Region, Resolution};
pub use viewer::{Frame, Viewer};
