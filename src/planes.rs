// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a pixel grid with its origin at the top-left corner, and a
//! rectangle on the complex plane.  Row 0 of the grid is the top edge
//! of the region (`y_max`); rows grow downward toward `y_min`, the way
//! images and screens count them.

use crate::errors::{MandelError, Result};
use num::Complex;

/// The x, y of a pixel in the grid: column first, then row, the way a
/// mouse event reports it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// The dimensions of the pixel grid.  Both sides are positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    /// Fails if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Resolution> {
        if width == 0 || height == 0 {
            return Err(MandelError::InvalidResolution { width, height });
        }
        Ok(Resolution { width, height })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The total number of pixels in the grid.  Used to size buffers.
    pub fn pixels(&self) -> usize {
        self.width * self.height
    }
}

/// A rectangle on the complex plane, real part along x and imaginary
/// part along y.  Always has `x_min < x_max` and `y_min < y_max`; once
/// built it is never modified, a zoom produces a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for Region {
    /// The classic view of the whole set.
    fn default() -> Region {
        Region {
            x_min: -2.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
        }
    }
}

impl Region {
    /// Takes the bounds as given.  Inverted or empty bounds are an
    /// error, not something we quietly swap.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Region> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(MandelError::NonFiniteRegion);
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(MandelError::DegenerateRegion {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        // Finite bounds can still be too far apart to subtract.
        if !((x_max - x_min).is_finite() && (y_max - y_min).is_finite()) {
            return Err(MandelError::NonFiniteRegion);
        }
        Ok(Region {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds the region spanned by two opposite corners, in whatever
    /// order a drag produced them.  Only fails when the corners share
    /// a real or an imaginary coordinate.
    pub fn from_corners(a: Complex<f64>, b: Complex<f64>) -> Result<Region> {
        Region::new(a.re.min(b.re), a.re.max(b.re), a.im.min(b.im), a.im.max(b.im))
    }

    /// Lower real bound.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper real bound.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Lower imaginary bound.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Upper imaginary bound.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

/// Contains the definitions of two planes, the pixel grid and the
/// complex region, and maps points from one to the other.
#[derive(Copy, Clone, Debug)]
pub struct PlaneMapper {
    /// The area of the complex plane being sampled.
    pub region: Region,
    /// The grid it is sampled at.
    pub resolution: Resolution,
    // The width and height of a single pixel, in complex units.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Both halves were validated when they were built, so this can't
    /// fail.
    pub fn new(region: Region, resolution: Resolution) -> PlaneMapper {
        let steps = (
            (region.x_max - region.x_min) / (resolution.width as f64),
            (region.y_max - region.y_min) / (resolution.height as f64),
        );
        PlaneMapper {
            region,
            resolution,
            steps,
        }
    }

    /// The size of one pixel on the complex plane, as (x_step, y_step).
    pub fn steps(&self) -> (f64, f64) {
        self.steps
    }

    /// Given the row and column of a pixel, return the complex number
    /// at that pixel's top-left corner.  Indices are assumed to be on
    /// the grid; nothing here checks.
    #[inline]
    pub fn pixel_to_point(&self, row: usize, col: usize) -> Complex<f64> {
        Complex::new(
            self.region.x_min + (col as f64) * self.steps.0,
            self.region.y_max - (row as f64) * self.steps.1,
        )
    }

    /// Given a complex number, find the pixel it falls in, or `None`
    /// if it lies outside the region.
    pub fn point_to_pixel(&self, point: &Complex<f64>) -> Option<Pixel> {
        let left = ((point.re - self.region.x_min) / self.steps.0).floor();
        let top = ((self.region.y_max - point.im) / self.steps.1).floor();
        if left < 0.0
            || top < 0.0
            || left >= (self.resolution.width as f64)
            || top >= (self.resolution.height as f64)
        {
            return None;
        }
        Some(Pixel(left as usize, top as usize))
    }

    /// Turns two corners of a drag on this grid into the region they
    /// enclose.  Dragging in any diagonal direction gives the same
    /// answer.  Both corners must lie on this grid.
    pub fn select(&self, from: Pixel, to: Pixel) -> Result<Region> {
        for corner in &[from, to] {
            if corner.0 >= self.resolution.width || corner.1 >= self.resolution.height {
                return Err(MandelError::SelectionOutsideFrame {
                    col: corner.0,
                    row: corner.1,
                    width: self.resolution.width,
                    height: self.resolution.height,
                });
            }
        }
        Region::from_corners(
            self.pixel_to_point(from.1, from.0),
            self.pixel_to_point(to.1, to.0),
        )
    }
}
