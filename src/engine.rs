// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The parallel escape-time renderer.
//!
//! A request names a region, a resolution, an iteration cap and a
//! worker count.  The rows of the pixel grid are cut into contiguous
//! bands, one per worker, and the color buffer is split along the same
//! lines so each worker holds the only mutable reference to its band.
//! No locks are needed: nobody can see anybody else's rows.  The
//! scope joins every worker before `compute` returns, so the buffer a
//! caller gets back is complete.
//!
//! The output depends only on the request's region, resolution and
//! cap.  The worker count changes how long it takes and nothing else.

use crate::errors::{MandelError, Result};
use crate::escape::evaluate;
use crate::palette::{color_of, Rgb};
use crate::planes::{PlaneMapper, Region, Resolution};
use itertools::iproduct;
use std::ops::Range;

/// Everything needed to produce one buffer.  Once built it is valid:
/// the region has area, the grid has pixels, and there is at least one
/// worker and one iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComputationRequest {
    region: Region,
    resolution: Resolution,
    max_iterations: u32,
    workers: usize,
}

impl ComputationRequest {
    /// Region and resolution check themselves when they are built;
    /// this checks the rest.
    pub fn new(
        region: Region,
        resolution: Resolution,
        max_iterations: u32,
        workers: usize,
    ) -> Result<Self> {
        if workers == 0 {
            return Err(MandelError::NoWorkers);
        }
        if max_iterations == 0 {
            return Err(MandelError::NoIterations);
        }
        Ok(ComputationRequest {
            region,
            resolution,
            max_iterations,
            workers,
        })
    }

    /// The same request over a different region.  Used when zooming.
    pub fn with_region(&self, region: Region) -> Self {
        ComputationRequest { region, ..*self }
    }

    /// The area of the complex plane to sample.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The grid to sample it at.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Iteration cap per point.
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// The worker count asked for.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// The worker count actually used.  A worker with no rows would be
    /// pure overhead, so we never run more workers than rows.
    pub fn effective_workers(&self) -> usize {
        self.workers.min(self.resolution.height())
    }

    /// The pixel/plane mapping for this request.
    pub fn mapper(&self) -> PlaneMapper {
        PlaneMapper::new(self.region, self.resolution)
    }
}

/// The finished image: one color per pixel, stored row by row from
/// the top.  Immutable once `compute` hands it over.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    resolution: Resolution,
    pixels: Vec<Rgb>,
}

impl ColorBuffer {
    /// Columns.
    pub fn width(&self) -> usize {
        self.resolution.width()
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.resolution.height()
    }

    /// The dimensions this buffer was rendered at.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The color at a pixel, or `None` off the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.pixels[row * self.width() + col])
    }

    /// All pixels, row-major from the top-left.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// One slice per row, top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, Rgb> {
        self.pixels.chunks(self.width())
    }

    /// Packed `RGBRGB...` bytes, the layout image encoders want.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.0, p.1, p.2]);
        }
        bytes
    }
}

/// Cuts `height` rows into `workers` contiguous bands of
/// `height / workers` rows each.  Whatever doesn't divide evenly goes
/// to the last band, so the bands cover `0..height` exactly once.
/// With more workers than rows the leading bands are empty; with no
/// workers there are no bands.
pub fn partition_rows(height: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return Vec::new();
    }
    let rows_per_worker = height / workers;
    (0..workers)
        .map(|i| {
            let start = i * rows_per_worker;
            let end = if i + 1 == workers {
                height
            } else {
                start + rows_per_worker
            };
            start..end
        })
        .collect()
}

/// Hands each band of rows to its own scoped thread, along with the
/// matching slice of `cells`, and fills every cell in it with
/// `f(row, col)`.  Returns after every thread has finished.
pub fn fill_rows<T, F>(cells: &mut [T], width: usize, bands: &[Range<usize>], f: &F) -> Result<()>
where
    T: Send,
    F: Fn(usize, usize) -> T + Sync,
{
    let mut slices: Vec<(Range<usize>, &mut [T])> = Vec::with_capacity(bands.len());
    let mut rest = cells;
    for rows in bands {
        let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * width);
        slices.push((rows.clone(), band));
        rest = tail;
    }

    crossbeam::scope(|spawner| {
        for (rows, band) in slices {
            spawner.spawn(move |_| {
                debug!("worker filling rows {}..{}", rows.start, rows.end);
                for ((row, col), cell) in iproduct!(rows, 0..width).zip(band.iter_mut()) {
                    *cell = f(row, col);
                }
            });
        }
    })
    .map_err(|_| MandelError::WorkerPanicked)
}

/// Map, iterate, color: the whole life of one pixel.
#[inline]
pub fn shade(mapper: &PlaneMapper, max_iterations: u32, row: usize, col: usize) -> Rgb {
    color_of(evaluate(mapper.pixel_to_point(row, col), max_iterations), max_iterations)
}

/// The multi-threaded renderer.  One scoped worker per band of rows,
/// all joined before the buffer is returned.
pub fn compute(request: &ComputationRequest) -> Result<ColorBuffer> {
    let resolution = request.resolution();
    let mapper = request.mapper();
    let max_iterations = request.max_iterations();
    let workers = request.effective_workers();
    if workers < request.workers() {
        warn!(
            "Capping {} workers to the {} rows available",
            request.workers(),
            workers
        );
    }

    let region = request.region();
    info!(
        "Computing x=({} to {}) y=({} to {}) at {}x{}, {} iterations, {} workers",
        region.x_min(),
        region.x_max(),
        region.y_min(),
        region.y_max(),
        resolution.width(),
        resolution.height(),
        max_iterations,
        workers
    );

    let mut pixels = vec![Rgb::default(); resolution.pixels()];
    let bands = partition_rows(resolution.height(), workers);
    fill_rows(&mut pixels, resolution.width(), &bands, &|row: usize, col: usize| {
        shade(&mapper, max_iterations, row, col)
    })?;

    Ok(ColorBuffer { resolution, pixels })
}

/// The single-threaded renderer.  Produces exactly what `compute`
/// does, on the calling thread.
pub fn compute_single(request: &ComputationRequest) -> ColorBuffer {
    let resolution = request.resolution();
    let mapper = request.mapper();
    let max_iterations = request.max_iterations();
    let pixels = iproduct!(0..resolution.height(), 0..resolution.width())
        .map(|(row, col)| shade(&mapper, max_iterations, row, col))
        .collect();
    ColorBuffer { resolution, pixels }
}
