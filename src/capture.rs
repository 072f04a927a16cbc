// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting a finished buffer out of the process: as an `image` buffer
//! a display can blit, or as a PNG in the captures directory.  Capture
//! names are built from the region and resolution, so the same view
//! always lands in the same file and different views never collide.

use crate::engine::{ColorBuffer, ComputationRequest};
use crate::errors::{MandelError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Wraps the buffer's bytes in an `image` buffer of the same size.
pub fn to_image(buffer: &ColorBuffer) -> Result<RgbImage> {
    let (width, height) = (buffer.width(), buffer.height());
    RgbImage::from_raw(width as u32, height as u32, buffer.to_rgb_bytes())
        .ok_or(MandelError::ImageMismatch { width, height })
}

/// `Mandelbrot_x=(<x_min> to <x_max>)_y=(<y_min> to <y_max>)_scl=(<w>x<h>).png`
pub fn capture_filename(request: &ComputationRequest) -> String {
    let region = request.region();
    let resolution = request.resolution();
    format!(
        "Mandelbrot_x=({} to {})_y=({} to {})_scl=({}x{}).png",
        region.x_min(),
        region.x_max(),
        region.y_min(),
        region.y_max(),
        resolution.width(),
        resolution.height()
    )
}

/// Writes the buffer as a PNG into `dir`, which must already exist.
/// Returns the path written.  Failures leave the buffer untouched.
pub fn save_capture(
    dir: &Path,
    request: &ComputationRequest,
    buffer: &ColorBuffer,
) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(MandelError::MissingCaptureDir(dir.to_path_buf()));
    }

    let path = dir.join(capture_filename(request));
    let image = to_image(buffer)?;
    image.save(&path).map_err(|e| MandelError::CaptureFailed {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    info!("Wrote capture {}", path.display());
    Ok(path)
}
