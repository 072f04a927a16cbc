// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The knobs a session starts from.

use crate::engine::ComputationRequest;
use crate::errors::Result;
use crate::planes::{Region, Resolution};
use std::path::PathBuf;

/// Default window size.
pub const DEFAULT_SIZE: (usize, usize) = (1280, 720);

/// Default iteration cap.  Higher shows more detail at the edge of the
/// set and spreads the gradient thinner.
pub const DEFAULT_ITERATIONS: u32 = 160;

/// Default captures directory, relative to where we were started.
pub const DEFAULT_CAPTURES: &str = "captures";

/// Starting settings for a session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Output width and height in pixels.
    pub size: (usize, usize),
    /// Iteration cap per point.
    pub max_iterations: u32,
    /// Worker threads per computation.
    pub workers: usize,
    /// The first region shown.
    pub region: Region,
    /// Where PNG captures are written.
    pub captures: PathBuf,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            size: DEFAULT_SIZE,
            max_iterations: DEFAULT_ITERATIONS,
            workers: num_cpus::get(),
            region: Region::default(),
            captures: PathBuf::from(DEFAULT_CAPTURES),
        }
    }
}

impl Config {
    /// The request for the first frame.  Bad sizes, worker counts and
    /// caps are caught here, before anything is computed.
    pub fn request(&self) -> Result<ComputationRequest> {
        let resolution = Resolution::new(self.size.0, self.size.1)?;
        ComputationRequest::new(self.region, resolution, self.max_iterations, self.workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MandelError;

    #[test]
    fn defaults_are_the_classic_view() {
        let config = Config::default();
        assert_eq!(config.size, (1280, 720));
        assert_eq!(config.max_iterations, 160);
        assert!(config.workers >= 1);
        assert_eq!(config.region, Region::new(-2.0, 1.0, -1.0, 1.0).unwrap());
        assert_eq!(config.captures, PathBuf::from("captures"));
    }

    #[test]
    fn default_request_is_valid() {
        let request = Config::default().request().unwrap();
        assert_eq!(request.resolution().width(), 1280);
        assert_eq!(request.resolution().height(), 720);
    }

    #[test]
    fn bad_settings_fail_before_computing() {
        let mut config = Config::default();
        config.size = (0, 720);
        assert_eq!(
            config.request(),
            Err(MandelError::InvalidResolution {
                width: 0,
                height: 720
            })
        );

        let mut config = Config::default();
        config.workers = 0;
        assert_eq!(config.request(), Err(MandelError::NoWorkers));
    }
}
