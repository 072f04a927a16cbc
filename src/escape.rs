// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time test.  Take a point `c`, start at `z = 0`, and
//! repeatedly replace `z` with `z² + c`.  Once `|z|` passes 2 the
//! sequence is known to run off to infinity, and the number of steps it
//! took is what we color by.
//!
//! Points that never leave are the Mandelbrot set proper, but "never"
//! can't be observed: we give up after `max_iterations` and call the
//! point `Bounded`.  Points near the boundary that would escape on step
//! `max_iterations + 1` are misclassified.  That's the nature of the
//! approximation, and raising the cap is the only cure.

use num::Complex;

/// Escape radius squared.  Comparing `|z|²` saves a square root.
const ESCAPE_NORM_SQR: f64 = 4.0;

/// What happened to a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// `|z|` exceeded 2 on this iteration, counting from 1.
    Escaped(u32),
    /// Still within the radius when the iteration cap ran out.
    Bounded,
}

impl EscapeResult {
    /// True for points we treat as members of the set.
    pub fn is_bounded(self) -> bool {
        self == EscapeResult::Bounded
    }
}

/// This is our classic iterator function, which either reports the
/// iteration on which the point escaped, or that it never did.
#[inline]
pub fn evaluate(c: Complex<f64>, max_iterations: u32) -> EscapeResult {
    let mut z = Complex {
        re: 0.0_f64,
        im: 0.0_f64,
    };
    for i in 1..=max_iterations {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return EscapeResult::Escaped(i);
        }
    }
    EscapeResult::Bounded
}
