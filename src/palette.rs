// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns escape results into colors.  Members of the set are black.
//! Everything else gets a fully saturated, fully bright hue that walks
//! from red through the spectrum to magenta as the escape count climbs
//! toward the iteration cap.

use crate::escape::EscapeResult;

/// The largest hue handed out, in degrees.  Stopping short of 360
/// keeps the slowest escapes from wrapping back around to red.
const HUE_SPAN: f64 = 300.0;

/// An opaque 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The color of points that never escaped.
pub const BOUNDED: Rgb = Rgb(0, 0, 0);

/// Standard hexcone conversion.  `h` in degrees, `s` and `v` in [0, 1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// The color of one pixel.  Depends on nothing but the result and the
/// cap it was computed under.
pub fn color_of(result: EscapeResult, max_iterations: u32) -> Rgb {
    match result {
        EscapeResult::Bounded => BOUNDED,
        EscapeResult::Escaped(n) => {
            let fraction = f64::from(n) / f64::from(max_iterations.max(1));
            hsv_to_rgb(HUE_SPAN * fraction.min(1.0), 1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_to_rgb_primary_colors() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), Rgb(255, 0, 0));
    }

    #[test]
    fn hsv_to_rgb_without_value_is_black() {
        assert_eq!(hsv_to_rgb(200.0, 1.0, 0.0), BOUNDED);
    }

    #[test]
    fn bounded_is_always_black() {
        for cap in &[1, 160, 5000] {
            assert_eq!(color_of(EscapeResult::Bounded, *cap), BOUNDED);
        }
    }

    #[test]
    fn no_escaped_color_is_the_bounded_color() {
        for n in 1..=160 {
            let color = color_of(EscapeResult::Escaped(n), 160);
            assert_ne!(color, BOUNDED, "escape count {} came out black", n);
        }
    }

    #[test]
    fn escape_hue_runs_from_red_to_magenta() {
        assert_eq!(color_of(EscapeResult::Escaped(1), 1000), Rgb(255, 1, 0));
        assert_eq!(color_of(EscapeResult::Escaped(160), 160), Rgb(255, 0, 255));
    }

    #[test]
    fn color_is_pure() {
        let a = color_of(EscapeResult::Escaped(42), 160);
        let b = color_of(EscapeResult::Escaped(42), 160);
        assert_eq!(a, b);
    }
}
