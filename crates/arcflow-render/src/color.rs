//! Distinct color generation.
//!
//! A pure numeric utility with no graph dependency: `n` hues swept uniformly
//! around the color circle, each converted HSV-style to RGB with caller
//! supplied value/pale scalars.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color. Displays as a lowercase `#rrggbb` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Compute `n` well-separated colors.
///
/// Hues are spaced `360/n` degrees apart. `value` is the strongest channel's
/// intensity and `pale` the weakest's, both in `[0, 1]`; `(0.5, 0.0)` gives
/// the saturated mid-brightness palette used for arc coloring.
pub fn unique_colors(n: usize, value: f64, pale: f64) -> Vec<Rgb> {
    (0..n)
        .map(|i| {
            let hue = 360.0 / n as f64 * i as f64;
            let sector = (hue / 60.0).floor() as u32 % 6;
            let fraction = (hue / 60.0).fract();
            sector_color(sector, fraction, value, pale)
        })
        .collect()
}

/// Convert one 60-degree hue sector and in-sector fraction to RGB.
fn sector_color(sector: u32, fraction: f64, value: f64, pale: f64) -> Rgb {
    let (r, g, b) = match sector {
        0 => (value, fraction, pale),
        1 => (1.0 - fraction, value, pale),
        2 => (pale, value, fraction),
        3 => (pale, 1.0 - fraction, value),
        4 => (fraction, pale, value),
        _ => (value, pale, 1.0 - fraction),
    };
    Rgb {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

fn channel(x: f64) -> u8 {
    (x * 255.0) as u8
}
