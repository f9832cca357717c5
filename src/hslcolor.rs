//! This file implements HSL as the web knows it: a cylindrical reshaping of sRGB into hue,
//! saturation and lightness, with every component rounded to a whole number. Hue runs from 0 to 359
//! degrees, saturation and lightness from 0 to 100 percent. Round trips through HSL are lossy:
//! whole-percent saturation and lightness can't hold every sRGB color, so about a third of all
//! colors come back more than one unit off in some channel. The worst drift is 5 units
//! (`#02e4e6` comes back as `#02dfe3`), and `#009ced` comes back as `#0098eb`.
//!
//! Converting a gray (any color with `r = g = b`) gives a hue and saturation of 0, although any hue
//! would describe it equally well.

use num;

use color::HexColor;
use error::Result;

/// A color in integer HSL coordinates. Construct through [`HSLColor::new`] to keep the components
/// in range; the fields are public for reading and for literal construction of known-good values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, in degrees from 0 to 359.
    pub h: i32,
    /// The saturation, as a percentage from 0 to 100.
    pub s: i32,
    /// The lightness, as a percentage from 0 to 100.
    pub l: i32,
}

impl HSLColor {
    /// Creates a new color, wrapping the hue around the color wheel and clamping saturation and
    /// lightness to 0-100. `HSLColor::new(-30, 120, 50)` is the same as `HSLColor::new(330, 100, 50)`.
    pub fn new(h: i32, s: i32, l: i32) -> HSLColor {
        HSLColor {
            h: h.rem_euclid(360),
            s: num::clamp(s, 0, 100),
            l: num::clamp(l, 0, 100),
        }
    }

    /// The same color turned `degrees` around the color wheel. Negative values turn backwards.
    pub fn rotate_hue(&self, degrees: i32) -> HSLColor {
        HSLColor::new(self.h + degrees, self.s, self.l)
    }

    /// Converts from sRGB, rounding each component to the nearest whole degree or percent.
    pub fn from_hex(color: &HexColor) -> HSLColor {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;

        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let lightness = (max_c + min_c) / 2.0;

        let (hue, saturation) = if max_c == min_c {
            (0.0, 0.0)
        } else {
            let chroma = max_c - min_c;
            let saturation = if lightness > 0.5 {
                chroma / (2.0 - max_c - min_c)
            } else {
                chroma / (max_c + min_c)
            };
            // which sector of the hexagon we're in depends on the largest channel; red wins ties,
            // then green
            let sector = if max_c == r {
                (g - b) / chroma + if g < b { 6.0 } else { 0.0 }
            } else if max_c == g {
                (b - r) / chroma + 2.0
            } else {
                (r - g) / chroma + 4.0
            };
            (sector / 6.0, saturation)
        };

        // a hue just shy of a full turn rounds up to 360, which new() folds back to 0
        HSLColor::new(
            (hue * 360.0).round() as i32,
            (saturation * 100.0).round() as i32,
            (lightness * 100.0).round() as i32,
        )
    }

    /// Converts back to sRGB, rounding each channel to the nearest integer.
    pub fn to_hex(&self) -> HexColor {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        HexColor {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
        }
    }
}

// the piecewise-linear ramp each channel follows as hue goes around the wheel
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(channel: f64) -> u8 {
    num::clamp((channel * 255.0).round(), 0.0, 255.0) as u8
}

/// Parses a hex code and converts it to HSL.
/// # Errors
/// Returns `WardrobeError::InvalidColorFormat` if `code` isn't a 6-digit hex code.
/// # Example
/// ```
/// # use swatch::hslcolor::{hex_to_hsl, HSLColor};
/// assert_eq!(hex_to_hsl("#3b82f6").unwrap(), HSLColor { h: 217, s: 91, l: 60 });
/// ```
pub fn hex_to_hsl(code: &str) -> Result<HSLColor> {
    Ok(HSLColor::from_hex(&HexColor::from_hex_code(code)?))
}

/// Converts an HSL color to sRGB. Infallible: every `HSLColor` has an sRGB equivalent.
pub fn hsl_to_hex(hsl: HSLColor) -> HexColor {
    hsl.to_hex()
}
