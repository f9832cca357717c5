//! This module defines [`HexColor`], the one color type everything else in Swatch works with: an
//! sRGB triple that is read from and written to the familiar 6-digit hex notation used on the web,
//! such as `"#3b82f6"`. There is no alpha channel. Parsing accepts upper- or lowercase digits with
//! or without the leading `#`, and printing always produces lowercase with the `#`, so two hex
//! codes that differ only in case compare equal once parsed.
//!
//! Distance between colors is plain Euclidean distance in RGB space, which is not perceptually
//! uniform.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use error::{Result, WardrobeError};

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").unwrap();
}

/// A color in the sRGB space, stored as three 8-bit channels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// The red channel, from 0 to 255.
    pub r: u8,
    /// The green channel, from 0 to 255.
    pub g: u8,
    /// The blue channel, from 0 to 255.
    pub b: u8,
}

impl HexColor {
    /// Builds a color from a packed `0xRRGGBB` integer. Anything above the low 24 bits is ignored.
    /// Usable in constants, which is how the curated color tables are written.
    pub const fn from_u32(code: u32) -> HexColor {
        HexColor {
            r: ((code >> 16) & 0xff) as u8,
            g: ((code >> 8) & 0xff) as u8,
            b: (code & 0xff) as u8,
        }
    }

    /// Packs this color back into a `0xRRGGBB` integer.
    pub fn to_u32(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Parses a hex code such as `"#11457c"`, `"11457C"` or `"#FFFFFF"`.
    /// # Errors
    /// Returns `WardrobeError::InvalidColorFormat` unless the input is exactly six hex digits after
    /// stripping one optional leading `#`. Shorthand like `"#fff"` and alpha like `"#ffffff80"` are
    /// both rejected.
    /// # Example
    /// ```
    /// # use swatch::color::HexColor;
    /// let navy = HexColor::from_hex_code("#1F2937").unwrap();
    /// assert_eq!(navy.to_string(), "#1f2937");
    /// assert!(HexColor::from_hex_code("#1f29").is_err());
    /// ```
    pub fn from_hex_code(code: &str) -> Result<HexColor> {
        let invalid = || WardrobeError::InvalidColorFormat(code.to_string());
        let caps = HEX_CODE.captures(code).ok_or_else(invalid)?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).map_err(|_| invalid());
        Ok(HexColor {
            r: channel(1)?,
            g: channel(2)?,
            b: channel(3)?,
        })
    }

    /// The color with every channel flipped, `255 - c`: white becomes black, blue becomes yellow.
    pub fn inverted(&self) -> HexColor {
        HexColor {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = WardrobeError;

    fn from_str(s: &str) -> Result<HexColor> {
        HexColor::from_hex_code(s)
    }
}

// colors travel as their hex code, never as a struct of channels
impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> ::std::result::Result<HexColor, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}

/// Euclidean distance between two colors in raw RGB space, with each channel running from 0 to 255.
/// The result lies between 0 (same color) and about 441.67 (black to white). Symmetric, and 0 if
/// and only if the colors are equal.
pub fn color_distance(a: &HexColor, b: &HexColor) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        let blue = HexColor::from_hex_code("#3b82f6").unwrap();
        assert_eq!(blue, HexColor { r: 0x3b, g: 0x82, b: 0xf6 });
        // case and the leading # don't matter
        assert_eq!(HexColor::from_hex_code("3B82F6").unwrap(), blue);
        assert_eq!("#3B82f6".parse::<HexColor>().unwrap(), blue);
        assert_eq!(blue.to_string(), "#3b82f6");
        assert_eq!(HexColor::from_u32(0x3b82f6), blue);
        assert_eq!(blue.to_u32(), 0x3b82f6);
    }

    #[test]
    fn test_invalid_hex() {
        for bad in &["", "#", "#fff", "#12345", "#1234567", "##123456", "#12345g", "rgb(1,2,3)"] {
            assert_eq!(
                HexColor::from_hex_code(bad),
                Err(WardrobeError::InvalidColorFormat(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_distance() {
        let black = HexColor::from_u32(0x000000);
        let white = HexColor::from_u32(0xffffff);
        let navy = HexColor::from_u32(0x1f2937);
        assert_eq!(color_distance(&navy, &navy), 0.0);
        assert_eq!(color_distance(&black, &navy), color_distance(&navy, &black));
        assert!((color_distance(&black, &white) - 441.6729559300637).abs() <= 1e-9);
        let red = HexColor::from_u32(0xff0000);
        let green = HexColor::from_u32(0x00ff00);
        assert!((color_distance(&red, &green) - 360.62445840513925).abs() <= 1e-9);
    }

    #[test]
    fn test_inverted() {
        assert_eq!(HexColor::from_u32(0xffffff).inverted(), HexColor::from_u32(0x000000));
        assert_eq!(HexColor::from_u32(0x3b82f6).inverted().to_string(), "#c47d09");
    }
}
