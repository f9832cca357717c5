//! This module derives color harmonies: sets of colors that relate to a base color by a fixed turn
//! around the color wheel (or, for monochromatic harmony, by changes to saturation and lightness).
//! All of the arithmetic happens in integer HSL, so the resulting colors are only as precise as
//! that rounding allows. [`generate_color_matches`] then takes a harmony and finds which colors
//! from some pool of real colors, like the colors of a wardrobe, come closest to it.

use color::{color_distance, HexColor};
use hslcolor::HSLColor;

/// The supported ways of deriving related colors from a base color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorHarmony {
    /// The base and its two neighbors, 30° either way.
    Analogous,
    /// The base and the color directly opposite it.
    Complementary,
    /// Three colors evenly spaced around the wheel.
    Triadic,
    /// The base with less saturation, more lightness and less lightness.
    Monochromatic,
    /// The base and the two colors either side of its complement.
    SplitComplementary,
}

/// Every harmony, in declaration order.
pub static HARMONIES: [ColorHarmony; 5] = [
    ColorHarmony::Analogous,
    ColorHarmony::Complementary,
    ColorHarmony::Triadic,
    ColorHarmony::Monochromatic,
    ColorHarmony::SplitComplementary,
];

/// How close (in RGB distance) a pool color must be to a harmony color to count as a match.
pub const MATCH_DISTANCE_THRESHOLD: f64 = 150.0;

/// Returns the colors in the given harmony with `base`. The base itself always comes first,
/// unchanged; the rest are computed through HSL, with hue arithmetic modulo 360 and saturation and
/// lightness held to 0-100.
///
/// | harmony              | colors                                                  |
/// |----------------------|---------------------------------------------------------|
/// | `Analogous`          | base, +30°, −30°                                        |
/// | `Complementary`      | base, +180°                                             |
/// | `Triadic`            | base, +120°, +240°                                      |
/// | `Monochromatic`      | base, saturation −30, lightness +20, lightness −20      |
/// | `SplitComplementary` | base, +150°, +210°                                      |
///
/// # Example
/// ```
/// # use swatch::color::HexColor;
/// # use swatch::harmony::{get_color_harmony, ColorHarmony};
/// let red = HexColor::from_hex_code("#ff0000").unwrap();
/// let triad: Vec<String> = get_color_harmony(&red, ColorHarmony::Triadic)
///     .iter()
///     .map(|c| c.to_string())
///     .collect();
/// assert_eq!(triad, vec!["#ff0000", "#00ff00", "#0000ff"]);
/// ```
pub fn get_color_harmony(base: &HexColor, harmony: ColorHarmony) -> Vec<HexColor> {
    let hsl = HSLColor::from_hex(base);
    let derived: Vec<HSLColor> = match harmony {
        ColorHarmony::Analogous => vec![hsl.rotate_hue(30), hsl.rotate_hue(-30)],
        ColorHarmony::Complementary => vec![hsl.rotate_hue(180)],
        ColorHarmony::Triadic => vec![hsl.rotate_hue(120), hsl.rotate_hue(240)],
        ColorHarmony::Monochromatic => vec![
            HSLColor::new(hsl.h, hsl.s - 30, hsl.l),
            HSLColor::new(hsl.h, hsl.s, hsl.l + 20),
            HSLColor::new(hsl.h, hsl.s, hsl.l - 20),
        ],
        ColorHarmony::SplitComplementary => vec![hsl.rotate_hue(150), hsl.rotate_hue(210)],
    };
    let mut colors = Vec::with_capacity(derived.len() + 1);
    colors.push(*base);
    colors.extend(derived.iter().map(HSLColor::to_hex));
    colors
}

/// Finds the colors in `pool` that best realize the given harmony with `base`. For each harmony
/// color other than the base itself, the closest pool color is picked (the first one wins ties) and
/// kept if it lies within [`MATCH_DISTANCE_THRESHOLD`]. The result follows the harmony's order and
/// isn't deduplicated: if one pool color is closest to two harmony colors, it shows up twice.
pub fn generate_color_matches(
    base: &HexColor,
    pool: &[HexColor],
    harmony: ColorHarmony,
) -> Vec<HexColor> {
    get_color_harmony(base, harmony)
        .iter()
        .filter(|target| *target != base)
        .filter_map(|target| {
            let mut closest: Option<(&HexColor, f64)> = None;
            for candidate in pool {
                let distance = color_distance(target, candidate);
                if closest.map_or(true, |(_, best)| distance < best) {
                    closest = Some((candidate, distance));
                }
            }
            closest
                .filter(|&(_, distance)| distance < MATCH_DISTANCE_THRESHOLD)
                .map(|(color, _)| *color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hex(code: &str) -> HexColor {
        HexColor::from_hex_code(code).unwrap()
    }

    fn codes(colors: &[HexColor]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_harmonies() {
        let blue = hex("#3b82f6");
        assert_eq!(
            codes(&get_color_harmony(&blue, ColorHarmony::Analogous)),
            vec!["#3b82f6", "#523cf6", "#3ce0f6"]
        );
        assert_eq!(
            codes(&get_color_harmony(&blue, ColorHarmony::Complementary)),
            vec!["#3b82f6", "#f6af3c"]
        );
        assert_eq!(
            codes(&get_color_harmony(&blue, ColorHarmony::Triadic)),
            vec!["#3b82f6", "#f63c83", "#83f63c"]
        );
        assert_eq!(
            codes(&get_color_harmony(&blue, ColorHarmony::Monochromatic)),
            vec!["#3b82f6", "#5b8ad7", "#9ec1fa", "#0950c3"]
        );
        assert_eq!(
            codes(&get_color_harmony(&blue, ColorHarmony::SplitComplementary)),
            vec!["#3b82f6", "#f6523c", "#e0f63c"]
        );
    }

    #[test]
    fn test_complement_hue() {
        for code in &["#3b82f6", "#ff0000", "#92400e"] {
            let base = hex(code);
            let harmony = get_color_harmony(&base, ColorHarmony::Complementary);
            assert_eq!(harmony.len(), 2);
            let base_hue = HSLColor::from_hex(&base).h;
            assert_eq!(HSLColor::from_hex(&harmony[1]).h, (base_hue + 180) % 360);
        }
    }

    #[test]
    fn test_harmony_sizes() {
        let base = hex("#10b981");
        let sizes: Vec<usize> = HARMONIES
            .iter()
            .map(|&h| get_color_harmony(&base, h).len())
            .collect();
        assert_eq!(sizes, vec![3, 2, 3, 4, 3]);
    }

    #[test]
    fn test_color_matches() {
        let red = hex("#ff0000");
        let pool = vec![hex("#00fefe"), hex("#0000ff"), hex("#ffffff")];
        assert_eq!(
            generate_color_matches(&red, &pool, ColorHarmony::Complementary),
            vec![hex("#00fefe")]
        );
        // green is too far from everything in the pool, blue is an exact hit
        assert_eq!(
            generate_color_matches(&red, &pool, ColorHarmony::Triadic),
            vec![hex("#0000ff")]
        );
        assert!(generate_color_matches(&red, &[], ColorHarmony::Triadic).is_empty());
    }

    #[test]
    fn test_color_matches_repeat() {
        // one pool color can be the closest match for both neighbors
        let red = hex("#ff0000");
        let pool = vec![hex("#ff4040")];
        assert_eq!(
            generate_color_matches(&red, &pool, ColorHarmony::Analogous),
            vec![hex("#ff4040"), hex("#ff4040")]
        );
    }
}
