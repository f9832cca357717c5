//! This file decides whether two colors "go together". It is not a color-theory model at all:
//! instead it checks a small, hand-curated set of tables, in the same way a stylist's cheat sheet
//! would. Neutrals go with anything, colors from the same family go with each other, and a handful of
//! classic opposites go with each other. Anything not in the tables doesn't match.
//!
//! Lookups compare parsed colors, so `#FFFFFF`, `#ffffff` and `ffffff` are all the same neutral.

use color::HexColor;

/// Whites, blacks and grays that are considered compatible with every other color.
pub const NEUTRAL_COLORS: [HexColor; 7] = [
    HexColor::from_u32(0xffffff),
    HexColor::from_u32(0xf8fafc),
    HexColor::from_u32(0xf1f5f9),
    HexColor::from_u32(0xe2e8f0),
    HexColor::from_u32(0x000000),
    HexColor::from_u32(0x1f2937),
    HexColor::from_u32(0x6b7280),
];

/// A group of closely-related colors that always work together.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorFamily {
    /// Blues and cyans.
    Blue,
    /// Greens and limes.
    Green,
    /// Oranges, ambers and yellows.
    OrangeYellow,
    /// Violets, purples and pinks.
    PurplePink,
    /// Browns and rusts.
    Brown,
}

/// Every family, in the order their tables are checked.
pub static COLOR_FAMILIES: [ColorFamily; 5] = [
    ColorFamily::Blue,
    ColorFamily::Green,
    ColorFamily::OrangeYellow,
    ColorFamily::PurplePink,
    ColorFamily::Brown,
];

// one row per family, in the order of COLOR_FAMILIES
const FAMILY_MEMBERS: [[u32; 4]; 5] = [
    [0x3b82f6, 0x06b6d4, 0x0284c7, 0x0ea5e9],
    [0x10b981, 0x84cc16, 0x22c55e, 0x16a34a],
    [0xf97316, 0xf59e0b, 0xeab308, 0xfacc15],
    [0x8b5cf6, 0xa855f7, 0xd946ef, 0xec4899],
    [0x7c2d12, 0x92400e, 0xa16207, 0xb45309],
];

// blue & orange, green & red, purple & yellow, cyan & orange, lime & purple
const COMPLEMENTARY_PAIRS: [(u32, u32); 5] = [
    (0x3b82f6, 0xf97316),
    (0x10b981, 0xf43f5e),
    (0x8b5cf6, 0xf59e0b),
    (0x06b6d4, 0xf97316),
    (0x84cc16, 0x8b5cf6),
];

impl ColorFamily {
    /// The four colors making up this family.
    pub fn members(self) -> [HexColor; 4] {
        let row = FAMILY_MEMBERS[self as usize];
        [
            HexColor::from_u32(row[0]),
            HexColor::from_u32(row[1]),
            HexColor::from_u32(row[2]),
            HexColor::from_u32(row[3]),
        ]
    }

    /// Whether `color` is one of this family's members.
    pub fn contains(self, color: &HexColor) -> bool {
        FAMILY_MEMBERS[self as usize].contains(&color.to_u32())
    }

    /// The family a color belongs to, if any. The tables don't overlap, so there is at most one.
    pub fn of(color: &HexColor) -> Option<ColorFamily> {
        COLOR_FAMILIES.iter().cloned().find(|family| family.contains(color))
    }
}

/// Whether a color is one of the [`NEUTRAL_COLORS`].
pub fn is_neutral(color: &HexColor) -> bool {
    NEUTRAL_COLORS.contains(color)
}

/// Whether two colors work together: true if either is neutral, if both come from the same
/// [`ColorFamily`], or if they form one of the classic complementary pairs (in either order).
/// # Example
/// ```
/// # use swatch::color::HexColor;
/// # use swatch::complement::are_colors_complementary;
/// let white = HexColor::from_hex_code("#ffffff").unwrap();
/// let blue = HexColor::from_hex_code("#3b82f6").unwrap();
/// let orange = HexColor::from_hex_code("#f97316").unwrap();
/// let green = HexColor::from_hex_code("#10b981").unwrap();
/// assert!(are_colors_complementary(&white, &green));
/// assert!(are_colors_complementary(&orange, &blue));
/// assert!(!are_colors_complementary(&blue, &green));
/// ```
pub fn are_colors_complementary(a: &HexColor, b: &HexColor) -> bool {
    if is_neutral(a) || is_neutral(b) {
        return true;
    }
    if COLOR_FAMILIES
        .iter()
        .any(|family| family.contains(a) && family.contains(b))
    {
        return true;
    }
    let (a, b) = (a.to_u32(), b.to_u32());
    COMPLEMENTARY_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn hex(code: &str) -> HexColor {
        HexColor::from_hex_code(code).unwrap()
    }

    #[test]
    fn test_neutrals_match_anything() {
        for neutral in NEUTRAL_COLORS.iter() {
            for other in &["#123456", "#f43f5e", "#abcdef", "#000001"] {
                assert!(are_colors_complementary(neutral, &hex(other)));
                assert!(are_colors_complementary(&hex(other), neutral));
            }
        }
        // case doesn't matter once parsed
        assert!(are_colors_complementary(&hex("#FFFFFF"), &hex("#123456")));
    }

    #[test]
    fn test_families() {
        assert!(are_colors_complementary(&hex("#3b82f6"), &hex("#0ea5e9")));
        assert!(are_colors_complementary(&hex("#92400e"), &hex("#7c2d12")));
        assert!(!are_colors_complementary(&hex("#92400e"), &hex("#3b82f6")));
        assert_eq!(ColorFamily::of(&hex("#d946ef")), Some(ColorFamily::PurplePink));
        assert_eq!(ColorFamily::of(&hex("#d946ee")), None);
        assert_eq!(ColorFamily::Green.members()[1], hex("#84cc16"));
    }

    #[test]
    fn test_pairs() {
        assert!(are_colors_complementary(&hex("#f43f5e"), &hex("#10b981")));
        assert!(are_colors_complementary(&hex("#84cc16"), &hex("#8b5cf6")));
        // the rose isn't in any family, so it only matches its partner
        assert!(!are_colors_complementary(&hex("#f43f5e"), &hex("#22c55e")));
        // near misses don't count: the tables are exact
        assert!(!are_colors_complementary(&hex("#3b82f7"), &hex("#f97316")));
    }
}
