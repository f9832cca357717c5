//! This module implements a simplified form of seasonal color analysis: a person's natural coloring
//! (skin tone, hair color and eye color) is sorted into one of four "seasons", each of which comes
//! with a fixed palette of flattering colors. The rules are a short cascade of conjunctive checks,
//! not a calibrated taxonomy.
//!
//! There is also a second, unrelated palette mechanism, [`get_recommended_color_palette`], which
//! looks up a flat five-color list for a handful of exact attribute combinations.

use std::collections::HashMap;
use std::fmt;

use color::HexColor;

/// A natural skin tone, from lightest to darkest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum SkinTone {
    Fair,
    Light,
    Medium,
    Olive,
    Brown,
    Dark,
}

/// A natural hair color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum HairColor {
    Black,
    Brown,
    Blonde,
    Red,
    Gray,
}

/// A natural eye color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum EyeColor {
    Brown,
    Blue,
    Green,
    Hazel,
    Gray,
    Amber,
    Black,
}

impl SkinTone {
    /// The lowercase name used in serialized data and palette keys.
    pub fn as_str(self) -> &'static str {
        match self {
            SkinTone::Fair => "fair",
            SkinTone::Light => "light",
            SkinTone::Medium => "medium",
            SkinTone::Olive => "olive",
            SkinTone::Brown => "brown",
            SkinTone::Dark => "dark",
        }
    }
}

impl HairColor {
    /// The lowercase name used in serialized data and palette keys.
    pub fn as_str(self) -> &'static str {
        match self {
            HairColor::Black => "black",
            HairColor::Brown => "brown",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
            HairColor::Gray => "gray",
        }
    }
}

impl EyeColor {
    /// The lowercase name used in serialized data and palette keys.
    pub fn as_str(self) -> &'static str {
        match self {
            EyeColor::Brown => "brown",
            EyeColor::Blue => "blue",
            EyeColor::Green => "green",
            EyeColor::Hazel => "hazel",
            EyeColor::Gray => "gray",
            EyeColor::Amber => "amber",
            EyeColor::Black => "black",
        }
    }
}

/// The four seasonal archetypes of natural coloring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSeason {
    /// Warm, clear and light.
    Spring,
    /// Cool, soft and muted.
    Summer,
    /// Warm, rich and golden.
    Autumn,
    /// Cool and high-contrast.
    Winter,
}

impl ColorSeason {
    /// The lowercase name used in serialized data.
    pub fn as_str(self) -> &'static str {
        match self {
            ColorSeason::Spring => "spring",
            ColorSeason::Summer => "summer",
            ColorSeason::Autumn => "autumn",
            ColorSeason::Winter => "winter",
        }
    }

    /// Looks a season up by its name, ignoring case. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<ColorSeason> {
        match name.trim().to_lowercase().as_str() {
            "spring" => Some(ColorSeason::Spring),
            "summer" => Some(ColorSeason::Summer),
            "autumn" => Some(ColorSeason::Autumn),
            "winter" => Some(ColorSeason::Winter),
            _ => None,
        }
    }
}

impl fmt::Display for ColorSeason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            ColorSeason::Spring => "Spring",
            ColorSeason::Summer => "Summer",
            ColorSeason::Autumn => "Autumn",
            ColorSeason::Winter => "Winter",
        };
        write!(f, "{}", name)
    }
}

/// Sorts a person's coloring into a season. The rules are checked in order and the first match
/// wins:
///
/// 1. **Winter**: fair skin with black or brown hair, or dark skin with black or brown eyes.
/// 2. **Spring**: fair or light skin, blonde or red hair, blue or green eyes.
/// 3. **Summer**: light or medium skin, blonde or brown hair, blue or gray eyes.
/// 4. **Autumn**: medium, olive or brown skin, brown or red hair, brown, hazel or amber eyes.
///
/// If nothing matches, skin tone alone decides: fair and light are Summer, medium and olive are
/// Autumn, brown and dark are Winter.
/// # Example
/// ```
/// # use swatch::season::*;
/// let season = determine_color_season(SkinTone::Fair, HairColor::Blonde, EyeColor::Blue);
/// assert_eq!(season, ColorSeason::Spring);
/// ```
pub fn determine_color_season(skin: SkinTone, hair: HairColor, eye: EyeColor) -> ColorSeason {
    use self::EyeColor as E;
    use self::HairColor as H;
    use self::SkinTone as S;

    let winter = (skin == S::Fair && (hair == H::Black || hair == H::Brown))
        || (skin == S::Dark && (eye == E::Black || eye == E::Brown));
    if winter {
        return ColorSeason::Winter;
    }

    let spring = (skin == S::Fair || skin == S::Light)
        && (hair == H::Blonde || hair == H::Red)
        && (eye == E::Blue || eye == E::Green);
    if spring {
        return ColorSeason::Spring;
    }

    let summer = (skin == S::Light || skin == S::Medium)
        && (hair == H::Blonde || hair == H::Brown)
        && (eye == E::Blue || eye == E::Gray);
    if summer {
        return ColorSeason::Summer;
    }

    let autumn = (skin == S::Medium || skin == S::Olive || skin == S::Brown)
        && (hair == H::Brown || hair == H::Red)
        && (eye == E::Brown || eye == E::Hazel || eye == E::Amber);
    if autumn {
        return ColorSeason::Autumn;
    }

    match skin {
        S::Fair | S::Light => ColorSeason::Summer,
        S::Medium | S::Olive => ColorSeason::Autumn,
        S::Brown | S::Dark => ColorSeason::Winter,
    }
}

/// A season's palette, split into three tiers. Palettes are fixed tables: there is exactly one per
/// season and they are never derived per person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    /// The season this palette belongs to.
    pub season: ColorSeason,
    /// The main colors to build outfits from.
    pub primary_colors: &'static [HexColor],
    /// Background colors that anchor the primaries.
    pub neutral_colors: &'static [HexColor],
    /// Small doses of contrast.
    pub accent_colors: &'static [HexColor],
}

const fn c(code: u32) -> HexColor {
    HexColor::from_u32(code)
}

static SPRING_PALETTE: ColorPalette = ColorPalette {
    season: ColorSeason::Spring,
    primary_colors: &[c(0xff9e2c), c(0x4dbd74), c(0xf2545b), c(0xffcf40), c(0x93d2c2)],
    neutral_colors: &[c(0xe8d9a9), c(0xe6e6fa), c(0xf5f5dc), c(0xfffff0)],
    accent_colors: &[c(0xe34234), c(0xff8c69), c(0x00bfff), c(0x3cb371)],
};

static SUMMER_PALETTE: ColorPalette = ColorPalette {
    season: ColorSeason::Summer,
    primary_colors: &[c(0x7eb0d5), c(0x8fbbb9), c(0x9a8fb8), c(0xd189b9), c(0xc0a9bd)],
    neutral_colors: &[c(0xf0f0f0), c(0xd6e2e9), c(0xe6e6e6), c(0xf5f5f5)],
    accent_colors: &[c(0xcf71af), c(0x8673a1), c(0xa6bcde), c(0x5da9a7)],
};

static AUTUMN_PALETTE: ColorPalette = ColorPalette {
    season: ColorSeason::Autumn,
    primary_colors: &[c(0xa65c32), c(0x9b7653), c(0x806b3c), c(0x665d4e), c(0x8b5a2b)],
    neutral_colors: &[c(0xf5deb3), c(0xd3c4a2), c(0xd2b48c), c(0xc4b298)],
    accent_colors: &[c(0xd2691e), c(0xcd5c5c), c(0x556b2f), c(0x8b4513)],
};

static WINTER_PALETTE: ColorPalette = ColorPalette {
    season: ColorSeason::Winter,
    primary_colors: &[c(0x0000ff), c(0x800080), c(0xff0000), c(0x006400), c(0x000080)],
    neutral_colors: &[c(0xffffff), c(0x000000), c(0x808080), c(0xf0f8ff)],
    accent_colors: &[c(0xff00ff), c(0x00ffff), c(0xffff00), c(0xff1493)],
};

impl ColorPalette {
    /// The palette for a season name given as text. Unknown names get the Autumn palette.
    pub fn for_season_name(name: &str) -> &'static ColorPalette {
        get_color_palette_for_season(ColorSeason::from_name(name).unwrap_or(ColorSeason::Autumn))
    }

    /// Every color in the palette: primaries, then neutrals, then accents.
    pub fn all_colors(&self) -> Vec<HexColor> {
        self.primary_colors
            .iter()
            .chain(self.neutral_colors)
            .chain(self.accent_colors)
            .cloned()
            .collect()
    }
}

/// Gets the fixed palette for a season.
pub fn get_color_palette_for_season(season: ColorSeason) -> &'static ColorPalette {
    match season {
        ColorSeason::Spring => &SPRING_PALETTE,
        ColorSeason::Summer => &SUMMER_PALETTE,
        ColorSeason::Autumn => &AUTUMN_PALETTE,
        ColorSeason::Winter => &WINTER_PALETTE,
    }
}

const DEFAULT_RECOMMENDED_PALETTE: [HexColor; 5] =
    [c(0x3b82f6), c(0x10b981), c(0xf59e0b), c(0x6b7280), c(0x1f2937)];

lazy_static! {
    // keyed by "{skin}-{hair}-{eye}"
    static ref RECOMMENDED_PALETTES: HashMap<&'static str, [HexColor; 5]> = hashmap! {
        "medium-brown-brown" => [c(0x3b82f6), c(0x10b981), c(0xf59e0b), c(0x6b7280), c(0x1f2937)],
        "fair-blonde-blue" => [c(0x3b82f6), c(0x06b6d4), c(0x8b5cf6), c(0xf43f5e), c(0x0f172a)],
        "olive-black-brown" => [c(0xf97316), c(0x0891b2), c(0xa16207), c(0x84cc16), c(0x7c2d12)],
        "default" => DEFAULT_RECOMMENDED_PALETTE,
    };
}

/// Looks up the flat five-color palette recommended for an exact combination of skin, hair and
/// eye color. Only a few combinations have their own entry; everything else gets the default
/// palette. This has nothing to do with [`ColorSeason`].
pub fn get_recommended_color_palette(skin: SkinTone, hair: HairColor, eye: EyeColor) -> Vec<HexColor> {
    let key = format!("{}-{}-{}", skin.as_str(), hair.as_str(), eye.as_str());
    RECOMMENDED_PALETTES
        .get(key.as_str())
        .or_else(|| RECOMMENDED_PALETTES.get("default"))
        .unwrap_or(&DEFAULT_RECOMMENDED_PALETTE)
        .to_vec()
}
