//! This module brings the most common Swatch functionality under a single namespace, to prevent
//! excessive imports: the color types, the wardrobe model, the recommender and its settings, and
//! the free functions for matching and scoring. The body-type tables and the individual palette
//! constants are left in their own modules.

pub use body::{get_style_recommendations, BodyMeasurements, Gender, StyleRecommendation};
pub use color::{color_distance, HexColor};
pub use complement::are_colors_complementary;
pub use config::RecommendationSettings;
pub use error::{Result, WardrobeError};
pub use harmony::{generate_color_matches, get_color_harmony, ColorHarmony};
pub use hslcolor::{hex_to_hsl, hsl_to_hex, HSLColor};
pub use recommend::{items_in_palette, styles_for_occasion, Recommender};
pub use scoring::{calculate_outfit_match_score, get_item_matches, ItemMatch};
pub use assembler::generate_outfit_from_item;
pub use season::{
    determine_color_season, get_color_palette_for_season, get_recommended_color_palette,
    ColorPalette, ColorSeason, EyeColor, HairColor, SkinTone,
};
pub use wardrobe::{
    ItemCategory, ItemStyle, MissingItem, OutfitRecommendation, Season, WardrobeItem,
    WardrobeSource,
};
pub use weather::{Conditions, Weather};
