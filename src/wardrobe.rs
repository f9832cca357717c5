//! This module holds the wardrobe data model: the clothing items a user owns, the categories and
//! styles they are sorted by, the seasons they're worn in, and the outfit recommendations built
//! from them. It also defines [`WardrobeSource`], the one interface Swatch needs from whatever
//! stores a user's wardrobe.
//!
//! Field and variant names serialize the way web clients expect them: `camelCase` fields and
//! lowercase or kebab-case variants, such as `"all-year"`.

use std::fmt;

use chrono::Datelike;

use color::HexColor;

/// What kind of garment an item is. An outfit holds at most one item of each category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ItemCategory {
    Top,
    Bottom,
    Footwear,
    Outerwear,
    Accessory,
    Dress,
    Underwear,
    Loungewear,
    Sportswear,
    Formal,
}

/// Every category, in declaration order.
pub static ITEM_CATEGORIES: [ItemCategory; 10] = [
    ItemCategory::Top,
    ItemCategory::Bottom,
    ItemCategory::Footwear,
    ItemCategory::Outerwear,
    ItemCategory::Accessory,
    ItemCategory::Dress,
    ItemCategory::Underwear,
    ItemCategory::Loungewear,
    ItemCategory::Sportswear,
    ItemCategory::Formal,
];

impl ItemCategory {
    /// The lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemCategory::Top => "top",
            ItemCategory::Bottom => "bottom",
            ItemCategory::Footwear => "footwear",
            ItemCategory::Outerwear => "outerwear",
            ItemCategory::Accessory => "accessory",
            ItemCategory::Dress => "dress",
            ItemCategory::Underwear => "underwear",
            ItemCategory::Loungewear => "loungewear",
            ItemCategory::Sportswear => "sportswear",
            ItemCategory::Formal => "formal",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The overall style of an item.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ItemStyle {
    Casual,
    Formal,
    Business,
    Sporty,
    Streetwear,
    Vintage,
    Boho,
    Preppy,
    Minimal,
    Glam,
}

impl ItemStyle {
    /// The lowercase name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStyle::Casual => "casual",
            ItemStyle::Formal => "formal",
            ItemStyle::Business => "business",
            ItemStyle::Sporty => "sporty",
            ItemStyle::Streetwear => "streetwear",
            ItemStyle::Vintage => "vintage",
            ItemStyle::Boho => "boho",
            ItemStyle::Preppy => "preppy",
            ItemStyle::Minimal => "minimal",
            ItemStyle::Glam => "glam",
        }
    }
}

impl fmt::Display for ItemStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A season of the calendar year, used to tag when an item can be worn. Not to be confused with
/// [`ColorSeason`](../season/enum.ColorSeason.html), which describes a person's coloring.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    /// March through May.
    Spring,
    /// June through August.
    Summer,
    /// September through November.
    Fall,
    /// December through February.
    Winter,
    /// Wearable any time of year.
    AllYear,
}

impl Season {
    /// The calendar season for a month numbered 1 (January) to 12 (December). Anything outside
    /// March to November is Winter.
    pub fn for_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    /// The calendar season a date falls in.
    pub fn for_date<D: Datelike>(date: &D) -> Season {
        Season::for_month(date.month())
    }

    /// The kebab-case name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::AllYear => "all-year",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
            Season::AllYear => "All Year",
        };
        write!(f, "{}", name)
    }
}

/// A single piece of clothing in someone's wardrobe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    /// Unique among all items.
    pub id: String,
    /// The owner.
    #[serde(default)]
    pub user_id: String,
    /// A display name, such as "White Oxford Shirt".
    pub name: String,
    /// What kind of garment this is.
    pub category: ItemCategory,
    /// A finer-grained kind, such as "t-shirt".
    #[serde(default)]
    pub subcategory: Option<String>,
    /// What it's made of.
    #[serde(default)]
    pub fabric: Option<String>,
    /// Its overall style.
    pub style: ItemStyle,
    /// The colors of the item. The first one is the dominant color.
    pub colors: Vec<HexColor>,
    /// Where a photo of it lives, if anywhere.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Whether the owner starred it.
    #[serde(default)]
    pub is_favorite: bool,
    /// When it can be worn.
    #[serde(default)]
    pub season: Vec<Season>,
}

impl WardrobeItem {
    /// Creates an item with no owner, no season tags and none of the optional details.
    pub fn new(
        id: &str,
        name: &str,
        category: ItemCategory,
        style: ItemStyle,
        colors: Vec<HexColor>,
    ) -> WardrobeItem {
        WardrobeItem {
            id: id.to_string(),
            user_id: String::new(),
            name: name.to_string(),
            category,
            subcategory: None,
            fabric: None,
            style,
            colors,
            image_url: None,
            is_favorite: false,
            season: vec![],
        }
    }

    /// Replaces the item's season tags.
    pub fn with_seasons(mut self, seasons: &[Season]) -> WardrobeItem {
        self.season = seasons.to_vec();
        self
    }

    /// Sets the item's owner.
    pub fn owned_by(mut self, user_id: &str) -> WardrobeItem {
        self.user_id = user_id.to_string();
        self
    }

    /// The dominant color, if the item has any colors at all.
    pub fn primary_color(&self) -> Option<&HexColor> {
        self.colors.first()
    }

    /// Whether the item is tagged for `season` or for all year.
    pub fn fits_season(&self, season: Season) -> bool {
        self.season.contains(&season) || self.season.contains(&Season::AllYear)
    }
}

/// A placeholder for a category an outfit still needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingItem {
    /// The category the outfit lacks.
    pub category: ItemCategory,
    /// A suggestion to show the user.
    pub description: String,
}

/// An outfit suggested by the recommender. Recommendations aren't stored anywhere; saving one is
/// up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    /// Identifies the recommendation within a session.
    pub id: String,
    /// A display name.
    pub name: String,
    /// The items making up the outfit, at most one per category.
    pub items: Vec<WardrobeItem>,
    /// Categories the outfit would need to be complete.
    #[serde(default)]
    pub missing_items: Vec<MissingItem>,
    /// What the outfit is for, such as "Work" or "Casual".
    #[serde(default)]
    pub occasion: Option<String>,
    /// How confident the recommender is, from 0 to 1.
    pub confidence: f64,
}

/// Anything that can list the items in a user's wardrobe: a database, a web service, or just a
/// vector of items.
pub trait WardrobeSource {
    /// Every item belonging to `user_id`.
    fn list_items(&self, user_id: &str) -> Vec<WardrobeItem>;
}

impl WardrobeSource for [WardrobeItem] {
    fn list_items(&self, user_id: &str) -> Vec<WardrobeItem> {
        self.iter()
            .filter(|item| item.user_id == user_id)
            .cloned()
            .collect()
    }
}

impl WardrobeSource for Vec<WardrobeItem> {
    fn list_items(&self, user_id: &str) -> Vec<WardrobeItem> {
        self.as_slice().list_items(user_id)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use chrono::NaiveDate;
    use toml;

    #[test]
    fn test_season_for_month() {
        let seasons: Vec<Season> = (1..13).map(Season::for_month).collect();
        assert_eq!(
            seasons,
            vec![
                Season::Winter, Season::Winter, Season::Spring, Season::Spring, Season::Spring,
                Season::Summer, Season::Summer, Season::Summer, Season::Fall, Season::Fall,
                Season::Fall, Season::Winter,
            ]
        );
        let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        assert_eq!(Season::for_date(&date), Season::Fall);
    }

    #[test]
    fn test_fits_season() {
        let white = HexColor::from_u32(0xffffff);
        let tee = WardrobeItem::new("1", "Tee", ItemCategory::Top, ItemStyle::Casual, vec![white])
            .with_seasons(&[Season::Summer]);
        assert!(tee.fits_season(Season::Summer));
        assert!(!tee.fits_season(Season::Winter));
        let jeans = WardrobeItem::new("2", "Jeans", ItemCategory::Bottom, ItemStyle::Casual, vec![])
            .with_seasons(&[Season::AllYear]);
        assert!(jeans.fits_season(Season::Winter));
        assert_eq!(jeans.primary_color(), None);
    }

    #[test]
    fn test_source_filters_by_owner() {
        let wardrobe = vec![
            WardrobeItem::new("1", "Tee", ItemCategory::Top, ItemStyle::Casual, vec![]).owned_by("ana"),
            WardrobeItem::new("2", "Boots", ItemCategory::Footwear, ItemStyle::Casual, vec![])
                .owned_by("ben"),
        ];
        let items = wardrobe.list_items("ana");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "1");
        assert!(wardrobe.list_items("cleo").is_empty());
    }

    #[test]
    fn test_deserialize_item() {
        let item: WardrobeItem = toml::from_str(
            r##"
            id = "item-7"
            userId = "ana"
            name = "Navy Chinos"
            category = "bottom"
            style = "business"
            colors = ["#1F2937"]
            season = ["fall", "all-year"]
            "##,
        )
        .unwrap();
        assert_eq!(item.category, ItemCategory::Bottom);
        assert_eq!(item.colors, vec![HexColor::from_u32(0x1f2937)]);
        assert_eq!(item.season, vec![Season::Fall, Season::AllYear]);
        assert!(!item.is_favorite);

        let bad: Result<WardrobeItem, _> = toml::from_str(
            r##"
            id = "item-8"
            name = "Mystery"
            category = "top"
            style = "casual"
            colors = ["#12345"]
            "##,
        );
        assert!(bad.is_err());
    }
}
