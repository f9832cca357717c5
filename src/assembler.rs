//! Builds a single outfit around one chosen item by picking the best-matching piece of each
//! remaining category from the wardrobe.

use scoring::{get_item_matches, ItemMatch};
use wardrobe::{ItemCategory, WardrobeItem};

/// The categories a complete outfit fills, in the order they are filled.
pub static DESIRED_CATEGORIES: [ItemCategory; 4] = [
    ItemCategory::Top,
    ItemCategory::Bottom,
    ItemCategory::Footwear,
    ItemCategory::Outerwear,
];

/// An accessory joins an outfit only when it matches the seed item better than this.
pub const ACCESSORY_MATCH_THRESHOLD: f64 = 0.7;

/// The categories still to fill once `seed` is in the outfit. A dress covers both top and bottom.
fn categories_to_fill(seed: &WardrobeItem) -> Vec<ItemCategory> {
    DESIRED_CATEGORIES
        .iter()
        .cloned()
        .filter(|&category| category != seed.category)
        .filter(|&category| {
            seed.category != ItemCategory::Dress
                || (category != ItemCategory::Top && category != ItemCategory::Bottom)
        })
        .collect()
}

fn best_in<'a>(matches: &[ItemMatch<'a>], category: ItemCategory) -> Option<ItemMatch<'a>> {
    matches
        .iter()
        .find(|m| m.item.category == category)
        .cloned()
}

/// Builds an outfit around `seed`. The seed comes first, followed by the best match from each of
/// top, bottom, footwear and outerwear that the wardrobe has and the seed doesn't already cover,
/// in that order. The best accessory is added last if it scores above
/// [`ACCESSORY_MATCH_THRESHOLD`].
///
/// `wardrobe` may include the seed itself; it's skipped.
pub fn generate_outfit_from_item<'a, I>(seed: &'a WardrobeItem, wardrobe: I) -> Vec<&'a WardrobeItem>
where
    I: IntoIterator<Item = &'a WardrobeItem>,
{
    let matches = get_item_matches(seed, wardrobe);
    let mut outfit = vec![seed];
    for category in categories_to_fill(seed) {
        if let Some(best) = best_in(&matches, category) {
            outfit.push(best.item);
        }
    }
    if let Some(accessory) = best_in(&matches, ItemCategory::Accessory) {
        if accessory.score > ACCESSORY_MATCH_THRESHOLD {
            outfit.push(accessory.item);
        }
    }
    outfit
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::HexColor;
    use wardrobe::ItemStyle;

    fn item(id: &str, category: ItemCategory, color: u32) -> WardrobeItem {
        WardrobeItem::new(
            id,
            id,
            category,
            ItemStyle::Casual,
            vec![HexColor::from_u32(color)],
        )
    }

    fn ids(outfit: &[&WardrobeItem]) -> Vec<String> {
        outfit.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_outfit_from_top() {
        let seed = item("shirt", ItemCategory::Top, 0x3b82f6);
        let wardrobe = vec![
            seed.clone(),
            item("red-skirt", ItemCategory::Bottom, 0xff0000),
            item("chinos", ItemCategory::Bottom, 0x1f2937),
            item("sneakers", ItemCategory::Footwear, 0xffffff),
            item("scarf", ItemCategory::Accessory, 0xf97316),
            item("other-shirt", ItemCategory::Top, 0xffffff),
        ];
        let outfit = generate_outfit_from_item(&seed, &wardrobe);
        assert_eq!(ids(&outfit), vec!["shirt", "chinos", "sneakers", "scarf"]);
    }

    #[test]
    fn test_dress_skips_top_and_bottom() {
        let seed = item("dress", ItemCategory::Dress, 0x8b5cf6);
        let wardrobe = vec![
            item("tee", ItemCategory::Top, 0xffffff),
            item("jeans", ItemCategory::Bottom, 0xffffff),
            item("heels", ItemCategory::Footwear, 0x000000),
            item("coat", ItemCategory::Outerwear, 0xa855f7),
        ];
        let outfit = generate_outfit_from_item(&seed, &wardrobe);
        assert_eq!(ids(&outfit), vec!["dress", "heels", "coat"]);
    }

    #[test]
    fn test_weak_accessory_left_out() {
        let seed = item("boots", ItemCategory::Footwear, 0xff0000);
        let wardrobe = vec![
            item("belt", ItemCategory::Accessory, 0x00ff00),
            item("jacket", ItemCategory::Outerwear, 0x00ff00),
        ];
        let outfit = generate_outfit_from_item(&seed, &wardrobe);
        // The jacket is the only outerwear, so it's used even though it scores 0.
        assert_eq!(ids(&outfit), vec!["boots", "jacket"]);
    }
}
