//! Scores how well items go together. Two items "go together" when some color of one is
//! complementary to some color of the other, in the sense of
//! [`are_colors_complementary`](../complement/fn.are_colors_complementary.html). Items of the same
//! category are never compared against each other, because they never share an outfit.

use std::borrow::Borrow;
use std::cmp::Ordering;

use complement::are_colors_complementary;
use wardrobe::WardrobeItem;

/// Whether any color of `a` complements any color of `b`.
fn any_colors_complementary(a: &WardrobeItem, b: &WardrobeItem) -> bool {
    a.colors
        .iter()
        .any(|c1| b.colors.iter().any(|c2| are_colors_complementary(c1, c2)))
}

/// Scores a set of items from 0 to 1 as the fraction of cross-category pairs whose colors work
/// together. Fewer than two items, or a set where every item shares a category, scores 1.
///
/// # Example
///
/// ```
/// # use swatch::prelude::*;
/// let shirt = WardrobeItem::new("1", "White Shirt", ItemCategory::Top, ItemStyle::Business,
///                               vec!["#ffffff".parse().unwrap()]);
/// let chinos = WardrobeItem::new("2", "Navy Chinos", ItemCategory::Bottom, ItemStyle::Business,
///                                vec!["#1f2937".parse().unwrap()]);
/// assert_eq!(calculate_outfit_match_score(&[shirt, chinos]), 1.0);
/// ```
pub fn calculate_outfit_match_score<T: Borrow<WardrobeItem>>(items: &[T]) -> f64 {
    if items.len() < 2 {
        return 1.0;
    }
    let mut total_pairs = 0;
    let mut matching_pairs = 0;
    for (i, first) in items.iter().enumerate() {
        let first = first.borrow();
        for second in items[i + 1..].iter().map(Borrow::borrow) {
            if first.category == second.category {
                continue;
            }
            total_pairs += 1;
            if any_colors_complementary(first, second) {
                matching_pairs += 1;
            }
        }
    }
    if total_pairs == 0 {
        1.0
    } else {
        f64::from(matching_pairs) / f64::from(total_pairs)
    }
}

/// A wardrobe item paired with how well it goes with some other item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMatch<'a> {
    /// The candidate.
    pub item: &'a WardrobeItem,
    /// The fraction of color pairs between the two items that are complementary.
    pub score: f64,
}

/// Ranks every item in `wardrobe` that could be worn with `item`, best first. The item itself and
/// anything in its category are left out. Equal scores keep their wardrobe order.
pub fn get_item_matches<'a, I>(item: &WardrobeItem, wardrobe: I) -> Vec<ItemMatch<'a>>
where
    I: IntoIterator<Item = &'a WardrobeItem>,
{
    let mut matches: Vec<ItemMatch<'a>> = wardrobe
        .into_iter()
        .filter(|candidate| candidate.id != item.id && candidate.category != item.category)
        .map(|candidate| {
            let total = item.colors.len() * candidate.colors.len();
            let matching = item
                .colors
                .iter()
                .flat_map(|c1| candidate.colors.iter().map(move |c2| (c1, c2)))
                .filter(|&(c1, c2)| are_colors_complementary(c1, c2))
                .count();
            let score = if total > 0 {
                matching as f64 / total as f64
            } else {
                0.0
            };
            ItemMatch {
                item: candidate,
                score,
            }
        })
        .collect();
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::HexColor;
    use wardrobe::{ItemCategory, ItemStyle};

    fn item(id: &str, category: ItemCategory, colors: &[u32]) -> WardrobeItem {
        let colors = colors.iter().map(|&c| HexColor::from_u32(c)).collect();
        WardrobeItem::new(id, id, category, ItemStyle::Casual, colors)
    }

    #[test]
    fn test_trivial_scores() {
        let empty: Vec<WardrobeItem> = vec![];
        assert_eq!(calculate_outfit_match_score(&empty), 1.0);
        let tee = item("tee", ItemCategory::Top, &[0xff0000]);
        assert_eq!(calculate_outfit_match_score(&[tee.clone()]), 1.0);
        let other_tee = item("tee2", ItemCategory::Top, &[0x00ff00]);
        assert_eq!(calculate_outfit_match_score(&[tee, other_tee]), 1.0);
    }

    #[test]
    fn test_partial_score() {
        // The neutral pairs match; red and green don't.
        let outfit = vec![
            item("shirt", ItemCategory::Top, &[0xff0000]),
            item("pants", ItemCategory::Bottom, &[0x00ff00]),
            item("shoes", ItemCategory::Footwear, &[0x000000]),
        ];
        assert!(approx_eq!(
            f64,
            calculate_outfit_match_score(&outfit),
            2.0 / 3.0,
            epsilon = 1e-12
        ));
        let refs: Vec<&WardrobeItem> = outfit.iter().collect();
        assert_eq!(
            calculate_outfit_match_score(&refs),
            calculate_outfit_match_score(&outfit)
        );
    }

    #[test]
    fn test_same_category_pairs_are_skipped() {
        let outfit = vec![
            item("shirt", ItemCategory::Top, &[0xff0000]),
            item("tee", ItemCategory::Top, &[0x00ff00]),
            item("pants", ItemCategory::Bottom, &[0xffffff]),
        ];
        assert_eq!(calculate_outfit_match_score(&outfit), 1.0);
    }

    #[test]
    fn test_item_matches() {
        let seed = item("seed", ItemCategory::Top, &[0x3b82f6, 0xff0000]);
        let wardrobe = vec![
            seed.clone(),
            item("red", ItemCategory::Bottom, &[0xff0000]),
            item("orange", ItemCategory::Bottom, &[0xf97316]),
            item("blank", ItemCategory::Footwear, &[]),
            item("other-top", ItemCategory::Top, &[0xffffff]),
            item("white", ItemCategory::Footwear, &[0xffffff]),
        ];
        let matches = get_item_matches(&seed, &wardrobe);
        let ids: Vec<&str> = matches.iter().map(|m| m.item.id.as_str()).collect();
        assert_eq!(ids, vec!["white", "orange", "red", "blank"]);
        let scores: Vec<f64> = matches.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![1.0, 0.5, 0.0, 0.0]);
    }
}
