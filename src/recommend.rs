//! The recommendation engine. A [`Recommender`] turns a wardrobe into outfit suggestions: for the
//! current season, around a chosen item, for an occasion, for a season or style, or (in the
//! [`weather`](../weather/index.html) module) for the day's weather.
//!
//! Everything here is a function of its inputs. The current date is passed in as any
//! [`chrono::Datelike`], and the only source of randomness is the [`rand::Rng`] the recommender
//! owns, so seeding it makes every result reproducible.

use chrono::Datelike;
use num;
use rand::Rng;

use assembler::generate_outfit_from_item;
use color::HexColor;
use config::RecommendationSettings;
use error::{Result, WardrobeError};
use harmony::{generate_color_matches, ColorHarmony};
use scoring::calculate_outfit_match_score;
use wardrobe::{
    ItemCategory, ItemStyle, MissingItem, OutfitRecommendation, Season, WardrobeItem,
    WardrobeSource, ITEM_CATEGORIES,
};

/// The styles suited to an occasion. Work, business and office call for formal or business
/// clothes; casual, everyday and weekend for casual or streetwear; party and evening for glam or
/// formal. Any other occasion gets casual clothes. Case doesn't matter.
pub fn styles_for_occasion(occasion: &str) -> &'static [ItemStyle] {
    match occasion.to_lowercase().as_str() {
        "work" | "business" | "office" => &[ItemStyle::Formal, ItemStyle::Business],
        "casual" | "everyday" | "weekend" => &[ItemStyle::Casual, ItemStyle::Streetwear],
        "party" | "evening" => &[ItemStyle::Glam, ItemStyle::Formal],
        _ => &[ItemStyle::Casual],
    }
}

/// The first `limit` items with at least one color from `palette`, in wardrobe order.
pub fn items_in_palette<'a>(
    palette: &[HexColor],
    wardrobe: &'a [WardrobeItem],
    limit: usize,
) -> Vec<&'a WardrobeItem> {
    wardrobe
        .iter()
        .filter(|item| item.colors.iter().any(|color| palette.contains(color)))
        .take(limit)
        .collect()
}

/// Formal clothes are for work; everything else is casual.
fn occasion_for_style(style: ItemStyle) -> String {
    match style {
        ItemStyle::Formal => "Work".to_string(),
        _ => "Casual".to_string(),
    }
}

/// How many index-paired outfits a variant builds before combinations would start to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PairingLimit {
    /// One outfit per top at most.
    Tops,
    /// No more outfits than the smallest of top, bottom and footwear.
    SmallestCategory,
    /// Exactly as many as asked for, wrapping around every category.
    Wrap,
}

/// Items split into the three categories every basic outfit needs.
struct Buckets<'a> {
    tops: Vec<&'a WardrobeItem>,
    bottoms: Vec<&'a WardrobeItem>,
    footwear: Vec<&'a WardrobeItem>,
}

impl<'a> Buckets<'a> {
    fn sort<I: IntoIterator<Item = &'a WardrobeItem>>(items: I) -> Buckets<'a> {
        let mut buckets = Buckets {
            tops: vec![],
            bottoms: vec![],
            footwear: vec![],
        };
        for item in items {
            match item.category {
                ItemCategory::Top => buckets.tops.push(item),
                ItemCategory::Bottom => buckets.bottoms.push(item),
                ItemCategory::Footwear => buckets.footwear.push(item),
                _ => {}
            }
        }
        buckets
    }

    /// The first of top, bottom and footwear with no items.
    fn missing(&self) -> Option<ItemCategory> {
        if self.tops.is_empty() {
            Some(ItemCategory::Top)
        } else if self.bottoms.is_empty() {
            Some(ItemCategory::Bottom)
        } else if self.footwear.is_empty() {
            Some(ItemCategory::Footwear)
        } else {
            None
        }
    }

    /// How many of `count` outfits to build under `limit`.
    fn outfit_count(&self, count: usize, limit: PairingLimit) -> usize {
        match limit {
            PairingLimit::Tops => count.min(self.tops.len()),
            PairingLimit::SmallestCategory => count
                .min(self.tops.len())
                .min(self.bottoms.len())
                .min(self.footwear.len()),
            PairingLimit::Wrap => count,
        }
    }

    /// The `i`-th combination, wrapping around shorter buckets. Every bucket must be non-empty.
    fn outfit(&self, i: usize) -> Vec<&'a WardrobeItem> {
        vec![
            self.tops[i % self.tops.len()],
            self.bottoms[i % self.bottoms.len()],
            self.footwear[i % self.footwear.len()],
        ]
    }
}

/// Builds outfit recommendations from a wardrobe.
///
/// # Example
///
/// ```
/// # extern crate chrono;
/// # extern crate rand;
/// # extern crate swatch;
/// # use swatch::prelude::*;
/// # use chrono::NaiveDate;
/// # use rand::rngs::StdRng;
/// # use rand::SeedableRng;
/// # fn main() {
/// let white = "#ffffff".parse().unwrap();
/// let wardrobe = vec![
///     WardrobeItem::new("1", "Shirt", ItemCategory::Top, ItemStyle::Business, vec![white])
///         .with_seasons(&[Season::AllYear]),
///     WardrobeItem::new("2", "Chinos", ItemCategory::Bottom, ItemStyle::Business, vec![white])
///         .with_seasons(&[Season::AllYear]),
///     WardrobeItem::new("3", "Loafers", ItemCategory::Footwear, ItemStyle::Business, vec![white])
///         .with_seasons(&[Season::AllYear]),
/// ];
/// let mut recommender = Recommender::new(RecommendationSettings::default(),
///                                        StdRng::seed_from_u64(7)).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
/// let outfits = recommender.generate_recommendations(&wardrobe, Some(2), &today).unwrap();
/// assert_eq!(outfits.len(), 2);
/// # }
/// ```
#[derive(Debug)]
pub struct Recommender<R: Rng> {
    settings: RecommendationSettings,
    rng: R,
    issued: usize,
}

impl<R: Rng> Recommender<R> {
    /// Creates a recommender that draws its random choices from `rng`.
    /// # Errors
    /// Returns `WardrobeError::InvalidSettings` if `settings` fails
    /// [`RecommendationSettings::validate`], so every confidence the recommender hands out stays
    /// within `[0, 1]`.
    pub fn new(settings: RecommendationSettings, rng: R) -> Result<Recommender<R>> {
        settings.validate()?;
        Ok(Recommender {
            settings,
            rng,
            issued: 0,
        })
    }

    /// The settings this recommender was built with.
    pub fn settings(&self) -> &RecommendationSettings {
        &self.settings
    }

    fn next_id(&mut self) -> String {
        self.issued += 1;
        format!("rec-{}", self.issued)
    }

    fn count(&self, count: Option<usize>) -> usize {
        count.unwrap_or(self.settings.default_count)
    }

    /// A uniformly random item, or `None` if there are none.
    pub(crate) fn pick<'a>(&mut self, items: &[&'a WardrobeItem]) -> Option<&'a WardrobeItem> {
        if items.is_empty() {
            None
        } else {
            Some(items[self.rng.random_range(0..items.len())])
        }
    }

    /// Packages items into a recommendation with a fresh id.
    pub(crate) fn recommendation(
        &mut self,
        name: String,
        items: &[&WardrobeItem],
        occasion: String,
        confidence: f64,
    ) -> OutfitRecommendation {
        OutfitRecommendation {
            id: self.next_id(),
            name,
            items: items.iter().map(|&item| item.clone()).collect(),
            missing_items: vec![],
            occasion: Some(occasion),
            confidence,
        }
    }

    /// Recommends `count` outfits (or the configured default) from the items wearable in the
    /// season `today` falls in.
    ///
    /// Outfits are first built around each top and then each bottom, up to
    /// `candidate_multiplier * count` of them, keeping those with enough items and a match score
    /// above the quality floor. If that doesn't produce enough, random top, bottom and footwear
    /// combinations make up the difference regardless of how well they match.
    ///
    /// Fails if the wardrobe has fewer than 2 items, fewer than 2 are in season, or there isn't
    /// at least one top, bottom and pair of footwear in season.
    pub fn generate_recommendations<D: Datelike>(
        &mut self,
        wardrobe: &[WardrobeItem],
        count: Option<usize>,
        today: &D,
    ) -> Result<Vec<OutfitRecommendation>> {
        let count = self.count(count);
        if wardrobe.len() < 2 {
            return Err(WardrobeError::InsufficientWardrobe(
                "Not enough items in wardrobe to generate recommendations".to_string(),
            ));
        }

        let season = Season::for_date(today);
        let seasonal: Vec<&WardrobeItem> = wardrobe
            .iter()
            .filter(|item| item.fits_season(season))
            .collect();
        if seasonal.len() < 2 {
            return Err(WardrobeError::InsufficientWardrobe(format!(
                "Not enough items for {} season",
                season
            )));
        }

        let buckets = Buckets::sort(seasonal.iter().cloned());
        if buckets.missing().is_some() {
            return Err(WardrobeError::InsufficientWardrobe(
                "Need at least one top, bottom, and footwear item".to_string(),
            ));
        }

        let mut recommendations = vec![];
        let max_candidates = count.saturating_mul(self.settings.candidate_multiplier);
        let bases: Vec<&WardrobeItem> = buckets
            .tops
            .iter()
            .chain(buckets.bottoms.iter())
            .cloned()
            .take(max_candidates)
            .collect();
        for base in bases {
            if recommendations.len() >= count {
                break;
            }
            let outfit = generate_outfit_from_item(base, seasonal.iter().cloned());
            if outfit.len() < self.settings.min_outfit_items {
                debug!("Outfit around {} has only {} items, skipping", base.id, outfit.len());
                continue;
            }
            let score = calculate_outfit_match_score(&outfit);
            if score > self.settings.quality_floor {
                debug!("Outfit around {} accepted with score {:.2}", base.id, score);
                let rec = self.recommendation(
                    format!("{} Outfit", base.style),
                    &outfit,
                    occasion_for_style(base.style),
                    score,
                );
                recommendations.push(rec);
            } else {
                debug!("Outfit around {} scored {:.2}, skipping", base.id, score);
            }
        }

        if recommendations.len() < count {
            warn!(
                "Only {} of {} outfits met the quality floor, padding with random combinations",
                recommendations.len(),
                count
            );
        }
        while recommendations.len() < count {
            let top = self.pick(&buckets.tops);
            let bottom = self.pick(&buckets.bottoms);
            let footwear = self.pick(&buckets.footwear);
            let outfit = match (top, bottom, footwear) {
                (Some(top), Some(bottom), Some(footwear)) => vec![top, bottom, footwear],
                _ => break,
            };
            let score = calculate_outfit_match_score(&outfit);
            let rec = self.recommendation(
                format!("{} Outfit", outfit[0].style),
                &outfit,
                occasion_for_style(outfit[0].style),
                score,
            );
            recommendations.push(rec);
        }

        info!(
            "Generated {} recommendations for {} season",
            recommendations.len(),
            season
        );
        Ok(recommendations)
    }

    /// Like [`generate_recommendations`](#method.generate_recommendations), for the wardrobe
    /// `source` holds for `user_id`.
    pub fn generate_for_user<S, D>(
        &mut self,
        source: &S,
        user_id: &str,
        count: Option<usize>,
        today: &D,
    ) -> Result<Vec<OutfitRecommendation>>
    where
        S: WardrobeSource + ?Sized,
        D: Datelike,
    {
        let wardrobe = source.list_items(user_id);
        debug!("Loaded {} items for user {}", wardrobe.len(), user_id);
        self.generate_recommendations(&wardrobe, count, today)
    }

    /// Builds a single outfit around `item`, scored by how well it matches. This never fails: in
    /// the worst case the outfit is just the item itself.
    pub fn recommend_for_item(
        &mut self,
        item: &WardrobeItem,
        wardrobe: &[WardrobeItem],
    ) -> OutfitRecommendation {
        let outfit = generate_outfit_from_item(item, wardrobe);
        let score = calculate_outfit_match_score(&outfit);
        self.recommendation(
            format!("{} Outfit", item.name),
            &outfit,
            occasion_for_style(item.style),
            score,
        )
    }

    /// Pairs up the `i`-th top, bottom and footwear of `items`, wrapping around shorter
    /// categories, to make up to `count` outfits as `limit` allows. `describe` names each outfit
    /// and gives its occasion.
    fn paired_outfits<F>(
        &mut self,
        items: Vec<&WardrobeItem>,
        count: Option<usize>,
        limit: PairingLimit,
        context: &str,
        describe: F,
    ) -> Result<Vec<OutfitRecommendation>>
    where
        F: Fn(usize) -> (String, String),
    {
        let count = self.count(count);
        if items.len() < self.settings.min_filtered_items {
            return Err(WardrobeError::InsufficientWardrobe(format!(
                "Not enough items for {}",
                context
            )));
        }
        let buckets = Buckets::sort(items);
        if let Some(category) = buckets.missing() {
            return Err(WardrobeError::InsufficientWardrobe(format!(
                "Not enough {} items for {}",
                category, context
            )));
        }

        let count = buckets.outfit_count(count, limit);
        let mut recommendations = Vec::with_capacity(count);
        for i in 0..count {
            let outfit = buckets.outfit(i);
            let score = calculate_outfit_match_score(&outfit);
            let (name, occasion) = describe(i);
            let rec = self.recommendation(name, &outfit, occasion, score);
            recommendations.push(rec);
        }
        info!("Generated {} recommendations for {}", recommendations.len(), context);
        Ok(recommendations)
    }

    /// Recommends outfits for an occasion such as "work" or "party", built from items in the
    /// styles [`styles_for_occasion`] picks. Each top starts at most one outfit, so fewer than
    /// `count` come back when there are fewer tops.
    pub fn recommend_for_occasion(
        &mut self,
        occasion: &str,
        wardrobe: &[WardrobeItem],
        count: Option<usize>,
    ) -> Result<Vec<OutfitRecommendation>> {
        let styles = styles_for_occasion(occasion);
        let items = wardrobe
            .iter()
            .filter(|item| styles.contains(&item.style))
            .collect();
        let context = format!("{} occasion", occasion);
        self.paired_outfits(items, count, PairingLimit::Tops, &context, |i| {
            (format!("{} Outfit {}", occasion, i + 1), occasion.to_string())
        })
    }

    /// Recommends outfits from items wearable in `season`. No more outfits are built than the
    /// smallest of the top, bottom and footwear categories has items.
    pub fn recommend_for_season(
        &mut self,
        season: Season,
        wardrobe: &[WardrobeItem],
        count: Option<usize>,
    ) -> Result<Vec<OutfitRecommendation>> {
        let items = wardrobe
            .iter()
            .filter(|item| item.fits_season(season))
            .collect();
        let context = format!("{} season", season);
        self.paired_outfits(items, count, PairingLimit::SmallestCategory, &context, |i| {
            (
                format!("{} Outfit {}", season, i + 1),
                format!("{} day", season),
            )
        })
    }

    /// Recommends outfits from items of a single style. Exactly `count` outfits come back,
    /// repeating combinations once every category has wrapped around.
    pub fn recommend_for_style(
        &mut self,
        style: ItemStyle,
        wardrobe: &[WardrobeItem],
        count: Option<usize>,
    ) -> Result<Vec<OutfitRecommendation>> {
        let items = wardrobe.iter().filter(|item| item.style == style).collect();
        let context = format!("{} style", style);
        self.paired_outfits(items, count, PairingLimit::Wrap, &context, |i| {
            (format!("{} Outfit {}", style, i + 1), occasion_for_style(style))
        })
    }

    /// Suggests ways to complete an outfit around `seed` using what's in season `today`.
    ///
    /// Each alternative takes the next candidate from every other category, preferring items in
    /// colors complementary to the seed's primary color. Categories that run out are listed as
    /// missing items instead. Confidence starts at `gap_base_confidence` and drops by
    /// `gap_confidence_step` for each further alternative.
    pub fn complete_outfit<D: Datelike>(
        &mut self,
        seed: &WardrobeItem,
        wardrobe: &[WardrobeItem],
        today: &D,
    ) -> Vec<OutfitRecommendation> {
        let season = Season::for_date(today);
        let candidates: Vec<&WardrobeItem> = wardrobe
            .iter()
            .filter(|item| {
                item.id != seed.id && item.category != seed.category && item.fits_season(season)
            })
            .collect();
        let pool: Vec<HexColor> = candidates
            .iter()
            .flat_map(|item| item.colors.iter().cloned())
            .collect();
        let matches = match seed.primary_color() {
            Some(color) => generate_color_matches(color, &pool, ColorHarmony::Complementary),
            None => vec![],
        };

        let by_category: Vec<(ItemCategory, Vec<&WardrobeItem>)> = ITEM_CATEGORIES
            .iter()
            .cloned()
            .filter(|&category| category != seed.category)
            .map(|category| {
                let mut options: Vec<&WardrobeItem> = candidates
                    .iter()
                    .cloned()
                    .filter(|item| item.category == category)
                    .collect();
                options.sort_by_key(|item| !item.colors.iter().any(|c| matches.contains(c)));
                (category, options)
            })
            .collect();

        let mut alternatives = vec![];
        for i in 0..self.settings.gap_alternatives {
            let mut items = vec![seed.clone()];
            let mut missing_items = vec![];
            for &(category, ref options) in &by_category {
                match options.get(i) {
                    Some(item) => items.push((*item).clone()),
                    None => missing_items.push(MissingItem {
                        category,
                        description: format!("Add a {} to complete this outfit", category),
                    }),
                }
            }
            if items.len() < 2 {
                continue;
            }
            let confidence = num::clamp(
                self.settings.gap_base_confidence - self.settings.gap_confidence_step * i as f64,
                0.0,
                1.0,
            );
            alternatives.push(OutfitRecommendation {
                id: format!("gap-rec-{}", i),
                name: format!("Outfit with {}", seed.name),
                items,
                missing_items,
                occasion: Some(seed.style.to_string()),
                confidence,
            });
        }
        debug!(
            "Built {} alternatives around {}",
            alternatives.len(),
            seed.id
        );
        alternatives
    }
}
