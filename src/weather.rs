//! Outfits for the day's weather. The weather itself comes from whatever forecast service the
//! caller uses; this module only decides what to wear in it.

use std::fmt;

use rand::Rng;

use recommend::Recommender;
use wardrobe::{ItemCategory, OutfitRecommendation, Season, WardrobeItem};

/// The broad kind of weather outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Conditions {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            Conditions::Sunny => "Sunny",
            Conditions::Cloudy => "Cloudy",
            Conditions::Rainy => "Rainy",
            Conditions::Snowy => "Snowy",
        };
        write!(f, "{}", name)
    }
}

/// A weather report.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    /// Temperature in degrees Celsius.
    pub temperature_c: f64,
    /// What it's doing outside.
    pub conditions: Conditions,
}

impl Weather {
    /// The season whose clothes suit this temperature: Summer above 25°C, Spring above 15°C, Fall
    /// above 5°C and Winter otherwise.
    pub fn season(&self) -> Season {
        if self.temperature_c > 25.0 {
            Season::Summer
        } else if self.temperature_c > 15.0 {
            Season::Spring
        } else if self.temperature_c > 5.0 {
            Season::Fall
        } else {
            Season::Winter
        }
    }

    fn needs_outerwear(&self) -> bool {
        self.temperature_c < 15.0 || self.conditions == Conditions::Rainy
    }
}

impl<R: Rng> Recommender<R> {
    /// Recommends outfits for `weather` from items suited to its season: items tagged with
    /// [`Weather::season`], and also items tagged `AllYear`, which a match on the exact season
    /// alone would leave out. There's a rainy-day outfit when it rains, a cold-weather one below
    /// 10°C, a hot-weather one above 25°C and always a general one, in that order.
    ///
    /// Each outfit is a random top, bottom, footwear and accessory, plus random outerwear when
    /// it's below 15°C or raining. Categories the wardrobe lacks are left out, and outfits that end
    /// up with fewer than two items are dropped.
    pub fn recommend_for_weather(
        &mut self,
        wardrobe: &[WardrobeItem],
        weather: &Weather,
    ) -> Vec<OutfitRecommendation> {
        let season = weather.season();
        let suitable: Vec<&WardrobeItem> = wardrobe
            .iter()
            .filter(|item| item.fits_season(season))
            .collect();

        let mut occasions = vec![];
        if weather.conditions == Conditions::Rainy {
            occasions.push(("Rainy Day Outfit".to_string(), "Rainy day"));
        }
        if weather.temperature_c < 10.0 {
            occasions.push(("Cold Weather Ensemble".to_string(), "Cold day"));
        }
        if weather.temperature_c > 25.0 {
            occasions.push(("Hot Weather Outfit".to_string(), "Hot day"));
        }
        occasions.push((format!("{} Day Outfit", weather.conditions), "Everyday"));

        let mut recommendations = vec![];
        for (name, occasion) in occasions {
            let outfit = self.weather_outfit(&suitable, weather);
            if outfit.len() < 2 {
                debug!("Not enough {} items for {}", season, name);
                continue;
            }
            let confidence = self.settings().weather_confidence;
            let rec = self.recommendation(name, &outfit, occasion.to_string(), confidence);
            recommendations.push(rec);
        }
        info!(
            "Generated {} recommendations for {}°C and {}",
            recommendations.len(),
            weather.temperature_c,
            weather.conditions
        );
        recommendations
    }

    fn weather_outfit<'a>(
        &mut self,
        items: &[&'a WardrobeItem],
        weather: &Weather,
    ) -> Vec<&'a WardrobeItem> {
        let mut categories = vec![ItemCategory::Top, ItemCategory::Bottom, ItemCategory::Footwear];
        if weather.needs_outerwear() {
            categories.push(ItemCategory::Outerwear);
        }
        categories.push(ItemCategory::Accessory);

        let mut outfit = vec![];
        for category in categories {
            let options: Vec<&'a WardrobeItem> = items
                .iter()
                .cloned()
                .filter(|item| item.category == category)
                .collect();
            if let Some(item) = self.pick(&options) {
                outfit.push(item);
            }
        }
        outfit
    }
}
