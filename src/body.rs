//! This module turns a few body measurements into a body-type label and the style advice that goes
//! with it. Classification is a handful of fixed thresholds on the differences between
//! measurements (bust, waist and hips for the feminine profile, shoulders and waist for the
//! masculine one), falling back to BMI bands when the measurements needed aren't there. The advice
//! itself lives in a bundled table, `data/style_guide.csv`, with one row per profile and body type.

use std::fmt;

use csv;

use error::{Result, WardrobeError};

const STYLE_GUIDE_CSV: &str = include_str!("../data/style_guide.csv");

// differences (in cm) at or above these count as a pronounced curve or taper
const CURVE_THRESHOLD: f64 = 9.0;
const HOURGLASS_BALANCE: f64 = 5.0;
const V_SHAPE_TAPER: f64 = 20.0;
const ATHLETIC_TAPER: f64 = 10.0;

/// A person's gender, as far as choosing a classification profile goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    Other,
    PreferNotToSay,
}

/// Body measurements in centimeters. Every measurement is optional; a measurement of 0 is treated
/// the same as a missing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct BodyMeasurements {
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub shoulders: Option<f64>,
    pub inseam: Option<f64>,
}

impl BodyMeasurements {
    /// Builds measurements from `(name, centimeters)` pairs, such as the fields of a form. Names are
    /// matched without regard to case; unknown names are ignored.
    pub fn from_pairs<'a, I: IntoIterator<Item = (&'a str, f64)>>(pairs: I) -> BodyMeasurements {
        let mut measurements = BodyMeasurements::default();
        for (name, value) in pairs {
            let slot = match name.trim().to_lowercase().as_str() {
                "bust" => &mut measurements.bust,
                "waist" => &mut measurements.waist,
                "hips" => &mut measurements.hips,
                "shoulders" => &mut measurements.shoulders,
                "inseam" => &mut measurements.inseam,
                _ => continue,
            };
            *slot = Some(value);
        }
        measurements
    }

    /// Checks that every measurement given is a finite, non-negative number.
    /// # Errors
    /// Returns `WardrobeError::InvalidMeasurements` naming the first bad measurement.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("bust", self.bust),
            ("waist", self.waist),
            ("hips", self.hips),
            ("shoulders", self.shoulders),
            ("inseam", self.inseam),
        ];
        for &(name, value) in named.iter() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(WardrobeError::InvalidMeasurements(format!(
                        "{} must be a non-negative number of centimeters, got {}",
                        name, v
                    )));
                }
            }
        }
        Ok(())
    }
}

// a measurement only counts when it's actually there
fn given(measurement: Option<f64>) -> Option<f64> {
    measurement.filter(|&v| v > 0.0)
}

/// The body types the classifier can produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum BodyType {
    Rectangle,
    InvertedTriangle,
    Pear,
    Hourglass,
    Apple,
    VShape,
    Athletic,
    Oval,
    Slim,
    Average,
    Full,
}

impl BodyType {
    /// The human-readable label, such as `"Inverted Triangle"` or `"V-Shape"`.
    pub fn label(self) -> &'static str {
        match self {
            BodyType::Rectangle => "Rectangle",
            BodyType::InvertedTriangle => "Inverted Triangle",
            BodyType::Pear => "Pear",
            BodyType::Hourglass => "Hourglass",
            BodyType::Apple => "Apple",
            BodyType::VShape => "V-Shape",
            BodyType::Athletic => "Athletic",
            BodyType::Oval => "Oval",
            BodyType::Slim => "Slim",
            BodyType::Average => "Average",
            BodyType::Full => "Full",
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What to wear and what to skip for a given body type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRecommendation {
    /// The body type label the advice is for.
    pub body_type: String,
    /// Styles that flatter this body type.
    pub recommended_styles: Vec<String>,
    /// Styles that tend not to.
    pub avoid_styles: Vec<String>,
    /// Features worth drawing attention to.
    pub accent_features: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct StyleGuideRecord {
    profile: String,
    body_type: String,
    recommended: String,
    avoid: String,
    accent: String,
}

impl StyleGuideRecord {
    fn to_recommendation(&self) -> StyleRecommendation {
        let split = |list: &str| -> Vec<String> {
            list.split('|').map(|s| s.trim().to_string()).collect()
        };
        StyleRecommendation {
            body_type: self.body_type.clone(),
            recommended_styles: split(&self.recommended),
            avoid_styles: split(&self.avoid),
            accent_features: split(&self.accent),
        }
    }
}

fn read_style_guide() -> Vec<StyleGuideRecord> {
    let mut reader = csv::Reader::from_reader(STYLE_GUIDE_CSV.as_bytes());
    // the table ships with the crate, so a bad row is a bug here
    reader
        .deserialize()
        .map(|record| record.expect("bundled style guide is malformed"))
        .collect()
}

lazy_static! {
    static ref STYLE_GUIDE: Vec<StyleGuideRecord> = read_style_guide();
}

fn profile(gender: Gender) -> &'static str {
    match gender {
        Gender::Female => "female",
        _ => "male",
    }
}

/// Body mass index from height in centimeters and weight in kilograms.
pub fn body_mass_index(height_cm: f64, weight_kg: f64) -> f64 {
    let meters = height_cm / 100.0;
    weight_kg / (meters * meters)
}

/// Classifies a body type from measurements, using `bmi` when the measurements needed for the
/// gender's profile are missing.
pub fn classify_body_type(gender: Gender, bmi: f64, measurements: &BodyMeasurements) -> BodyType {
    if gender == Gender::Female {
        let curves = (
            given(measurements.bust),
            given(measurements.waist),
            given(measurements.hips),
        );
        if let (Some(bust), Some(waist), Some(hips)) = curves {
            let bust_to_waist = bust - waist;
            let hips_to_waist = hips - waist;
            match (bust_to_waist >= CURVE_THRESHOLD, hips_to_waist >= CURVE_THRESHOLD) {
                (false, false) => BodyType::Rectangle,
                (true, false) => BodyType::InvertedTriangle,
                (false, true) => BodyType::Pear,
                (true, true) => {
                    if (bust - hips).abs() < HOURGLASS_BALANCE {
                        BodyType::Hourglass
                    } else if bust > hips {
                        BodyType::Apple
                    } else {
                        BodyType::Pear
                    }
                }
            }
        } else if bmi < 18.5 {
            BodyType::Slim
        } else if bmi < 25.0 {
            BodyType::Average
        } else {
            BodyType::Full
        }
    } else if let (Some(shoulders), Some(waist)) =
        (given(measurements.shoulders), given(measurements.waist))
    {
        let taper = shoulders - waist;
        if taper >= V_SHAPE_TAPER {
            BodyType::VShape
        } else if taper >= ATHLETIC_TAPER {
            BodyType::Athletic
        } else if waist > shoulders {
            BodyType::Oval
        } else {
            BodyType::Rectangle
        }
    } else if bmi < 18.5 {
        BodyType::Slim
    } else if bmi < 25.0 {
        BodyType::Athletic
    } else {
        BodyType::Full
    }
}

/// Classifies a body type and returns the style advice for it. Body types without advice of their
/// own (for instance the BMI-only `Slim` and `Full`) get the profile's balanced "Average" advice.
/// # Errors
/// Returns `WardrobeError::InvalidMeasurements` if height or weight isn't a positive number, or if
/// any measurement is negative or not a number.
/// # Example
/// ```
/// # use swatch::body::*;
/// let measurements = BodyMeasurements::from_pairs(vec![("bust", 92.0), ("waist", 70.0), ("hips", 94.0)]);
/// let advice = get_style_recommendations(Gender::Female, 168.0, 60.0, &measurements).unwrap();
/// assert_eq!(advice.body_type, "Hourglass");
/// ```
pub fn get_style_recommendations(
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    measurements: &BodyMeasurements,
) -> Result<StyleRecommendation> {
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(WardrobeError::InvalidMeasurements(format!(
            "height must be a positive number of centimeters, got {}",
            height_cm
        )));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(WardrobeError::InvalidMeasurements(format!(
            "weight must be a positive number of kilograms, got {}",
            weight_kg
        )));
    }
    measurements.validate()?;

    let body_type = classify_body_type(gender, body_mass_index(height_cm, weight_kg), measurements);
    let profile = profile(gender);
    let row = STYLE_GUIDE
        .iter()
        .find(|row| row.profile == profile && row.body_type == body_type.label())
        .or_else(|| {
            STYLE_GUIDE
                .iter()
                .find(|row| row.profile == profile && row.body_type == BodyType::Average.label())
        });
    Ok(match row {
        Some(row) => row.to_recommendation(),
        None => StyleRecommendation {
            body_type: BodyType::Average.label().to_string(),
            recommended_styles: vec![],
            avoid_styles: vec![],
            accent_features: vec![],
        },
    })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    fn female(bust: f64, waist: f64, hips: f64) -> BodyMeasurements {
        BodyMeasurements {
            bust: Some(bust),
            waist: Some(waist),
            hips: Some(hips),
            ..Default::default()
        }
    }

    fn male(shoulders: f64, waist: f64) -> BodyMeasurements {
        BodyMeasurements {
            shoulders: Some(shoulders),
            waist: Some(waist),
            ..Default::default()
        }
    }

    #[test]
    fn test_style_guide_loads() {
        assert_eq!(STYLE_GUIDE.len(), 11);
    }

    #[test]
    fn test_female_classification() {
        let classify = |m: BodyMeasurements| classify_body_type(Gender::Female, 22.0, &m);
        assert_eq!(classify(female(90.0, 85.0, 92.0)), BodyType::Rectangle);
        assert_eq!(classify(female(100.0, 80.0, 85.0)), BodyType::InvertedTriangle);
        assert_eq!(classify(female(85.0, 80.0, 100.0)), BodyType::Pear);
        assert_eq!(classify(female(95.0, 70.0, 97.0)), BodyType::Hourglass);
        assert_eq!(classify(female(110.0, 80.0, 95.0)), BodyType::Apple);
        assert_eq!(classify(female(92.0, 70.0, 105.0)), BodyType::Pear);
        // exactly 9 cm counts as a curve
        assert_eq!(classify(female(89.0, 80.0, 85.0)), BodyType::InvertedTriangle);
    }

    #[test]
    fn test_male_classification() {
        let classify = |m: BodyMeasurements| classify_body_type(Gender::Male, 22.0, &m);
        assert_eq!(classify(male(120.0, 100.0)), BodyType::VShape);
        assert_eq!(classify(male(110.0, 100.0)), BodyType::Athletic);
        assert_eq!(classify(male(100.0, 105.0)), BodyType::Oval);
        assert_eq!(classify(male(100.0, 95.0)), BodyType::Rectangle);
        // non-female genders share the masculine profile
        assert_eq!(
            classify_body_type(Gender::NonBinary, 22.0, &male(120.0, 100.0)),
            BodyType::VShape
        );
    }

    #[test]
    fn test_bmi_fallback() {
        let none = BodyMeasurements::default();
        assert_eq!(classify_body_type(Gender::Female, 17.0, &none), BodyType::Slim);
        assert_eq!(classify_body_type(Gender::Female, 22.0, &none), BodyType::Average);
        assert_eq!(classify_body_type(Gender::Female, 27.0, &none), BodyType::Full);
        assert_eq!(classify_body_type(Gender::Male, 17.0, &none), BodyType::Slim);
        assert_eq!(classify_body_type(Gender::Male, 22.0, &none), BodyType::Athletic);
        assert_eq!(classify_body_type(Gender::Male, 27.0, &none), BodyType::Full);
        // zero means "not measured"
        let zero_hips = female(95.0, 70.0, 0.0);
        assert_eq!(classify_body_type(Gender::Female, 22.0, &zero_hips), BodyType::Average);
        assert!((body_mass_index(180.0, 81.0) - 25.0).abs() <= 1e-9);
    }

    #[test]
    fn test_recommendations() {
        let pear = get_style_recommendations(Gender::Female, 165.0, 60.0, &female(85.0, 70.0, 100.0))
            .unwrap();
        assert_eq!(pear.body_type, "Pear");
        assert_eq!(pear.recommended_styles[0], "A-line skirts");
        assert_eq!(pear.accent_features, vec!["Upper body", "Shoulders"]);

        let oval = get_style_recommendations(Gender::Male, 180.0, 95.0, &male(100.0, 110.0)).unwrap();
        assert_eq!(oval.body_type, "Oval");
        assert_eq!(oval.recommended_styles[4], "Well-fitted (not tight) clothing");

        // a slim build has no advice of its own
        let slim = get_style_recommendations(Gender::Female, 175.0, 50.0, &BodyMeasurements::default())
            .unwrap();
        assert_eq!(slim.body_type, "Average");
        assert_eq!(slim.recommended_styles.len(), 4);
        let slim = get_style_recommendations(Gender::Male, 185.0, 55.0, &BodyMeasurements::default())
            .unwrap();
        assert_eq!(slim.body_type, "Average");
        assert_eq!(slim.recommended_styles.len(), 3);

        let athletic =
            get_style_recommendations(Gender::Other, 180.0, 75.0, &BodyMeasurements::default()).unwrap();
        assert_eq!(athletic.body_type, "Athletic");
    }

    #[test]
    fn test_invalid_measurements() {
        let bad = female(-85.0, 70.0, 100.0);
        match get_style_recommendations(Gender::Female, 165.0, 60.0, &bad) {
            Err(WardrobeError::InvalidMeasurements(msg)) => assert!(msg.starts_with("bust")),
            other => panic!("expected invalid measurements, got {:?}", other),
        }
        let nan = male(::std::f64::NAN, 90.0);
        assert!(get_style_recommendations(Gender::Male, 180.0, 80.0, &nan).is_err());
        let none = BodyMeasurements::default();
        assert!(get_style_recommendations(Gender::Male, 0.0, 80.0, &none).is_err());
        assert!(get_style_recommendations(Gender::Male, 180.0, -1.0, &none).is_err());
    }

    #[test]
    fn test_from_pairs() {
        let m = BodyMeasurements::from_pairs(vec![("Bust", 90.0), ("waist", 70.0), ("wingspan", 180.0)]);
        assert_eq!(m.bust, Some(90.0));
        assert_eq!(m.waist, Some(70.0));
        assert_eq!(m.hips, None);
    }
}
