//! This module defines the single error type used throughout Swatch. Every fallible operation
//! returns [`Result`], and every failure carries a human-readable message that a surrounding
//! application can show to its users directly.

use std::result;

use thiserror::Error;

/// Everything that can go wrong when working with colors, measurements and wardrobes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WardrobeError {
    /// A color string did not parse as exactly six hex digits, with an optional leading `#`. The
    /// offending input is kept.
    #[error("invalid color format: {0:?} is not a 6-digit hex code")]
    InvalidColorFormat(String),
    /// A recommendation needed items of some category, season, style or occasion that the
    /// wardrobe doesn't have. The message names what was missing.
    #[error("{0}")]
    InsufficientWardrobe(String),
    /// A height, weight or body measurement was negative, zero where it can't be, or not a
    /// number at all.
    #[error("invalid measurements: {0}")]
    InvalidMeasurements(String),
    /// Recommendation settings could not be parsed or had out-of-range values.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

/// Shorthand for results whose error is a [`WardrobeError`].
pub type Result<T> = result::Result<T, WardrobeError>;

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_messages() {
        let err = WardrobeError::InsufficientWardrobe("Not enough items for Winter season".into());
        assert_eq!(err.to_string(), "Not enough items for Winter season");
        let err = WardrobeError::InvalidColorFormat("#12345".into());
        assert_eq!(
            err.to_string(),
            "invalid color format: \"#12345\" is not a 6-digit hex code"
        );
    }
}
