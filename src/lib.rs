//! Swatch is a library for dressing well with the clothes you already own. It knows which colors
//! go together, which palette flatters a person's coloring, which cuts suit a body shape, and how
//! to put a wardrobe's contents together into outfits worth wearing.
//!
//! Colors are plain sRGB hex codes ([`HexColor`](color/struct.HexColor.html)), with an integer
//! HSL form for hue arithmetic. Color matching is deliberately rule-based: a handful of neutrals
//! go with everything, a few color families go with themselves, and a few classic pairs go with
//! each other. On top of that, the [`Recommender`](recommend/struct.Recommender.html) builds
//! outfits by season, occasion, style, weather, or around a single favorite piece.
//!
//! Nothing here performs I/O or reads the clock: dates, randomness and wardrobe storage are all
//! passed in, so every result can be reproduced.

// we don't mess around with documentation
#![deny(missing_docs)]

extern crate chrono;
extern crate csv;
extern crate num;
extern crate rand;
extern crate regex;
extern crate serde;
extern crate thiserror;
extern crate toml;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;

pub mod assembler;
pub mod body;
pub mod color;
pub mod complement;
pub mod config;
pub mod error;
pub mod harmony;
pub mod hslcolor;
pub mod prelude;
pub mod recommend;
pub mod scoring;
pub mod season;
pub mod wardrobe;
pub mod weather;
