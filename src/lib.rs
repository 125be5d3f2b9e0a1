//! Generation of color maps for visualization.
//!
//! A [`ColorMap`] is a color map family together with its parameters.
//! [`ColorMap::generate`] samples it into a [`Palette`] of `n ≥ 2`
//! sRGB colors, counting how many of them were outside the sRGB gamut
//! and had to be clipped.
//!
//! Families:
//! - Brewer-like maps ([`BrewerSequential`], [`BrewerDiverging`],
//!   [`BrewerQualitative`]) after Wijffelaars et al., *Generating
//!   color palettes using intuitive parameters*, 2008;
//! - perceptually uniform maps in CIELUV
//!   ([`PuSequentialLightness`], [`PuSequentialSaturation`],
//!   [`PuSequentialRainbow`], [`PuSequentialBlackBody`],
//!   [`PuDivergingLightness`], [`PuDivergingSaturation`],
//!   [`PuQualitativeHue`]);
//! - [`CubeHelix`], [`Moreland`] and [`McNames`] maps.
//!
//! ```
//! use gencolormap::{defaults, export, ColorMap};
//! let map = ColorMap::BrewerSequential(defaults::brewer_sequential(5));
//! let palette = map.generate(5)?;
//! assert_eq!(palette.len(), 5);
//! print!("{}", export::to_csv(palette.colors()));
//! # Ok::<(), gencolormap::Error>(())
//! ```
//!
//! The [`space`] module exposes the underlying color space
//! conversions.

pub use rgb::RGB8;

pub mod space;
mod palettes;
pub mod defaults;
pub mod export;
mod error;

pub use palettes::*;
pub use error::{Error, Result};
