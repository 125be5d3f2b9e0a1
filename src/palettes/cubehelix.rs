//! D. A. Green's CubeHelix scheme: a helix around the gray diagonal of
//! the RGB cube whose luminance increases monotonically.
//! See *A colour scheme for the display of astronomical intensity
//! images*, Bulletin of the Astronomical Society of India 39, 2011.

use rgb::{RGB, RGB8};
use crate::space::{self, TWO_PI};
use super::{fill, Generator, PaletteType};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeHelix {
    /// Start hue in \[0, π\] radians.
    pub hue: f64,
    /// Number of turns of the helix, possibly negative.
    pub rotations: f64,
    /// Radius of the helix, in \[0, 1\].
    pub saturation: f64,
    /// Exponent applied to the gray level, positive.
    pub gamma: f64,
}

impl Generator for CubeHelix {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let start = space::normalize_hue(2. * self.hue);
        fill(colors, |_, t| {
            let angle = start + TWO_PI * self.rotations * t;
            let f = t.powf(self.gamma);
            let amp = self.saturation * f * (1. - f) / 2.;
            let (s, c) = angle.sin_cos();
            RGB { r: f + amp * (-0.14861 * c + 1.78277 * s),
                  g: f + amp * (-0.29227 * c - 0.90649 * s),
                  b: f + amp * (1.97294 * c) }
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}
