//! Perceptually uniform color maps.
//!
//! Colors are placed in CIELUV using lightness, saturation (chroma
//! relative to lightness) and hue, so that equal steps in the
//! parameters give equal perceptual steps.

use rgb::RGB8;
use crate::space::{self, Lsh, TWO_PI};
use super::{branch, fill, hue_step, Generator, PaletteType};

/// Saturation reached for a `saturation` parameter of 1.
const MAX_SATURATION: f64 = 5.;

/// Black body temperatures covered by the Planckian locus approximation.
const MIN_TEMPERATURE: f64 = 1667.;
const MAX_TEMPERATURE: f64 = 25000.;

/// Lightness going from `50(1 - range)` to `50(1 + range)` as `t`
/// goes from 0 to 1.
fn lightness_ramp(range: f64, t: f64) -> f64 {
    50. * (1. - range) + 100. * range * t
}

/// Saturation going from `s` to `s(1 - range)` as `t` goes from 0 to 1.
fn fading_saturation(saturation: f64, range: f64, t: f64) -> f64 {
    MAX_SATURATION * saturation * (1. - range * t)
}

fn lsh(l: f64, s: f64, h: f64) -> rgb::RGB<f64> {
    Lsh { l, s, h }.to_luv().to_srgb()
}

/// Chromaticity (x, y) of a black body at temperature `t` Kelvin,
/// using the cubic spline approximation of Kim et al. (2002).
fn planckian_locus(t: f64) -> (f64, f64) {
    let t = t.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    let (t1, t2, t3) = (1e3 / t, 1e6 / (t * t), 1e9 / (t * t * t));
    let x = {
        if t <= 4000. {
            -0.2661239 * t3 - 0.2343589 * t2 + 0.8776956 * t1 + 0.179910
        } else {
            -3.0258469 * t3 + 2.1070379 * t2 + 0.2226347 * t1 + 0.240390
        } };
    let (x2, x3) = (x * x, x * x * x);
    let y = {
        if t <= 2222. {
            -1.1063814 * x3 - 1.34811020 * x2 + 2.18555832 * x - 0.20219683
        } else if t <= 4000. {
            -0.9549476 * x3 - 1.37418593 * x2 + 2.09137015 * x - 0.16748867
        } else {
            3.0817580 * x3 - 5.87338670 * x2 + 3.75112997 * x - 0.37001483
        } };
    (x, y)
}

/// CIELUV hue of a black body at temperature `t` Kelvin.
fn blackbody_hue(t: f64) -> f64 {
    let (x, y) = planckian_locus(t);
    let d = -2. * x + 12. * y + 3.;
    let (u, v) = (4. * x / d, 9. * y / d);
    let (un, vn) = space::D65.uv();
    space::normalize_hue((v - vn).atan2(u - un))
}

/// Sequential map of fixed hue with increasing lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuSequentialLightness {
    pub hue: f64,
    /// Saturation of the dark end, in \[0, 1\].
    pub saturation: f64,
    /// In \[0, 1\].
    pub lightness_range: f64,
    /// Relative loss of saturation toward the light end, in \[0, 1\].
    pub saturation_range: f64,
}

impl Generator for PuSequentialLightness {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let h = space::normalize_hue(self.hue);
        fill(colors, |_, t| {
            lsh(lightness_ramp(self.lightness_range, t),
                fading_saturation(self.saturation, self.saturation_range, t),
                h)
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}

/// Sequential map of fixed hue and lightness with increasing saturation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuSequentialSaturation {
    pub hue: f64,
    /// In \[0, 1\].
    pub lightness: f64,
    /// Saturation of the last color, in \[0, 1\].
    pub saturation: f64,
    /// In \[0, 1\].
    pub saturation_range: f64,
}

impl Generator for PuSequentialSaturation {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let h = space::normalize_hue(self.hue);
        let l = 100. * self.lightness;
        fill(colors, |_, t| {
            lsh(l, fading_saturation(self.saturation, self.saturation_range,
                                     1. - t), h)
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}

/// Sequential map whose hue turns while its lightness increases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuSequentialRainbow {
    /// Hue of the first color.
    pub hue: f64,
    /// Number of hue turns over the map; the sign gives the direction.
    pub rotations: f64,
    pub lightness_range: f64,
    pub saturation: f64,
    pub saturation_range: f64,
}

impl Generator for PuSequentialRainbow {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        fill(colors, |_, t| {
            let h = space::normalize_hue(self.hue + TWO_PI * self.rotations * t);
            lsh(lightness_ramp(self.lightness_range, t),
                fading_saturation(self.saturation, self.saturation_range, t),
                h)
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}

/// Sequential map from black to white through the colors of a black
/// body heated from `temperature` to `temperature + range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuSequentialBlackBody {
    /// Start temperature in Kelvin.
    pub temperature: f64,
    /// Temperature range in Kelvin.
    pub range: f64,
    pub saturation: f64,
}

impl Generator for PuSequentialBlackBody {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        fill(colors, |_, t| {
            let h = blackbody_hue(self.temperature + self.range * t);
            lsh(100. * t, fading_saturation(self.saturation, 1., t), h)
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}

/// Saturation of a diverging map at distance `u` from the center:
/// `s(1 - range)` next to the center, `s` at both ends.
fn diverging_saturation(saturation: f64, range: f64, u: f64) -> f64 {
    fading_saturation(saturation, range, 1. - u)
}

/// Diverging map: dark saturated ends, light neutral center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuDivergingLightness {
    pub hue: f64,
    pub divergence: f64,
    pub saturation: f64,
    pub lightness_range: f64,
    pub saturation_range: f64,
}

impl Generator for PuDivergingLightness {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let hues = [self.hue, self.hue + self.divergence].map(space::normalize_hue);
        let n = colors.len();
        fill(colors, |i, t| {
            let u = (2. * t - 1.).abs();
            let l = lightness_ramp(self.lightness_range, 1. - u);
            match branch(i, n) {
                Some(side) => {
                    let s = diverging_saturation(self.saturation,
                                                 self.saturation_range, u);
                    lsh(l, s, hues[side])
                }
                None => lsh(l, 0., 0.),
            }
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Div }
}

/// Diverging map of constant lightness: saturated ends, neutral center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuDivergingSaturation {
    pub hue: f64,
    pub divergence: f64,
    pub lightness: f64,
    pub saturation: f64,
    pub saturation_range: f64,
}

impl Generator for PuDivergingSaturation {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let hues = [self.hue, self.hue + self.divergence].map(space::normalize_hue);
        let l = 100. * self.lightness;
        let n = colors.len();
        fill(colors, |i, t| {
            let u = (2. * t - 1.).abs();
            match branch(i, n) {
                Some(side) => {
                    let s = diverging_saturation(self.saturation,
                                                 self.saturation_range, u);
                    lsh(l, s, hues[side])
                }
                None => lsh(l, 0., 0.),
            }
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Div }
}

/// Evenly spaced hues at fixed lightness and saturation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuQualitativeHue {
    pub hue: f64,
    pub divergence: f64,
    pub lightness: f64,
    pub saturation: f64,
}

impl Generator for PuQualitativeHue {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let step = hue_step(self.divergence, colors.len());
        let l = 100. * self.lightness;
        let s = MAX_SATURATION * self.saturation;
        fill(colors, |i, _| {
            lsh(l, s, space::normalize_hue(self.hue + i as f64 * step))
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Qual }
}
