//! Default parameters of every color map family.
//!
//! Angles are in radians.  Each function returns a fully resolved
//! parameter set which callers override field by field.

use std::f64::consts::PI;
use rgb::RGB8;
use crate::{BrewerDiverging, BrewerQualitative, BrewerSequential, CubeHelix,
            McNames, Moreland, PuDivergingLightness, PuDivergingSaturation,
            PuQualitativeHue, PuSequentialBlackBody, PuSequentialLightness,
            PuSequentialRainbow, PuSequentialSaturation};

/// Default number of colors.
pub const N: usize = 256;

pub const BREWER_CONTRAST: f64 = 0.88;

/// Contrast of Brewer sequential and diverging maps with `n` colors.
/// Small maps get less contrast so that their colors stay readable.
///
/// ```
/// use gencolormap::defaults::brewer_contrast;
/// assert!((brewer_contrast(5) - 0.64).abs() < 1e-12);
/// assert_eq!(brewer_contrast(256), 0.88);
/// ```
pub fn brewer_contrast(n: usize) -> f64 {
    if n <= 9 { BREWER_CONTRAST.min(0.34 + 0.06 * n as f64) }
    else { BREWER_CONTRAST }
}

pub fn brewer_sequential(n: usize) -> BrewerSequential {
    BrewerSequential {
        hue: 0.,
        contrast: brewer_contrast(n),
        saturation: 0.6,
        brightness: 0.75,
        warmth: 0.15,
    }
}

pub fn brewer_diverging(n: usize) -> BrewerDiverging {
    BrewerDiverging {
        hue: 0.,
        divergence: 4. * PI / 3.,
        contrast: brewer_contrast(n),
        saturation: 0.6,
        brightness: 0.75,
        warmth: 0.15,
    }
}

pub fn brewer_qualitative() -> BrewerQualitative {
    BrewerQualitative {
        hue: 0.,
        divergence: 2. * PI,
        contrast: 0.5,
        saturation: 0.5,
        brightness: 0.8,
    }
}

pub fn pu_sequential_lightness() -> PuSequentialLightness {
    PuSequentialLightness {
        hue: 0.,
        saturation: 0.3,
        lightness_range: 0.95,
        saturation_range: 0.95,
    }
}

pub fn pu_sequential_saturation() -> PuSequentialSaturation {
    PuSequentialSaturation {
        hue: 0.,
        lightness: 0.5,
        saturation: 0.3,
        saturation_range: 0.95,
    }
}

pub fn pu_sequential_rainbow() -> PuSequentialRainbow {
    PuSequentialRainbow {
        hue: 0.,
        rotations: -1.5,
        lightness_range: 0.75,
        saturation: 0.3,
        saturation_range: 0.5,
    }
}

pub fn pu_sequential_blackbody() -> PuSequentialBlackBody {
    PuSequentialBlackBody {
        temperature: 1000.,
        range: 6500.,
        saturation: 0.3,
    }
}

pub fn pu_diverging_lightness() -> PuDivergingLightness {
    PuDivergingLightness {
        hue: 0.,
        divergence: 4. * PI / 3.,
        saturation: 0.3,
        lightness_range: 0.95,
        saturation_range: 1.,
    }
}

pub fn pu_diverging_saturation() -> PuDivergingSaturation {
    PuDivergingSaturation {
        hue: 0.,
        divergence: 4. * PI / 3.,
        lightness: 0.5,
        saturation: 0.3,
        saturation_range: 0.95,
    }
}

pub fn pu_qualitative_hue() -> PuQualitativeHue {
    PuQualitativeHue {
        hue: 0.,
        divergence: 2. * PI,
        lightness: 0.55,
        saturation: 0.22,
    }
}

pub fn cubehelix() -> CubeHelix {
    CubeHelix {
        hue: PI / 6.,
        rotations: -1.5,
        saturation: 1.,
        gamma: 1.,
    }
}

pub fn moreland() -> Moreland {
    Moreland {
        color0: RGB8::new(59, 76, 192),
        color1: RGB8::new(180, 4, 38),
    }
}

pub fn mcnames() -> McNames { McNames { periods: 2. } }
