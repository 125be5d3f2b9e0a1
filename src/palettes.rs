//! Catalog of color map generators.

use std::cmp::Ordering;
use rgb::{RGB, RGB8};
use tracing::debug;
use crate::{space, Error};

pub(crate) mod ty;
mod brewer;
mod uniform;
mod cubehelix;
mod moreland;
mod mcnames;

pub use ty::{Palette, PaletteType};
pub use brewer::{BrewerDiverging, BrewerQualitative, BrewerSequential};
pub use uniform::{PuDivergingLightness, PuDivergingSaturation,
                  PuQualitativeHue, PuSequentialBlackBody,
                  PuSequentialLightness, PuSequentialRainbow,
                  PuSequentialSaturation};
pub use cubehelix::CubeHelix;
pub use moreland::Moreland;
pub use mcnames::McNames;

/// A color map algorithm together with its parameters.
pub trait Generator {
    /// Fill `colors` with the color map sampled at `colors.len()`
    /// equidistant positions and return the number of colors that had
    /// to be clipped to the sRGB gamut.  `colors.len()` must be ≥ 2.
    fn generate(&self, colors: &mut [RGB8]) -> usize;

    fn typ(&self) -> PaletteType;
}

/// Set `colors[i]` to `f(i, t)` with `t = i/(n-1)` clipped to the
/// sRGB gamut.  Returns the number of clipped colors.
pub(crate) fn fill<F>(colors: &mut [RGB8], mut f: F) -> usize
where F: FnMut(usize, f64) -> RGB<f64> {
    let last = (colors.len().max(2) - 1) as f64;
    let mut clipped = 0;
    for (i, c) in colors.iter_mut().enumerate() {
        let (rgb, was_clipped) = space::clip(f(i, i as f64 / last));
        *c = rgb;
        clipped += was_clipped as usize;
    }
    clipped
}

/// Side of a diverging map index `i` belongs to: `Some(0)` for the
/// first half, `Some(1)` for the second one and `None` for the exact
/// center (only when `n` is odd).
pub(crate) fn branch(i: usize, n: usize) -> Option<usize> {
    match (2 * i + 1).cmp(&n) {
        Ordering::Less => Some(0),
        Ordering::Greater => Some(1),
        Ordering::Equal => None,
    }
}

/// Hue increment between consecutive colors of a qualitative map of
/// `n` colors spread over `divergence` radians.  A full turn is split
/// in `n` so the first hue is not repeated at the end.
pub(crate) fn hue_step(divergence: f64, n: usize) -> f64 {
    if divergence >= space::TWO_PI - 1e-6 {
        space::TWO_PI / n as f64
    } else {
        divergence / (n.max(2) - 1) as f64
    }
}

/// A color map family with its fully resolved parameters.  Angles are
/// in radians.
///
/// ```
/// use gencolormap::{ColorMap, CubeHelix};
/// let map = ColorMap::CubeHelix(CubeHelix {
///     hue: 0.5, rotations: -1.5, saturation: 1., gamma: 1. });
/// let p = map.generate(8)?;
/// assert_eq!(p.as_bytes().len(), 24);
/// # Ok::<(), gencolormap::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMap {
    BrewerSequential(BrewerSequential),
    BrewerDiverging(BrewerDiverging),
    BrewerQualitative(BrewerQualitative),
    PuSequentialLightness(PuSequentialLightness),
    PuSequentialSaturation(PuSequentialSaturation),
    PuSequentialRainbow(PuSequentialRainbow),
    PuSequentialBlackBody(PuSequentialBlackBody),
    PuDivergingLightness(PuDivergingLightness),
    PuDivergingSaturation(PuDivergingSaturation),
    PuQualitativeHue(PuQualitativeHue),
    CubeHelix(CubeHelix),
    Moreland(Moreland),
    McNames(McNames),
}

impl ColorMap {
    fn generator(&self) -> &dyn Generator {
        match self {
            Self::BrewerSequential(g) => g,
            Self::BrewerDiverging(g) => g,
            Self::BrewerQualitative(g) => g,
            Self::PuSequentialLightness(g) => g,
            Self::PuSequentialSaturation(g) => g,
            Self::PuSequentialRainbow(g) => g,
            Self::PuSequentialBlackBody(g) => g,
            Self::PuDivergingLightness(g) => g,
            Self::PuDivergingSaturation(g) => g,
            Self::PuQualitativeHue(g) => g,
            Self::CubeHelix(g) => g,
            Self::Moreland(g) => g,
            Self::McNames(g) => g,
        }
    }

    /// Name of the family on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BrewerSequential(_) => "brewer-sequential",
            Self::BrewerDiverging(_) => "brewer-diverging",
            Self::BrewerQualitative(_) => "brewer-qualitative",
            Self::PuSequentialLightness(_) => "pusequential-lightness",
            Self::PuSequentialSaturation(_) => "pusequential-saturation",
            Self::PuSequentialRainbow(_) => "pusequential-rainbow",
            Self::PuSequentialBlackBody(_) => "pusequential-blackbody",
            Self::PuDivergingLightness(_) => "pudiverging-lightness",
            Self::PuDivergingSaturation(_) => "pudiverging-saturation",
            Self::PuQualitativeHue(_) => "puqualitative-hue",
            Self::CubeHelix(_) => "cubehelix",
            Self::Moreland(_) => "moreland",
            Self::McNames(_) => "mcnames",
        }
    }

    /// Says whether the map is sequential, diverging or qualitative.
    pub fn typ(&self) -> PaletteType { self.generator().typ() }

    /// Generate the color map with `n` colors.  Fails if `n < 2`.
    pub fn generate(&self, n: usize) -> Result<Palette, Error> {
        if n < 2 {
            return Err(Error::TooFewColors(n))
        }
        let mut colors = vec![RGB8::default(); n];
        let clipped = self.generator().generate(&mut colors);
        debug!(family = self.name(), n, clipped, "generated color map");
        Ok(Palette { colors, clipped, typ: self.typ() })
    }
}


#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::space::{Lab, Luv};

    fn catalog() -> Vec<ColorMap> {
        use ColorMap as M;
        vec![
            M::BrewerSequential(BrewerSequential {
                hue: 0., contrast: 0.88, saturation: 0.6, brightness: 0.75,
                warmth: 0.15 }),
            M::BrewerDiverging(BrewerDiverging {
                hue: 0., divergence: 4. * PI / 3., contrast: 0.88,
                saturation: 0.6, brightness: 0.75, warmth: 0.15 }),
            M::BrewerQualitative(BrewerQualitative {
                hue: 0., divergence: 2. * PI, contrast: 0.5,
                saturation: 0.5, brightness: 0.8 }),
            M::PuSequentialLightness(PuSequentialLightness {
                hue: 0., saturation: 0.45, lightness_range: 0.95,
                saturation_range: 0.95 }),
            M::PuSequentialSaturation(PuSequentialSaturation {
                hue: 0., lightness: 0.5, saturation: 0.45,
                saturation_range: 0.95 }),
            M::PuSequentialRainbow(PuSequentialRainbow {
                hue: 0., rotations: -1.5, lightness_range: 0.75,
                saturation: 0.45, saturation_range: 0.5 }),
            M::PuSequentialBlackBody(PuSequentialBlackBody {
                temperature: 1000., range: 6500., saturation: 0.45 }),
            M::PuDivergingLightness(PuDivergingLightness {
                hue: 0., divergence: 4. * PI / 3., saturation: 0.45,
                lightness_range: 0.95, saturation_range: 1. }),
            M::PuDivergingSaturation(PuDivergingSaturation {
                hue: 0., divergence: 4. * PI / 3., lightness: 0.5,
                saturation: 0.45, saturation_range: 0.95 }),
            M::PuQualitativeHue(PuQualitativeHue {
                hue: 0., divergence: 2. * PI, lightness: 0.55,
                saturation: 0.22 }),
            M::CubeHelix(CubeHelix {
                hue: PI / 6., rotations: -1.5, saturation: 1., gamma: 1. }),
            M::Moreland(Moreland {
                color0: RGB8::new(59, 76, 192), color1: RGB8::new(180, 4, 38) }),
            M::McNames(McNames { periods: 2. }),
        ]
    }

    #[test]
    fn all_sizes() {
        for map in catalog() {
            for n in [2, 3, 4, 5, 9, 10, 256] {
                let p = map.generate(n).unwrap();
                assert_eq!(p.len(), n, "{}", map.name());
                assert_eq!(p.as_bytes().len(), 3 * n);
                assert!(p.clipped() <= n);
                assert_eq!(p.typ(), map.typ());
                assert_eq!(p.clone().into_colors(), p.colors());
            }
        }
    }

    #[test]
    fn deterministic() {
        for map in catalog() {
            assert_eq!(map.generate(17).unwrap(), map.generate(17).unwrap());
        }
    }

    #[test]
    fn too_few_colors() {
        for map in catalog() {
            assert!(matches!(map.generate(0), Err(Error::TooFewColors(0))));
            assert!(matches!(map.generate(1), Err(Error::TooFewColors(1))));
        }
    }

    #[test]
    fn names_are_distinct() {
        let mut names: Vec<_> = catalog().iter().map(|m| m.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn types() {
        let typ: Vec<_> = catalog().iter().map(|m| m.typ()).collect();
        use PaletteType::*;
        assert_eq!(typ, vec![Seq, Div, Qual, Seq, Seq, Seq, Seq, Div, Div,
                             Qual, Seq, Div, Seq]);
    }

    #[test]
    fn brewer_sequential_five() {
        let p = catalog()[0].generate(5).unwrap();
        let l: Vec<f64> = p.colors().iter()
            .map(|&c| Lab::from_srgb8(c).l).collect();
        for w in l.windows(2) {
            assert!(w[1] < w[0], "{l:?}");
        }
        assert_eq!(p.clipped(), catalog()[0].generate(5).unwrap().clipped());
    }

    #[test]
    fn diverging_centers_are_neutral() {
        for i in [1, 7, 8] {
            let map = &catalog()[i];
            let p = map.generate(7).unwrap();
            let c = Luv::from_srgb8(p.colors()[3]);
            assert!(c.u.hypot(c.v) < 1., "{}: {c:?}", map.name());
        }
    }

    #[test]
    fn helpers() {
        assert_eq!((0..5).map(|i| branch(i, 5)).collect::<Vec<_>>(),
                   vec![Some(0), Some(0), None, Some(1), Some(1)]);
        assert_eq!((0..4).map(|i| branch(i, 4)).collect::<Vec<_>>(),
                   vec![Some(0), Some(0), Some(1), Some(1)]);
        assert!((hue_step(2. * PI, 4) - PI / 2.).abs() < 1e-12);
        assert!((hue_step(PI, 3) - PI / 2.).abs() < 1e-12);
        let mut colors = [RGB8::default(); 3];
        let mut ts = vec![];
        let clipped = fill(&mut colors, |_, t| {
            ts.push(t);
            RGB { r: t * 2., g: t, b: 0. } });
        assert_eq!(ts, vec![0., 0.5, 1.]);
        assert_eq!(clipped, 1);
        assert_eq!(colors[2], RGB8::new(255, 255, 0));
    }
}
