//! Sequential maps after J. McNames, *An effective color scale for
//! simultaneous color and gray-scale publications*, IEEE Signal
//! Processing Magazine 23(1), 2006: a spiral around the lightness axis
//! of CIELAB, so that the map still reads as a gray ramp when printed
//! without color.

use std::f64::consts::PI;
use rgb::RGB8;
use crate::space::{self, Lch, TWO_PI};
use super::{fill, Generator, PaletteType};

/// Chroma of the spiral at mid lightness, where it is widest.
const MAX_CHROMA: f64 = 40.;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McNames {
    /// Number of turns of the spiral over the map, positive.
    pub periods: f64,
}

/// Largest chroma, up to `c`, of an sRGB color with lightness `l` and
/// hue `h`.
fn gamut_chroma(l: f64, h: f64, c: f64) -> f64 {
    let fits = |c| space::in_gamut(Lch { l, c, h }.to_lab().to_srgb());
    if fits(c) { return c }
    let (mut lo, mut hi) = (0., c);
    for _ in 0 .. 40 {
        let mid = 0.5 * (lo + hi);
        if fits(mid) { lo = mid } else { hi = mid }
    }
    lo
}

impl McNames {
    /// Point of the spiral at `t` ∈ \[0, 1\], before gamut mapping.
    /// The hue turns once per `1/periods` of `phase`.
    fn at(&self, t: f64, phase: f64) -> Lch {
        let h = (TWO_PI * self.periods * phase).rem_euclid(TWO_PI);
        let c = MAX_CHROMA * (PI * t).sin();
        Lch { l: 100. * t, c: c.max(0.), h }
    }
}

impl Generator for McNames {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        // One revolution every n/periods colors.
        let n = colors.len() as f64;
        fill(colors, |i, t| {
            let p = self.at(t, i as f64 / n);
            // Shrink the spiral instead of clipping so lightness stays
            // monotonic.
            let c = gamut_chroma(p.l, p.h, p.c);
            Lch { c, ..p }.to_lab().to_srgb()
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{hue_diff, Lab};

    #[test]
    fn gray_ramp() {
        let mut colors = vec![RGB8::default(); 32];
        let clipped = McNames { periods: 2. }.generate(&mut colors);
        assert_eq!(clipped, 0);
        assert_eq!(colors[0], RGB8::new(0, 0, 0));
        assert_eq!(colors[31], RGB8::new(255, 255, 255));
        let l: Vec<f64> = colors.iter().map(|&c| Lab::from_srgb8(c).l).collect();
        for w in l.windows(2) {
            assert!(w[1] > w[0], "{l:?}");
        }
    }

    #[test]
    fn turns_periods_times() {
        let m = McNames { periods: 2. };
        assert!(hue_diff(m.at(0.3, 0.25).h, m.at(0.8, 0.75).h) < 1e-9);
        assert!((hue_diff(m.at(0.3, 0.25).h, m.at(0.3, 0.5).h) - PI).abs()
                < 1e-9);
        assert_eq!(m.at(0., 0.).c, 0.);
        assert!((m.at(0.5, 0.).c - MAX_CHROMA).abs() < 1e-9);
    }

    #[test]
    fn revolution_every_n_over_periods_colors() {
        // 24 colors, 3 periods: colors 4, 12 and 20 share a hue.
        let mut colors = vec![RGB8::default(); 24];
        McNames { periods: 3. }.generate(&mut colors);
        let hue = |i: usize| Lch::from_lab(Lab::from_srgb8(colors[i])).h;
        assert!(hue_diff(hue(4), hue(12)) < 0.15, "{colors:?}");
        assert!(hue_diff(hue(4), hue(20)) < 0.15, "{colors:?}");
        assert!(hue_diff(hue(4), hue(8)) > 2.5, "{colors:?}");
    }

    #[test]
    fn chroma_fits_gamut() {
        // Saturated blue does not exist at high lightness.
        let h = Lch::from_lab(Lab::from_srgb8(RGB8::new(0, 0, 255))).h;
        let c = gamut_chroma(90., h, 40.);
        assert!(c < 40. && c > 0.);
        assert!(space::in_gamut(Lch { l: 90., c, h }.to_lab().to_srgb()));
        assert_eq!(gamut_chroma(50., 0., 10.), 10.);
    }
}
