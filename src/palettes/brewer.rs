//! Brewer-like color maps.
//!
//! The construction follows M. Wijffelaars, R. Vliegen, J.J. van Wijk,
//! E.-J. van der Linden, *Generating color palettes using intuitive
//! parameters*, Computer Graphics Forum 27(3), 2008.  All computations
//! take place in CIELUV.

use lazy_static::lazy_static;
use rgb::{RGB, RGB8};
use tracing::trace;
use crate::space::{self, Lch, Luv, D65, SRGB_TO_XYZ};
use super::{branch, fill, hue_step, Generator, PaletteType};

lazy_static! {
    /// CIELUV hues of red, yellow, green, cyan, blue and magenta (in
    /// increasing order).
    static ref PRIMARY_HUES: [f64; 6] = [
        [1., 0., 0.], [1., 1., 0.], [0., 1., 0.],
        [0., 1., 1.], [0., 0., 1.], [1., 0., 1.],
    ].map(|[r, g, b]| Lch::from_luv(Luv::from_srgb(RGB { r, g, b })).h);

    static ref YELLOW: Luv = Luv::from_srgb(RGB { r: 1., g: 1., b: 0. });
}

const BLACK: Luv = Luv { l: 0., u: 0., v: 0. };
const WHITE: Luv = Luv { l: 100., u: 0., v: 0. };

/// Most saturated sRGB color (encoded, channels in \[0, 1\]) of the
/// CIELUV hue `hue`.  One channel is 0, one is 1 and the third is
/// found by solving the linear constraint on (u′, v′) for that hue.
fn most_saturated(hue: f64) -> RGB<f64> {
    let h = &*PRIMARY_HUES;
    // (computed channel, zero channel, full channel)
    let (i, j, k) = {
        if hue < h[0] { (2, 1, 0) }
        else if hue < h[1] { (1, 2, 0) }
        else if hue < h[2] { (0, 2, 1) }
        else if hue < h[3] { (2, 0, 1) }
        else if hue < h[4] { (1, 0, 2) }
        else if hue < h[5] { (0, 1, 2) }
        else { (2, 1, 0) } };
    let m = &SRGB_TO_XYZ;
    let alpha = -hue.sin();
    let beta = hue.cos();
    let (un, vn) = D65.uv();
    let t = alpha * un + beta * vn;
    let q = |c: usize| {
        t * (m[0][c] + 15. * m[1][c] + 3. * m[2][c])
            - (4. * alpha * m[0][c] + 9. * beta * m[1][c]) };
    let x = -q(k) / q(i);
    let mut srgb = [0.; 3];
    srgb[j] = 0.;
    srgb[k] = 1.;
    srgb[i] = if x.is_finite() { space::linear_to_srgb(x.clamp(0., 1.)) }
              else { 0. };
    RGB { r: srgb[0], g: srgb[1], b: srgb[2] }
}

/// Estimate of the largest in-gamut chroma at lightness `l` for the
/// hue of `msc` (the most saturated color), using the triangle
/// black – `msc` – white of the gamut slice.
fn max_chroma(l: f64, msc: Lch) -> f64 {
    let c = if l <= msc.l { msc.c * l / msc.l.max(1e-8) }
            else { msc.c * (100. - l) / (100. - msc.l).max(1e-8) };
    c.max(0.)
}

/// Lightness at position `t` from the dark (0) to the light (1) end.
fn lightness(t: f64, contrast: f64, brightness: f64) -> f64 {
    125. - 125. * 0.2f64.powf((1. - contrast) * brightness + t * contrast)
}

/// White tinted toward yellow by `warmth`.
fn warm_white(warmth: f64) -> Luv { lerp(WHITE, *YELLOW, warmth.clamp(0., 1.)) }

fn lerp(a: Luv, b: Luv, t: f64) -> Luv {
    Luv { l: a.l + t * (b.l - a.l),
          u: a.u + t * (b.u - a.u),
          v: a.v + t * (b.v - a.v) }
}

fn bezier(b0: Luv, b1: Luv, b2: Luv, t: f64) -> Luv {
    let (a, b, c) = ((1. - t) * (1. - t), 2. * (1. - t) * t, t * t);
    Luv { l: a * b0.l + b * b1.l + c * b2.l,
          u: a * b0.u + b * b1.u + c * b2.u,
          v: a * b0.v + b * b1.v + c * b2.v }
}

/// Parameter in \[0, 1\] at which the quadratic Bézier curve with
/// monotone control values `b0 ≤ b1 ≤ b2` takes the value `v`.
fn inv_bezier(b0: f64, b1: f64, b2: f64, v: f64) -> f64 {
    let a = b0 - 2. * b1 + b2;
    let t = {
        if a.abs() > 1e-9 {
            (b0 - b1 + (b1 * b1 - b0 * b2 + a * v).max(0.).sqrt()) / a
        } else if (b1 - b0).abs() > 1e-12 {
            (v - b0) / (2. * (b1 - b0))
        } else { 0. } };
    t.clamp(0., 1.)
}

/// The path from black to a light end point through the most
/// saturated color of a hue, as two quadratic Bézier segments.
struct Curve {
    p0: Luv,
    q0: Luv,
    q1: Luv,
    q2: Luv,
    p2: Luv,
}

impl Curve {
    /// `light` is the end point of the curve and `warm` the light point
    /// the upper control point is pulled from (they differ only for
    /// diverging maps, whose light end must be neutral).
    fn new(hue: f64, light: Luv, warm: Luv, saturation: f64) -> Curve {
        let s = saturation.clamp(0., 1.);
        let p1 = Luv::from_srgb(most_saturated(hue));
        let q0 = lerp(BLACK, p1, s);
        let q2 = lerp(warm, p1, s);
        Curve { p0: BLACK, q0, q1: lerp(q0, q2, 0.5), q2, p2: light }
    }

    /// The point of the curve with lightness `l`.
    fn at_lightness(&self, l: f64) -> Luv {
        if l <= self.q1.l {
            let t = inv_bezier(self.p0.l, self.q0.l, self.q1.l, l);
            bezier(self.p0, self.q0, self.q1, t)
        } else {
            let t = inv_bezier(self.q1.l, self.q2.l, self.p2.l, l);
            bezier(self.q1, self.q2, self.p2, t)
        }
    }
}

/// Single hue sequential map going from light to dark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrewerSequential {
    /// Hue in radians.
    pub hue: f64,
    /// Lightness range, in \[0, 1\].
    pub contrast: f64,
    /// In \[0, 1\].
    pub saturation: f64,
    /// In \[0, 1\].
    pub brightness: f64,
    /// Yellow tint of the light end, in \[0, 1\].
    pub warmth: f64,
}

impl Generator for BrewerSequential {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let light = warm_white(self.warmth);
        let curve = Curve::new(space::normalize_hue(self.hue), light, light,
                               self.saturation);
        fill(colors, |_, t| {
            let l = lightness(1. - t, self.contrast, self.brightness);
            curve.at_lightness(l).to_srgb()
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Seq }
}

/// Two sequential branches joined at a light neutral center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrewerDiverging {
    /// Hue of the first half, in radians.
    pub hue: f64,
    /// Hue of the second half minus `hue`, in radians.
    pub divergence: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub warmth: f64,
}

impl Generator for BrewerDiverging {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let warm = warm_white(self.warmth);
        let center = Luv { l: warm.l, u: 0., v: 0. };
        let hues = [space::normalize_hue(self.hue),
                    space::normalize_hue(self.hue + self.divergence)];
        let curves = hues.map(|h| Curve::new(h, center, warm, self.saturation));
        let n = colors.len();
        fill(colors, |i, t| {
            let Some(side) = branch(i, n) else { return center.to_srgb() };
            // Distance to the center: 0 at the center, 1 at both ends.
            let u = (2. * t - 1.).abs();
            let l = lightness(1. - u, self.contrast, self.brightness);
            let ends = curves.each_ref().map(|c| Lch::from_luv(c.at_lightness(l)));
            let c = ends[0].c.min(ends[1].c);
            Lch { c, ..ends[side] }.to_luv().to_srgb()
        })
    }

    fn typ(&self) -> PaletteType { PaletteType::Div }
}

/// Evenly spaced hues of equal lightness and chroma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrewerQualitative {
    /// Hue of the first color, in radians.
    pub hue: f64,
    /// Width of the hue arc, in radians.
    pub divergence: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Generator for BrewerQualitative {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let n = colors.len();
        let step = hue_step(self.divergence, n);
        let hues: Vec<f64> = (0 .. n)
            .map(|i| space::normalize_hue(self.hue + i as f64 * step))
            .collect();
        let l = lightness(0.5, self.contrast, self.brightness);
        let c = self.saturation.clamp(0., 1.) * hues.iter()
            .map(|&h| max_chroma(l, Lch::from_luv(Luv::from_srgb(most_saturated(h)))))
            .fold(f64::INFINITY, f64::min);
        trace!(lightness = l, chroma = c, "brewer qualitative");
        fill(colors, |i, _| Lch { l, c, h: hues[i] }.to_luv().to_srgb())
    }

    fn typ(&self) -> PaletteType { PaletteType::Qual }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::{hue_diff, Lab};
    use std::f64::consts::PI;

    fn seq() -> BrewerSequential {
        BrewerSequential { hue: 0., contrast: 0.64, saturation: 0.6,
                           brightness: 0.75, warmth: 0.15 }
    }

    #[test]
    fn most_saturated_has_requested_hue() {
        for k in 0 .. 36 {
            let hue = k as f64 * PI / 18.;
            let c = most_saturated(hue);
            let lch = Lch::from_luv(Luv::from_srgb(c));
            assert!(hue_diff(lch.h, hue) < 1e-6, "{hue}: {lch:?}");
            let channels = [c.r, c.g, c.b];
            assert!(channels.iter().any(|&x| x == 0.));
            assert!(channels.iter().any(|&x| x == 1.));
        }
    }

    #[test]
    fn inverse_bezier() {
        for (b0, b1, b2) in [(0., 1., 4.), (0., 3., 4.), (10., 20., 30.)] {
            for k in 0 ..= 10 {
                let t = k as f64 / 10.;
                let v = (1. - t) * (1. - t) * b0 + 2. * (1. - t) * t * b1
                    + t * t * b2;
                assert!((inv_bezier(b0, b1, b2, v) - t).abs() < 1e-9);
            }
        }
        assert_eq!(inv_bezier(5., 5., 5., 5.), 0.);
    }

    #[test]
    fn sequential_gets_darker() {
        let mut colors = vec![RGB8::default(); 5];
        seq().generate(&mut colors);
        let l: Vec<f64> = colors.iter().map(|&c| Lab::from_srgb8(c).l).collect();
        for w in l.windows(2) {
            assert!(w[0] > w[1], "{l:?}");
        }
    }

    #[test]
    fn sequential_light_end_is_warm() {
        let mut cold = vec![RGB8::default(); 2];
        let mut warm = vec![RGB8::default(); 2];
        BrewerSequential { warmth: 0., ..seq() }.generate(&mut cold);
        BrewerSequential { warmth: 1., ..seq() }.generate(&mut warm);
        // More yellow: blue channel drops relative to red.
        assert!(warm[0].b < cold[0].b, "{cold:?} vs {warm:?}");
    }

    #[test]
    fn diverging_is_symmetric() {
        let div = BrewerDiverging { hue: 0.5, divergence: 4. * PI / 3.,
                                    contrast: 0.88, saturation: 0.6,
                                    brightness: 0.75, warmth: 0.15 };
        let n = 9;
        let mut colors = vec![RGB8::default(); n];
        div.generate(&mut colors);
        let center = Lab::from_srgb8(colors[n / 2]);
        assert!(center.a.abs() < 1. && center.b.abs() < 1., "{center:?}");
        for k in 0 .. n / 2 {
            let a = Lab::from_srgb8(colors[k]);
            let b = Lab::from_srgb8(colors[n - 1 - k]);
            assert!((a.l - b.l).abs() < 1.5, "{k}: {a:?} {b:?}");
            assert!(a.l < center.l);
        }
    }

    #[test]
    fn qualitative_matches_lightness() {
        let qual = BrewerQualitative { hue: 0., divergence: 2. * PI,
                                       contrast: 0.5, saturation: 0.5,
                                       brightness: 0.6 };
        let mut colors = vec![RGB8::default(); 6];
        let clipped = qual.generate(&mut colors);
        assert!(clipped <= 6);
        let lch: Vec<Lch> = colors.iter()
            .map(|&c| Lch::from_luv(Luv::from_srgb8(c))).collect();
        for c in &lch {
            assert!((c.l - lch[0].l).abs() < 1., "{lch:?}");
        }
        for w in lch.windows(2) {
            assert!(hue_diff(w[0].h, w[1].h) > 0.5, "{lch:?}");
        }
    }
}
