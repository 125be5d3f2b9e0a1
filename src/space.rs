//! Color spaces used by the generators.
//!
//! Continuous RGB colors are represented by [`RGB<f64>`] with channels
//! nominally in \[0, 1\]; whether they are linear or sRGB-encoded is
//! stated by each function.  CIE XYZ is scaled so that the D65
//! reference white has `Y = 100`.

use std::f64::consts::PI;
use lazy_static::lazy_static;
use rgb::{RGB, RGB8};

pub(crate) const TWO_PI: f64 = 2. * PI;

/// The D65 reference white in CIE XYZ.
pub const D65: Xyz = Xyz { x: 95.047, y: 100.000, z: 108.883 };

lazy_static! {
    /// Chromaticity (u′, v′) of the D65 white.
    static ref D65_UV: (f64, f64) = D65.uv();
}

/// Linear sRGB primaries to CIE XYZ (with `Y` of white equal to 1).
pub(crate) const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

// CIE lightness constants: 6/29, (6/29)³ and 29³/27.
const EPS0: f64 = 6. / 29.;
const EPS: f64 = 216. / 24389.;
const KAPPA: f64 = 24389. / 27.;

/// Normalize the angle `h` to \[0, 2π).
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(TWO_PI);
    if h >= TWO_PI { 0. } else { h }
}

/// Absolute angular distance between two hues, in \[0, π\].
pub fn hue_diff(h0: f64, h1: f64) -> f64 {
    let t = normalize_hue(h1 - h0);
    if t > PI { TWO_PI - t } else { t }
}

/// sRGB transfer curve: encoded value in \[0, 1\] to linear light.
pub fn srgb_to_linear(x: f64) -> f64 {
    if x <= 0.04045 { x / 12.92 }
    else { ((x + 0.055) / 1.055).powf(2.4) }
}

/// Inverse of [`srgb_to_linear`].
pub fn linear_to_srgb(x: f64) -> f64 {
    if x <= 0.0031308 { x * 12.92 }
    else { 1.055 * x.powf(1. / 2.4) - 0.055 }
}

/// Linear-light value of an sRGB byte.
#[inline]
pub fn byte_to_linear(b: u8) -> f64 { srgb_to_linear(b as f64 / 255.) }

/// Encode a linear-light value as an sRGB byte, clamping it to \[0, 255\].
pub fn linear_to_byte(x: f64) -> u8 { to_byte(linear_to_srgb(x)).0 }

/// Round `x ∈ [0, 1]` to a byte.  The flag says whether the rounded
/// value had to be clamped (NaN is clamped to 0).
fn to_byte(x: f64) -> (u8, bool) {
    let v = (255. * x).round();
    if v.is_nan() { (0, true) }
    else if v < 0. { (0, true) }
    else if v > 255. { (255, true) }
    else { (v as u8, false) }
}

/// Convert the sRGB-encoded color `c` to bytes.  The second component
/// is `true` iff at least one channel lay outside the sRGB cube and
/// was clamped onto it.
pub fn clip(c: RGB<f64>) -> (RGB8, bool) {
    let (r, cr) = to_byte(c.r);
    let (g, cg) = to_byte(c.g);
    let (b, cb) = to_byte(c.b);
    (RGB8 { r, g, b }, cr || cg || cb)
}

/// Whether `c` converts to bytes without clamping (see [`clip`]).
pub fn in_gamut(c: RGB<f64>) -> bool { !clip(c).1 }

/// sRGB encoding of a linear color (no clamping).
pub fn linear_to_srgb_rgb(c: RGB<f64>) -> RGB<f64> {
    RGB { r: linear_to_srgb(c.r), g: linear_to_srgb(c.g),
          b: linear_to_srgb(c.b) }
}

/// Linear color of an sRGB color given by bytes.
pub fn srgb8_to_linear(c: RGB8) -> RGB<f64> {
    RGB { r: byte_to_linear(c.r), g: byte_to_linear(c.g),
          b: byte_to_linear(c.b) }
}

/// CIE XYZ color (D65, `Y` of the white point is 100).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// From linear sRGB primaries.
    pub fn from_linear(c: RGB<f64>) -> Xyz {
        let row = |m: [f64; 3]| 100. * (m[0] * c.r + m[1] * c.g + m[2] * c.b);
        Xyz { x: row(SRGB_TO_XYZ[0]), y: row(SRGB_TO_XYZ[1]),
              z: row(SRGB_TO_XYZ[2]) }
    }

    /// To linear sRGB primaries (may lie outside \[0, 1\]).
    pub fn to_linear(&self) -> RGB<f64> {
        let (x, y, z) = (self.x / 100., self.y / 100., self.z / 100.);
        RGB { r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
              g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
              b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z }
    }

    /// Chromaticity coordinates (u′, v′).  Black yields the white
    /// point chromaticity.
    pub fn uv(&self) -> (f64, f64) {
        let d = self.x + 15. * self.y + 3. * self.z;
        if d <= 0. { return *D65_UV }
        (4. * self.x / d, 9. * self.y / d)
    }
}

/// CIE 1976 L\*a\*b\* color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

fn lab_f(t: f64) -> f64 {
    if t > EPS { t.cbrt() } else { 841. / 108. * t + 4. / 29. }
}

fn lab_finv(t: f64) -> f64 {
    if t > EPS0 { t * t * t } else { 108. / 841. * (t - 4. / 29.) }
}

impl Lab {
    pub fn from_xyz(c: Xyz) -> Lab {
        let fx = lab_f(c.x / D65.x);
        let fy = lab_f(c.y / D65.y);
        let fz = lab_f(c.z / D65.z);
        Lab { l: 116. * fy - 16., a: 500. * (fx - fy), b: 200. * (fy - fz) }
    }

    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.) / 116.;
        Xyz { x: D65.x * lab_finv(fy + self.a / 500.),
              y: D65.y * lab_finv(fy),
              z: D65.z * lab_finv(fy - self.b / 200.) }
    }

    pub fn from_srgb8(c: RGB8) -> Lab {
        Lab::from_xyz(Xyz::from_linear(srgb8_to_linear(c)))
    }

    /// sRGB encoding of the color, possibly outside \[0, 1\].
    pub fn to_srgb(&self) -> RGB<f64> {
        linear_to_srgb_rgb(self.to_xyz().to_linear())
    }
}

/// CIE 1976 L\*u\*v\* color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Luv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

impl Luv {
    pub fn from_xyz(c: Xyz) -> Luv {
        let yr = c.y / D65.y;
        let l = if yr <= EPS { KAPPA * yr } else { 116. * yr.cbrt() - 16. };
        let (un, vn) = *D65_UV;
        let (u, v) = c.uv();
        Luv { l, u: 13. * l * (u - un), v: 13. * l * (v - vn) }
    }

    pub fn to_xyz(&self) -> Xyz {
        if self.l <= 0. { return Xyz { x: 0., y: 0., z: 0. } }
        let (un, vn) = *D65_UV;
        let u = self.u / (13. * self.l) + un;
        let v = self.v / (13. * self.l) + vn;
        let y = if self.l <= 8. { D65.y * self.l / KAPPA }
                else { let t = (self.l + 16.) / 116.; D65.y * t * t * t };
        Xyz { x: y * 9. * u / (4. * v),
              y,
              z: y * (12. - 3. * u - 20. * v) / (4. * v) }
    }

    pub fn from_srgb8(c: RGB8) -> Luv {
        Luv::from_xyz(Xyz::from_linear(srgb8_to_linear(c)))
    }

    /// Luv color of an sRGB-encoded color with channels in \[0, 1\].
    pub fn from_srgb(c: RGB<f64>) -> Luv {
        let lin = RGB { r: srgb_to_linear(c.r), g: srgb_to_linear(c.g),
                        b: srgb_to_linear(c.b) };
        Luv::from_xyz(Xyz::from_linear(lin))
    }

    /// sRGB encoding of the color, possibly outside \[0, 1\].
    pub fn to_srgb(&self) -> RGB<f64> {
        linear_to_srgb_rgb(self.to_xyz().to_linear())
    }
}

/// Polar form of [`Lab`] or [`Luv`]: lightness, chroma and hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lch {
    /// The lightness in the range 0. to 100.
    pub l: f64,
    /// The chroma, non-negative.
    pub c: f64,
    /// The hue in radians, in the range 0. to 2π.
    pub h: f64,
}

impl Lch {
    fn from_cartesian(l: f64, x: f64, y: f64) -> Lch {
        Lch { l, c: x.hypot(y), h: normalize_hue(y.atan2(x)) }
    }

    pub fn from_lab(c: Lab) -> Lch { Lch::from_cartesian(c.l, c.a, c.b) }

    pub fn from_luv(c: Luv) -> Lch { Lch::from_cartesian(c.l, c.u, c.v) }

    pub fn to_lab(&self) -> Lab {
        Lab { l: self.l, a: self.c * self.h.cos(), b: self.c * self.h.sin() }
    }

    pub fn to_luv(&self) -> Luv {
        Luv { l: self.l, u: self.c * self.h.cos(), v: self.c * self.h.sin() }
    }
}

/// CIELUV lightness, saturation (chroma relative to lightness) and hue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lsh {
    pub l: f64,
    pub s: f64,
    pub h: f64,
}

impl Lsh {
    pub fn from_lch(c: Lch) -> Lsh {
        Lsh { l: c.l, s: c.c / c.l.max(1e-8), h: c.h }
    }

    pub fn to_lch(&self) -> Lch {
        Lch { l: self.l, c: self.s * self.l, h: normalize_hue(self.h) }
    }

    pub fn to_luv(&self) -> Luv { self.to_lch().to_luv() }
}

/// Moreland's polar form of [`Lab`]: magnitude, angle from the
/// lightness axis and hue (in (-π, π\]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Msh {
    pub m: f64,
    pub s: f64,
    pub h: f64,
}

impl Msh {
    pub fn from_lab(c: Lab) -> Msh {
        let m = (c.l * c.l + c.a * c.a + c.b * c.b).sqrt();
        let s = if m > 0.001 { (c.l / m).acos() } else { 0. };
        let h = if s > 0.001 { c.b.atan2(c.a) } else { 0. };
        Msh { m, s, h }
    }

    pub fn to_lab(&self) -> Lab {
        Lab { l: self.m * self.s.cos(),
              a: self.m * self.s.sin() * self.h.cos(),
              b: self.m * self.s.sin() * self.h.sin() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn close(x: f64, y: f64, rel: f64) -> bool {
        (x - y).abs() <= rel * x.abs().max(y.abs()).max(1.)
    }

    /// A grid of in-gamut XYZ colors (black excluded).
    fn gamut_grid() -> Vec<Xyz> {
        let steps = [0., 0.02, 0.1, 0.25, 0.5, 0.75, 0.9, 1.];
        let mut v = vec![];
        for &r in &steps { for &g in &steps { for &b in &steps {
            if r + g + b > 0. {
                v.push(Xyz::from_linear(RGB { r, g, b }));
            }
        }}}
        v
    }

    #[test]
    fn srgb_byte_roundtrip() {
        for b in 0 ..= 255u8 {
            assert_eq!(linear_to_byte(byte_to_linear(b)), b);
        }
    }

    #[test]
    fn srgb_curve_is_continuous_at_breakpoint() {
        let below = 0.04045 / 12.92;
        let above = ((0.04045f64 + 0.055) / 1.055).powf(2.4);
        assert!((below - above).abs() < 1e-6, "{below} ≉ {above}");
    }

    #[test]
    fn lab_roundtrip() {
        for c in gamut_grid() {
            let d = Lab::from_xyz(c).to_xyz();
            assert!(close(c.x, d.x, 1e-6) && close(c.y, d.y, 1e-6)
                    && close(c.z, d.z, 1e-6), "{c:?} ≉ {d:?}");
        }
    }

    #[test]
    fn luv_roundtrip() {
        for c in gamut_grid() {
            let d = Luv::from_xyz(c).to_xyz();
            assert!(close(c.x, d.x, 1e-6) && close(c.y, d.y, 1e-6)
                    && close(c.z, d.z, 1e-6), "{c:?} ≉ {d:?}");
        }
    }

    #[test]
    fn white_and_black() {
        let w = Luv::from_srgb8(RGB8::new(255, 255, 255));
        assert!((w.l - 100.).abs() < 1e-3 && w.u.abs() < 1e-3
                && w.v.abs() < 1e-3, "{w:?}");
        let w = Lab::from_srgb8(RGB8::new(255, 255, 255));
        assert!((w.l - 100.).abs() < 1e-3 && w.a.abs() < 1e-3
                && w.b.abs() < 1e-3, "{w:?}");
        let k = Luv::from_srgb8(RGB8::new(0, 0, 0));
        assert_eq!((k.l, k.u, k.v), (0., 0., 0.));
        assert_eq!(Luv { l: 0., u: 0., v: 0. }.to_xyz(),
                   Xyz { x: 0., y: 0., z: 0. });
    }

    #[test]
    fn polar_forms() {
        let lab = Lab { l: 50., a: -20., b: -30. };
        let lch = Lch::from_lab(lab);
        assert!(lch.h >= 0. && lch.h < TWO_PI);
        let back = lch.to_lab();
        assert!(close(lab.a, back.a, 1e-12) && close(lab.b, back.b, 1e-12));
        let msh = Msh::from_lab(lab);
        let back = msh.to_lab();
        assert!(close(lab.l, back.l, 1e-12) && close(lab.a, back.a, 1e-12)
                && close(lab.b, back.b, 1e-12));
        let lsh = Lsh::from_lch(lch);
        assert!(close(lsh.to_lch().c, lch.c, 1e-12));
    }

    #[test]
    fn hue_helpers() {
        assert_eq!(normalize_hue(-1e-20), 0.);
        assert!((normalize_hue(-PI / 2.) - 1.5 * PI).abs() < 1e-12);
        assert!((hue_diff(0.1, TWO_PI - 0.1) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn clipping() {
        assert_eq!(clip(RGB { r: 0., g: 0.5, b: 1. }),
                   (RGB8::new(0, 128, 255), false));
        assert_eq!(clip(RGB { r: -0.001, g: 0., b: 1.001 }),
                   (RGB8::new(0, 0, 255), false));
        assert_eq!(clip(RGB { r: -0.1, g: 0., b: 0. }).1, true);
        assert_eq!(clip(RGB { r: 0., g: 1.1, b: 0. }),
                   (RGB8::new(0, 255, 0), true));
        assert_eq!(clip(RGB { r: f64::NAN, g: 0., b: 0. }),
                   (RGB8::new(0, 0, 0), true));
        assert!(in_gamut(RGB { r: 1.001, g: 0.5, b: 0. }));
        assert!(!in_gamut(RGB { r: 0.5, g: -0.01, b: 0. }));
    }
}
