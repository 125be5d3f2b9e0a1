//! Diverging maps of K. Moreland, *Diverging Color Maps for Scientific
//! Visualization*, ISVC 2009.  Interpolation happens in Msh, the
//! polar form of CIELAB.

use std::f64::consts::PI;
use rgb::RGB8;
use crate::space::{hue_diff, Lab, Msh, TWO_PI};
use super::{fill, Generator, PaletteType};

/// Below this polar angle a color is considered unsaturated.
const UNSATURATED: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moreland {
    /// First color of the map.
    pub color0: RGB8,
    /// Last color of the map.
    pub color1: RGB8,
}

/// Hue for an unsaturated color of magnitude `m` so that the path from
/// it to the saturated color `sat` does not turn sharply.
fn adjust_hue(sat: Msh, m: f64) -> f64 {
    if sat.m >= m { return sat.h }
    let spin = sat.s * (m * m - sat.m * sat.m).sqrt()
        / (sat.m * sat.s.sin());
    if sat.h > -PI / 3. { sat.h + spin } else { sat.h - spin }
}

fn interpolate(mut a: Msh, mut b: Msh, mut t: f64) -> Msh {
    // Insert a neutral midpoint between distinct saturated colors.
    if a.s > UNSATURATED && b.s > UNSATURATED && hue_diff(a.h, b.h) > PI / 3. {
        let mid = Msh { m: a.m.max(b.m).max(88.), s: 0., h: 0. };
        if t < 0.5 { b = mid; t *= 2. }
        else { a = mid; t = 2. * t - 1. }
    }
    if a.s < UNSATURATED && b.s > UNSATURATED {
        a.h = adjust_hue(b, a.m);
    } else if b.s < UNSATURATED && a.s > UNSATURATED {
        b.h = adjust_hue(a, b.m);
    }
    // Turn the short way around the hue circle.
    let dh = {
        let d = b.h - a.h;
        if d > PI { d - TWO_PI } else if d < -PI { d + TWO_PI } else { d } };
    Msh { m: (1. - t) * a.m + t * b.m,
          s: (1. - t) * a.s + t * b.s,
          h: a.h + t * dh }
}

impl Generator for Moreland {
    fn generate(&self, colors: &mut [RGB8]) -> usize {
        let a = Msh::from_lab(Lab::from_srgb8(self.color0));
        let b = Msh::from_lab(Lab::from_srgb8(self.color1));
        fill(colors, |_, t| interpolate(a, b, t).to_lab().to_srgb())
    }

    fn typ(&self) -> PaletteType { PaletteType::Div }
}
