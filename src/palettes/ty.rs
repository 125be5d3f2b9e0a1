use rgb::{ComponentBytes, RGB8};

/// Type of color map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high.  Lightness steps dominate the look of these
    /// schemes.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.  The critical class in the middle is emphasized with a
    /// neutral color and the extremes with contrasting hues.
    Div,
    /// Qualitative color scheme.  They do not imply magnitude
    /// differences between classes, and hues are used to create the
    /// primary visual differences between classes.
    Qual
}

/// A generated color map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub(crate) colors: Vec<RGB8>, // Invariant: length ≥ 2
    pub(crate) clipped: usize,
    pub(crate) typ: PaletteType,
}

impl Palette {
    /// Returns the number of colors in the palette (at least 2).
    pub fn len(&self) -> usize { self.colors.len() }

    /// Says whether the palette is `Seq`uential, `Div`ergent or
    /// `Qual`itative.
    pub fn typ(&self) -> PaletteType { self.typ }

    /// Number of colors that lay outside the sRGB gamut and had to be
    /// clipped.  Always ≤ [`Palette::len`].
    pub fn clipped(&self) -> usize { self.clipped }

    /// The colors, from the first to the last one of the scale.
    pub fn colors(&self) -> &[RGB8] { &self.colors }

    /// The colors as `3 * len()` bytes `r, g, b, r, g, b, ...`.
    pub fn as_bytes(&self) -> &[u8] { self.colors.as_slice().as_bytes() }

    /// Consume the palette, returning its colors.
    pub fn into_colors(self) -> Vec<RGB8> { self.colors }
}
