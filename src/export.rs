//! Serialization of color maps as CSV, JSON or PPM.

use std::fmt::Write;
use rgb::{ComponentBytes, RGB8};
use crate::Result;

/// One `r, g, b` line per color.
///
/// ```
/// use gencolormap::{export, RGB8};
/// let csv = export::to_csv(&[RGB8::new(0, 128, 255), RGB8::new(1, 2, 3)]);
/// assert_eq!(csv, "0, 128, 255\n1, 2, 3\n");
/// ```
pub fn to_csv(colors: &[RGB8]) -> String {
    let mut s = String::with_capacity(colors.len() * 14);
    for c in colors {
        // Writing to a `String` cannot fail.
        let _ = writeln!(s, "{}, {}, {}", c.r, c.g, c.b);
    }
    s
}

/// A JSON array of `[r, g, b]` arrays, followed by a newline.
pub fn to_json(colors: &[RGB8]) -> Result<String> {
    let triples: Vec<[u8; 3]> = colors.iter().map(|c| [c.r, c.g, c.b])
        .collect();
    let mut s = serde_json::to_string(&triples)?;
    s.push('\n');
    Ok(s)
}

/// A binary PPM image (`P6`) of one row of `colors.len()` pixels.
pub fn to_ppm(colors: &[RGB8]) -> Vec<u8> {
    let mut ppm = format!("P6\n{} 1\n255\n", colors.len()).into_bytes();
    ppm.extend_from_slice(colors.as_bytes());
    ppm
}
