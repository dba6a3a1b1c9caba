//! Horizontal gradient strips.

use tinct_color::{blend, BlendSpace, Color};

use crate::ansi::{paint, RESET};

/// The colors of a `width`-cell gradient from `from` to `to`.
///
/// Cell `i` samples `t = i / (width - 1)`, so both endpoints are included.
/// A width of 0 or 1 yields the single sample `from`.
pub fn gradient_samples(from: Color, to: Color, width: usize, space: BlendSpace) -> Vec<Color> {
    if width <= 1 {
        return vec![blend(from, to, 0.0, space)];
    }
    let last = (width - 1) as f64;
    (0..width)
        .map(|i| blend(from, to, i as f64 / last, space))
        .collect()
}

/// One space per sample, each painted with the sample as background, then a
/// single trailing reset.
///
/// ```rust
/// use tinct_color::{BlendSpace, Color};
/// use tinct_render::gradient;
///
/// let strip = gradient(Color::BLACK, Color::WHITE, 3, BlendSpace::Rgb);
/// assert_eq!(strip.matches(' ').count(), 3);
/// assert!(strip.ends_with("\x1b[0m"));
/// ```
pub fn gradient(from: Color, to: Color, width: usize, space: BlendSpace) -> String {
    let mut out = String::new();
    for color in gradient_samples(from, to, width, space) {
        out.push_str(&paint(color));
        out.push(' ');
    }
    out.push_str(RESET);
    out
}
