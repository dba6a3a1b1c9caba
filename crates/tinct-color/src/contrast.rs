//! Relative luminance and auto-contrast text color.

use crate::space::srgb_to_linear;
use crate::Color;

/// Luminance above which black text reads better than white. This is where
/// the WCAG contrast ratios against black and against white cross.
pub const LUMINANCE_THRESHOLD: f64 = 0.179;

impl Color {
    /// WCAG relative luminance, `0.0` (black) to `1.0` (white). Alpha is ignored.
    pub fn relative_luminance(self) -> f64 {
        let [r, g, b] = self.clamped().components().map(srgb_to_linear);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Black or white, whichever is more legible on top of this color.
    pub fn readable_foreground(self) -> Color {
        if self.relative_luminance() > LUMINANCE_THRESHOLD {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`. Order does not matter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_extremes() {
        assert_eq!(Color::BLACK.relative_luminance(), 0.0);
        assert!((Color::WHITE.relative_luminance() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn readable_foreground_flips_at_threshold() {
        assert_eq!(Color::WHITE.readable_foreground(), Color::BLACK);
        assert_eq!(Color::BLACK.readable_foreground(), Color::WHITE);
        // pure yellow is bright, pure blue is dark
        assert_eq!(Color::rgb(1.0, 1.0, 0.0).readable_foreground(), Color::BLACK);
        assert_eq!(Color::rgb(0.0, 0.0, 1.0).readable_foreground(), Color::WHITE);
    }

    #[test]
    fn mid_gray_gets_black_text() {
        // #808080 has luminance ~0.216
        assert_eq!(Color::from_rgb8(128, 128, 128).readable_foreground(), Color::BLACK);
        // #707070 has luminance ~0.162
        assert_eq!(Color::from_rgb8(112, 112, 112).readable_foreground(), Color::WHITE);
    }

    #[test]
    fn contrast_ratio_bounds() {
        assert!((contrast_ratio(Color::BLACK, Color::WHITE) - 21.0).abs() < 1e-9);
        assert_eq!(contrast_ratio(Color::WHITE, Color::WHITE), 1.0);
        let a = Color::rgb(0.2, 0.5, 0.7);
        assert_eq!(contrast_ratio(a, Color::BLACK), contrast_ratio(Color::BLACK, a));
    }
}
