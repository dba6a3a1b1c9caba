//! Alpha compositing.

use crate::Color;

/// Gamma used when the caller passes zero (or any non-positive value).
pub const DEFAULT_GAMMA: f64 = 2.2;

/// Composites `fg` over `bg` with the Porter-Duff "over" operator.
///
/// Channels are decoded with a simple power-law `gamma` before mixing and
/// re-encoded afterwards, so blending happens in linear light. The result is
/// straight (not premultiplied) alpha: `alpha = fg.alpha + bg.alpha · (1 −
/// fg.alpha)`. A fully transparent result is [`Color::NO_COLOR`].
///
/// The mixed channels are divided by that output alpha. Over an opaque `bg`
/// the division is by one and this is the plain weighted sum; over a
/// translucent `bg` the undivided sum would be a premultiplied color, so the
/// two formulas differ there.
///
/// `bg` may itself be translucent; layering more than two colors is a matter
/// of applying `over` repeatedly.
///
/// ```rust
/// use tinct_color::{over, Color};
///
/// let half_white = Color::WHITE.with_alpha(0.5);
/// let mixed = over(half_white, Color::BLACK, 1.0);
/// assert_eq!(mixed.to_hex(), "#808080");
/// ```
pub fn over(fg: Color, bg: Color, gamma: f64) -> Color {
    let gamma = if gamma.is_finite() && gamma > 0.0 {
        gamma
    } else {
        DEFAULT_GAMMA
    };
    let fg = fg.clamped();
    let bg = bg.clamped();
    let (a_fg, a_bg) = (fg.alpha(), bg.alpha());

    let a_out = (a_fg + a_bg * (1.0 - a_fg)).min(1.0);
    if a_out <= 0.0 {
        return Color::NO_COLOR;
    }

    let mix = |f: f64, b: f64| {
        let linear = (f.powf(gamma) * a_fg + b.powf(gamma) * a_bg * (1.0 - a_fg)) / a_out;
        linear.powf(gamma.recip()).clamp(0.0, 1.0)
    };
    Color::new(
        mix(fg.r(), bg.r()),
        mix(fg.g(), bg.g()),
        mix(fg.b(), bg.b()),
        a_out,
    )
}

impl Color {
    /// Shorthand for [`over`]: `self` composited over `background`.
    pub fn over(self, background: Color, gamma: f64) -> Color {
        over(self, background, gamma)
    }
}
