//! Interpolation between two colors in a chosen color space.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorError;
use crate::space::{normalize_hue, normalize_name, ColorSpace};
use crate::Color;

/// Color space used by [`blend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum BlendSpace {
    Rgb,
    LinearRgb,
    Hsv,
    Lab,
    #[default]
    Oklab,
    Lch,
    Oklch,
    Xyz,
}

impl BlendSpace {
    pub const ALL: [BlendSpace; 8] = [
        BlendSpace::Rgb,
        BlendSpace::LinearRgb,
        BlendSpace::Hsv,
        BlendSpace::Lab,
        BlendSpace::Oklab,
        BlendSpace::Lch,
        BlendSpace::Oklch,
        BlendSpace::Xyz,
    ];

    /// The coordinate system interpolation runs in.
    pub fn color_space(self) -> ColorSpace {
        match self {
            BlendSpace::Rgb => ColorSpace::Rgb,
            BlendSpace::LinearRgb => ColorSpace::LinearRgb,
            BlendSpace::Hsv => ColorSpace::Hsv,
            BlendSpace::Lab => ColorSpace::Lab,
            BlendSpace::Oklab => ColorSpace::Oklab,
            BlendSpace::Lch => ColorSpace::Lch,
            BlendSpace::Oklch => ColorSpace::Oklch,
            BlendSpace::Xyz => ColorSpace::Xyz,
        }
    }

    pub fn name(self) -> &'static str {
        self.color_space().name()
    }

    /// Below this chroma (or saturation) a color's hue is meaningless and the
    /// other endpoint's hue is used instead.
    fn achromatic_threshold(self) -> f64 {
        match self {
            BlendSpace::Lch => 1e-4,
            BlendSpace::Oklch => 1e-6,
            _ => 1e-9,
        }
    }
}

impl fmt::Display for BlendSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        let key = if key == "linear" { "linearrgb".to_string() } else { key };
        BlendSpace::ALL
            .into_iter()
            .find(|space| normalize_name(space.name()) == key)
            .ok_or_else(|| ColorError::UnknownVariant {
                kind: "blend space",
                name: s.to_string(),
                expected: "rgb, linear-rgb, hsv, lab, oklab, lch, oklch, xyz",
            })
    }
}

impl TryFrom<String> for BlendSpace {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Interpolates from `a` (`t = 0`) to `b` (`t = 1`) in `space`.
///
/// Every coordinate is interpolated linearly except hue, which takes the
/// shorter way around the circle. Alpha is always interpolated linearly. `t`
/// outside `0.0..=1.0` extrapolates; the result is not clamped.
///
/// ```rust
/// use tinct_color::{blend, BlendSpace, Color};
///
/// let mid = blend(Color::BLACK, Color::WHITE, 0.5, BlendSpace::Rgb);
/// assert_eq!(mid.to_hex(), "#808080");
/// ```
pub fn blend(a: Color, b: Color, t: f64, space: BlendSpace) -> Color {
    let cs = space.color_space();
    let from = a.to_space(cs);
    let to = b.to_space(cs);

    let mut coords = [
        lerp(from[0], to[0], t),
        lerp(from[1], to[1], t),
        lerp(from[2], to[2], t),
    ];

    if let Some(hue) = cs.hue_index() {
        // chroma (Lch, Oklch) and saturation (Hsv) both sit at index 1
        let threshold = space.achromatic_threshold();
        let from_gray = from[1].abs() <= threshold;
        let to_gray = to[1].abs() <= threshold;
        let (h1, h2) = match (from_gray, to_gray) {
            (true, false) => (to[hue], to[hue]),
            (false, true) => (from[hue], from[hue]),
            _ => (from[hue], to[hue]),
        };
        coords[hue] = normalize_hue(h1 + shortest_arc(h1, h2) * t);
    }

    Color::from_space(cs, coords, lerp(a.alpha(), b.alpha(), t))
}

impl Color {
    /// Shorthand for [`blend`].
    pub fn blend(self, other: Color, t: f64, space: BlendSpace) -> Color {
        blend(self, other, t, space)
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Signed angle in `-180.0..180.0` taking `from` to `to`.
fn shortest_arc(from: f64, to: f64) -> f64 {
    (to - from + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_same(a: Color, b: Color) {
        for (x, y) in a.components().iter().zip(b.components()) {
            assert!((x - y).abs() < 1e-6, "{:?} vs {:?}", a, b);
        }
        assert!((a.alpha() - b.alpha()).abs() < 1e-12);
    }

    // =====================================================================
    // Endpoints
    // =====================================================================

    #[test]
    fn endpoints_in_every_space() {
        let a = Color::rgb(0.9, 0.2, 0.1).with_alpha(0.3);
        let b = Color::rgb(0.1, 0.5, 0.8);
        for space in BlendSpace::ALL {
            assert_same(blend(a, b, 0.0, space), a);
            assert_same(blend(a, b, 1.0, space), b);
        }
    }

    #[test]
    fn endpoints_through_xyz_keep_zero_channels() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let blue = Color::rgb(0.0, 0.0, 1.0);
        for space in [BlendSpace::Lab, BlendSpace::Lch, BlendSpace::Xyz] {
            let start = blend(red, blue, 0.0, space);
            assert!(start.g().abs() < 1e-9, "{:?}: {:?}", space, start);
            assert!(start.b().abs() < 1e-9, "{:?}: {:?}", space, start);
        }
    }

    #[test]
    fn black_white_midpoint_in_rgb() {
        let mid = blend(Color::BLACK, Color::WHITE, 0.5, BlendSpace::Rgb);
        assert_eq!(mid.to_rgb8(), [128, 128, 128]);
    }

    #[test]
    fn linear_rgb_midpoint_is_lighter() {
        let mid = blend(Color::BLACK, Color::WHITE, 0.5, BlendSpace::LinearRgb);
        // 0.5 linear encodes to ~0.735
        assert_eq!(mid.to_rgb8(), [188, 188, 188]);
    }

    #[test]
    fn alpha_is_linear() {
        let mid = blend(Color::NO_COLOR, Color::WHITE, 0.25, BlendSpace::Lab);
        assert!((mid.alpha() - 0.25).abs() < 1e-12);
    }

    // =====================================================================
    // Hue
    // =====================================================================

    #[test]
    fn hue_takes_the_short_way() {
        // 350° → 10° passes through 0°, not 180°
        let a = Color::from_space(ColorSpace::Hsv, [350.0, 1.0, 1.0], 1.0);
        let b = Color::from_space(ColorSpace::Hsv, [10.0, 1.0, 1.0], 1.0);
        let [h, _, _] = blend(a, b, 0.5, BlendSpace::Hsv).hsv();
        assert!(h < 1e-6 || h > 360.0 - 1e-6, "hue {}", h);
    }

    #[test]
    fn shortest_arc_signs() {
        assert_eq!(shortest_arc(350.0, 10.0), 20.0);
        assert_eq!(shortest_arc(10.0, 350.0), -20.0);
        assert_eq!(shortest_arc(0.0, 90.0), 90.0);
    }

    #[test]
    fn gray_endpoint_borrows_hue() {
        // white has no hue; the blend should stay on blue's hue line
        let blue = Color::rgb(0.0, 0.0, 1.0);
        let [_, _, h_blue] = blue.oklch();
        let [_, c, h] = blend(Color::WHITE, blue, 0.5, BlendSpace::Oklch).oklch();
        assert!(c > 0.05);
        assert!((h - h_blue).abs() < 0.5, "{} vs {}", h, h_blue);
    }

    // =====================================================================
    // Names
    // =====================================================================

    #[test]
    fn names_parse() {
        for space in BlendSpace::ALL {
            assert_eq!(space.to_string().parse::<BlendSpace>().unwrap(), space);
        }
        assert_eq!("linear".parse::<BlendSpace>().unwrap(), BlendSpace::LinearRgb);
        assert_eq!("OkLCh".parse::<BlendSpace>().unwrap(), BlendSpace::Oklch);
        assert!("hsl".parse::<BlendSpace>().is_err());
    }
}
