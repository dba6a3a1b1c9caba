//! [`Color`] → text.
//!
//! Every representation produced here parses back through
//! [`parse_color`](crate::parse_color), up to the rounding the numeric rule
//! applies.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ColorError;
use crate::space::{normalize_name, ColorSpace};
use crate::Color;

/// Output notation for [`Color::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Representation {
    /// `#rrggbb` or `#rrggbbaa`
    #[default]
    Hex,
    /// `rgb(R G B)` with channels in `0..=255`
    Rgb,
    /// `hsl(H S% L%)`
    Hsl,
    /// `lab(L% a b)`
    Lab,
    /// `lch(L% C H)`
    Lch,
    /// `oklab(L% a b)`
    Oklab,
    /// `oklch(L% C H)`
    Oklch,
    /// `xyz(X Y Z)`, D65
    Xyz,
}

impl Representation {
    pub const ALL: [Representation; 8] = [
        Representation::Hex,
        Representation::Rgb,
        Representation::Hsl,
        Representation::Lab,
        Representation::Lch,
        Representation::Oklab,
        Representation::Oklch,
        Representation::Xyz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Representation::Hex => "hex",
            Representation::Rgb => "rgb",
            Representation::Hsl => "hsl",
            Representation::Lab => "lab",
            Representation::Lch => "lch",
            Representation::Oklab => "oklab",
            Representation::Oklch => "oklch",
            Representation::Xyz => "xyz",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let repr = match normalize_name(s).as_str() {
            "hex" => Representation::Hex,
            "rgb" | "rgba" => Representation::Rgb,
            "hsl" | "hsla" => Representation::Hsl,
            "lab" => Representation::Lab,
            "lch" => Representation::Lch,
            "oklab" => Representation::Oklab,
            "oklch" => Representation::Oklch,
            "xyz" => Representation::Xyz,
            _ => {
                return Err(ColorError::UnknownVariant {
                    kind: "representation",
                    name: s.to_string(),
                    expected: "hex, rgb, hsl, lab, lch, oklab, oklch, xyz",
                })
            }
        };
        Ok(repr)
    }
}

impl TryFrom<String> for Representation {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Formats `color` in the requested notation. Components are clamped first.
pub fn format(color: Color, repr: Representation) -> String {
    let color = color.clamped();
    let alpha = color.alpha();

    let body = match repr {
        Representation::Hex => return hex(color),
        Representation::Rgb => {
            let [r, g, b] = color.components().map(|c| number(c * 255.0));
            format!("rgb({} {} {}", r, g, b)
        }
        Representation::Hsl => {
            let [h, s, l] = color.to_space(ColorSpace::Hsl);
            let (s, l) = (s * 100.0, l * 100.0);
            format!("hsl({} {}% {}%", hue(h, s), number(s), number(l))
        }
        Representation::Lab => {
            let [l, a, b] = color.to_space(ColorSpace::Lab);
            format!("lab({}% {} {}", number(l), number(a), number(b))
        }
        Representation::Lch => {
            let [l, c, h] = color.to_space(ColorSpace::Lch);
            format!("lch({}% {} {}", number(l), number(c), hue(h, c))
        }
        Representation::Oklab => {
            let [l, a, b] = color.to_space(ColorSpace::Oklab);
            format!("oklab({}% {} {}", number(l * 100.0), number(a), number(b))
        }
        Representation::Oklch => {
            let [l, c, h] = color.to_space(ColorSpace::Oklch);
            format!("oklch({}% {} {}", number(l * 100.0), number(c), hue(h, c))
        }
        Representation::Xyz => {
            let [x, y, z] = color.to_space(ColorSpace::Xyz);
            format!("xyz({} {} {}", number(x), number(y), number(z))
        }
    };

    if alpha == 1.0 {
        format!("{})", body)
    } else {
        format!("{} / {})", body, number(alpha))
    }
}

impl Color {
    /// Shorthand for [`format`].
    pub fn format(self, repr: Representation) -> String {
        format(self, repr)
    }
}

fn hex(color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if color.alpha() == 1.0 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Values this close to an integer print as that integer.
const INTEGER_TOLERANCE: f64 = 1.0 / 256.0;

const SIGNIFICANT_DIGITS: i32 = 4;

/// Bare integer when within [`INTEGER_TOLERANCE`] of one, otherwise four
/// significant digits without trailing zeros.
fn number(v: f64) -> String {
    let rounded = v.round();
    if (v - rounded).abs() < INTEGER_TOLERANCE {
        return format!("{}", rounded as i64);
    }
    let magnitude = v.abs().log10().floor() as i32;
    let decimals = (SIGNIFICANT_DIGITS - 1 - magnitude).max(0) as usize;
    trim_zeros(format!("{:.*}", decimals, v))
}

/// Hue to two decimals. Achromatic colors (chroma that prints as zero) get 0.
fn hue(h: f64, chroma: f64) -> String {
    if chroma.abs() < INTEGER_TOLERANCE {
        return "0".to_string();
    }
    let h = (h * 100.0).round() / 100.0;
    if h >= 360.0 {
        return "0".to_string();
    }
    trim_zeros(format!("{:.2}", h))
}

fn trim_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
