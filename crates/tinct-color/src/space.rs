//! Color space conversions.
//!
//! Every conversion starts from (or ends at) gamma-encoded sRGB, which is what a
//! [`Color`](crate::Color) stores. Coordinates travel as plain `[f64; 3]` arrays in
//! the natural scale of each space:
//!
//! | Space | Coordinates | Range |
//! |-------|-------------|-------|
//! | `Rgb`, `LinearRgb` | r, g, b | `0.0..=1.0` |
//! | `Hsl` | hue°, saturation, lightness | `0..360`, `0..=1`, `0..=1` |
//! | `Hsv` | hue°, saturation, value | `0..360`, `0..=1`, `0..=1` |
//! | `Hwb` | hue°, whiteness, blackness | `0..360`, `0..=1`, `0..=1` |
//! | `Xyz` | X, Y, Z (D65) | `0.0..≈1.09` |
//! | `Lab` | L*, a*, b* | `0..=100`, unbounded |
//! | `Lch` | L*, chroma, hue° | `0..=100`, `0..≈150`, `0..360` |
//! | `Oklab` | L, a, b | `0..=1`, unbounded |
//! | `Oklch` | L, chroma, hue° | `0..=1`, `0..≈0.4`, `0..360` |
//!
//! Conversions never clamp: Lab `a`/`b` are legitimately negative, out-of-gamut
//! Lab values map to RGB channels outside `0..=1`, and the round trip through any
//! space returns the input to within about 1e-12.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorError;

/// A color space a [`Color`](crate::Color) can be converted into or built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    Rgb,
    LinearRgb,
    Hsl,
    Hsv,
    Hwb,
    Xyz,
    Lab,
    Lch,
    Oklab,
    Oklch,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 10] = [
        ColorSpace::Rgb,
        ColorSpace::LinearRgb,
        ColorSpace::Hsl,
        ColorSpace::Hsv,
        ColorSpace::Hwb,
        ColorSpace::Xyz,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Oklab,
        ColorSpace::Oklch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::LinearRgb => "linear-rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Hsv => "hsv",
            ColorSpace::Hwb => "hwb",
            ColorSpace::Xyz => "xyz",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::Oklab => "oklab",
            ColorSpace::Oklch => "oklch",
        }
    }

    /// Index of the hue coordinate, for cylindrical spaces.
    pub fn hue_index(self) -> Option<usize> {
        match self {
            ColorSpace::Hsl | ColorSpace::Hsv | ColorSpace::Hwb => Some(0),
            ColorSpace::Lch | ColorSpace::Oklch => Some(2),
            _ => None,
        }
    }

    /// Converts gamma-encoded sRGB into this space.
    pub fn from_rgb(self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            ColorSpace::Rgb => rgb,
            ColorSpace::LinearRgb => rgb.map(srgb_to_linear),
            ColorSpace::Hsl => rgb_to_hsl(rgb),
            ColorSpace::Hsv => rgb_to_hsv(rgb),
            ColorSpace::Hwb => rgb_to_hwb(rgb),
            ColorSpace::Xyz => linear_to_xyz(rgb.map(srgb_to_linear)),
            ColorSpace::Lab => xyz_to_lab(linear_to_xyz(rgb.map(srgb_to_linear))),
            ColorSpace::Lch => to_polar(xyz_to_lab(linear_to_xyz(rgb.map(srgb_to_linear)))),
            ColorSpace::Oklab => linear_to_oklab(rgb.map(srgb_to_linear)),
            ColorSpace::Oklch => to_polar(linear_to_oklab(rgb.map(srgb_to_linear))),
        }
    }

    /// Converts coordinates in this space back to gamma-encoded sRGB.
    pub fn to_rgb(self, coords: [f64; 3]) -> [f64; 3] {
        match self {
            ColorSpace::Rgb => coords,
            ColorSpace::LinearRgb => coords.map(linear_to_srgb),
            ColorSpace::Hsl => hsl_to_rgb(coords),
            ColorSpace::Hsv => hsv_to_rgb(coords),
            ColorSpace::Hwb => hwb_to_rgb(coords),
            ColorSpace::Xyz => xyz_to_linear(coords).map(linear_to_srgb),
            ColorSpace::Lab => xyz_to_linear(lab_to_xyz(coords)).map(linear_to_srgb),
            ColorSpace::Lch => xyz_to_linear(lab_to_xyz(from_polar(coords))).map(linear_to_srgb),
            ColorSpace::Oklab => oklab_to_linear(coords).map(linear_to_srgb),
            ColorSpace::Oklch => oklab_to_linear(from_polar(coords)).map(linear_to_srgb),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_name(s);
        ColorSpace::ALL
            .into_iter()
            .find(|space| normalize_name(space.name()) == key)
            .ok_or_else(|| ColorError::UnknownVariant {
                kind: "color space",
                name: s.to_string(),
                expected: "rgb, linear-rgb, hsl, hsv, hwb, xyz, lab, lch, oklab, oklch",
            })
    }
}

/// Lowercases and drops `-`, `_` and spaces so `Linear_RGB` matches `linear-rgb`.
pub(crate) fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ─── sRGB transfer function ─────────────────────────────────────────────────

/// Decodes one gamma-encoded sRGB component to linear light.
///
/// Negative inputs (out-of-gamut values) are mirrored around zero.
pub fn srgb_to_linear(c: f64) -> f64 {
    let abs = c.abs();
    let linear = if abs <= 0.04045 {
        abs / 12.92
    } else {
        ((abs + 0.055) / 1.055).powf(2.4)
    };
    linear.copysign(c)
}

/// Encodes one linear-light component with the sRGB transfer function.
pub fn linear_to_srgb(c: f64) -> f64 {
    let abs = c.abs();
    let encoded = if abs <= 0.0031308 {
        12.92 * abs
    } else {
        1.055 * abs.powf(1.0 / 2.4) - 0.055
    };
    encoded.copysign(c)
}

// ─── Hue-based spaces ───────────────────────────────────────────────────────

const HUE_EPSILON: f64 = 1e-12;

/// Wraps an angle in degrees into `0.0..360.0`.
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round tiny negative angles up to exactly 360
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

/// Hue in degrees of an RGB triplet given its max component and chroma.
fn rgb_hue([r, g, b]: [f64; 3], max: f64, chroma: f64) -> f64 {
    if chroma <= HUE_EPSILON {
        return 0.0;
    }
    let sector = if max == r {
        (g - b) / chroma
    } else if max == g {
        (b - r) / chroma + 2.0
    } else {
        (r - g) / chroma + 4.0
    };
    normalize_hue(sector * 60.0)
}

fn rgb_to_hsl(rgb: [f64; 3]) -> [f64; 3] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let chroma = max - min;
    let l = (max + min) / 2.0;
    let s = if chroma <= HUE_EPSILON || l <= 0.0 || l >= 1.0 {
        0.0
    } else {
        chroma / (1.0 - (2.0 * l - 1.0).abs())
    };
    [rgb_hue(rgb, max, chroma), s, l]
}

fn hsl_to_rgb([h, s, l]: [f64; 3]) -> [f64; 3] {
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h / 30.0).rem_euclid(12.0);
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}

fn rgb_to_hsv(rgb: [f64; 3]) -> [f64; 3] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    let chroma = max - min;
    let s = if max <= 0.0 { 0.0 } else { chroma / max };
    [rgb_hue(rgb, max, chroma), s, max]
}

fn hsv_to_rgb([h, s, v]: [f64; 3]) -> [f64; 3] {
    let channel = |n: f64| {
        let k = (n + h / 60.0).rem_euclid(6.0);
        v - v * s * k.min(4.0 - k).clamp(0.0, 1.0)
    };
    [channel(5.0), channel(3.0), channel(1.0)]
}

fn rgb_to_hwb(rgb: [f64; 3]) -> [f64; 3] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    let min = rgb[0].min(rgb[1]).min(rgb[2]);
    [rgb_hue(rgb, max, max - min), min, 1.0 - max]
}

fn hwb_to_rgb([h, w, b]: [f64; 3]) -> [f64; 3] {
    if w + b >= 1.0 {
        let gray = w / (w + b);
        return [gray; 3];
    }
    hsl_to_rgb([h, 1.0, 0.5]).map(|c| c * (1.0 - w - b) + w)
}

// ─── CIE XYZ and Lab ────────────────────────────────────────────────────────

/// D65 reference white, from the chromaticity (0.3127, 0.3290). This is the
/// XYZ of sRGB white under the matrices below.
const XN: f64 = 0.3127 / 0.3290;
const YN: f64 = 1.0;
const ZN: f64 = (1.0 - 0.3127 - 0.3290) / 0.3290;

/// CIE standard ε = (6/29)³ and κ = (29/3)³.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_KAPPA: f64 = 24389.0 / 27.0;

/// Linear sRGB to XYZ in rational form. [`XYZ_TO_LINEAR`] is its exact
/// inverse, so conversions through XYZ round-trip to f64 precision.
const LINEAR_TO_XYZ: [[f64; 3]; 3] = [
    [506752.0 / 1228815.0, 87881.0 / 245763.0, 12673.0 / 70218.0],
    [87098.0 / 409605.0, 175762.0 / 245763.0, 12673.0 / 175545.0],
    [7918.0 / 409605.0, 87881.0 / 737289.0, 1001167.0 / 1053270.0],
];

const XYZ_TO_LINEAR: [[f64; 3]; 3] = [
    [12831.0 / 3959.0, -329.0 / 214.0, -1974.0 / 3959.0],
    [-851781.0 / 878810.0, 1648619.0 / 878810.0, 36519.0 / 878810.0],
    [705.0 / 12673.0, -2585.0 / 12673.0, 705.0 / 667.0],
];

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

fn linear_to_xyz(rgb: [f64; 3]) -> [f64; 3] {
    mul(&LINEAR_TO_XYZ, rgb)
}

fn xyz_to_linear(xyz: [f64; 3]) -> [f64; 3] {
    mul(&XYZ_TO_LINEAR, xyz)
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (LAB_KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > LAB_EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / LAB_KAPPA
    }
}

fn xyz_to_lab([x, y, z]: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_xyz([l, a, b]: [f64; 3]) -> [f64; 3] {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    [XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz)]
}

// ─── OkLab ──────────────────────────────────────────────────────────────────

fn linear_to_oklab([r, g, b]: [f64; 3]) -> [f64; 3] {
    let l = (0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b).cbrt();
    let m = (0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b).cbrt();
    let s = (0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b).cbrt();
    [
        0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
        1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
        0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
    ]
}

/// Exact inverses of the two matrices in [`linear_to_oklab`], so the round
/// trip holds to f64 precision.
fn oklab_to_linear([l, a, b]: [f64; 3]) -> [f64; 3] {
    let l_ = 0.9999999984505198 * l + 0.39633779217376786 * a + 0.2158037580607588 * b;
    let m_ = 1.0000000088817609 * l - 0.10556134232365635 * a - 0.06385417477170591 * b;
    let s_ = 1.0000000546724108 * l - 0.08948418209496575 * a - 1.2914855378640917 * b;
    let (l3, m3, s3) = (l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_);
    [
        4.076741661347994 * l3 - 3.3077115904081933 * m3 + 0.2309699287294279 * s3,
        -1.268438004092176 * l3 + 2.6097574006633715 * m3 - 0.3413193963102196 * s3,
        -0.004196086541837109 * l3 - 0.7034186144594496 * m3 + 1.7076147009309448 * s3,
    ]
}

// ─── Polar forms ────────────────────────────────────────────────────────────

/// `[L, a, b]` → `[L, chroma, hue°]`.
pub fn to_polar([l, a, b]: [f64; 3]) -> [f64; 3] {
    [l, a.hypot(b), normalize_hue(b.atan2(a).to_degrees())]
}

/// `[L, chroma, hue°]` → `[L, a, b]`.
pub fn from_polar([l, c, h]: [f64; 3]) -> [f64; 3] {
    let (sin, cos) = h.to_radians().sin_cos();
    [l, c * cos, c * sin]
}
