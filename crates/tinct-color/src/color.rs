//! The canonical color value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::format::Representation;
use crate::space::ColorSpace;

/// A gamma-encoded sRGB color with a separate alpha channel.
///
/// `Color` is a small `Copy` value: every conversion, blend and distance is a
/// pure function returning a new value. Components are conceptually in
/// `0.0..=1.0`; intermediate math (extrapolated blends, out-of-gamut Lab) may
/// leave them outside that range, so anything that emits text or pixels goes
/// through [`Color::clamped`] first.
///
/// Derived representations (HSL, Lab, OkLch, ...) are recomputed on demand from
/// the stored RGB via [`Color::to_space`]; nothing is cached.
///
/// ```rust
/// use tinct_color::{Color, ColorSpace};
///
/// let orange: Color = "#ff8000".parse().unwrap();
/// let [h, s, l] = orange.to_space(ColorSpace::Hsl);
/// assert!((h - 30.1).abs() < 0.1);
/// assert_eq!(s, 1.0);
/// assert!((l - 0.5).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    alpha: f64,
}

impl Color {
    /// Fully transparent "no color". Used as the default for optional backgrounds.
    pub const NO_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Light checkerboard square, `#cccccc`.
    pub const LIGHT_GRAY: Color = Color::rgb(0.8, 0.8, 0.8);
    /// Dark checkerboard square, `#999999`.
    pub const DARK_GRAY: Color = Color::rgb(0.6, 0.6, 0.6);

    pub const fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// An opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    /// Builds a color from coordinates in any supported space.
    ///
    /// No clamping happens here; see [`ColorSpace`] for coordinate scales.
    pub fn from_space(space: ColorSpace, coords: [f64; 3], alpha: f64) -> Self {
        let [r, g, b] = space.to_rgb(coords);
        Self::new(r, g, b, alpha)
    }

    /// The coordinates of this color in `space`.
    pub fn to_space(self, space: ColorSpace) -> [f64; 3] {
        space.from_rgb([self.r, self.g, self.b])
    }

    pub const fn r(self) -> f64 {
        self.r
    }

    pub const fn g(self) -> f64 {
        self.g
    }

    pub const fn b(self) -> f64 {
        self.b
    }

    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    pub const fn components(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// The same color with alpha forced to 1.
    pub const fn opaque(self) -> Self {
        self.with_alpha(1.0)
    }

    /// All four components clamped into `0.0..=1.0`.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.alpha.clamp(0.0, 1.0),
        )
    }

    /// True when alpha is zero (or below), i.e. nothing is drawn.
    pub fn is_transparent(self) -> bool {
        self.alpha <= 0.0
    }

    /// 8-bit channels, clamped and rounded half-up.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [c.r, c.g, c.b, c.alpha].map(to_byte)
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    /// `#rrggbb`, or `#rrggbbaa` when alpha is not exactly 1.
    pub fn to_hex(self) -> String {
        self.format(Representation::Hex)
    }

    pub fn hsl(self) -> [f64; 3] {
        self.to_space(ColorSpace::Hsl)
    }

    pub fn hsv(self) -> [f64; 3] {
        self.to_space(ColorSpace::Hsv)
    }

    pub fn xyz(self) -> [f64; 3] {
        self.to_space(ColorSpace::Xyz)
    }

    pub fn lab(self) -> [f64; 3] {
        self.to_space(ColorSpace::Lab)
    }

    pub fn lch(self) -> [f64; 3] {
        self.to_space(ColorSpace::Lch)
    }

    pub fn oklab(self) -> [f64; 3] {
        self.to_space(ColorSpace::Oklab)
    }

    pub fn oklch(self) -> [f64; 3] {
        self.to_space(ColorSpace::Oklch)
    }
}

fn to_byte(v: f64) -> u8 {
    (v * 255.0 + 0.5) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
