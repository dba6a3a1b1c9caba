//! Text → [`Color`].
//!
//! Parsing is a two-stage operation:
//!
//! 1. [`parse_color`] tries the accepted grammars and fails with
//!    [`ColorError::InvalidColorFormat`] when none matches.
//! 2. [`parse`] optionally falls back to [`color_from_text`], which derives a
//!    stable color from the raw input so the overall operation is total.
//!
//! # Grammars
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Named colors: the CSS list, plus `transparent`
//! - Functions: `rgb()`/`rgba()`, `hsl()`/`hsla()`, `hwb()`, `hsv()`, `lab()`,
//!   `lch()`, `oklab()`, `oklch()`, `xyz()`
//!
//! Function arguments may be separated by commas, whitespace or `/` in any mix,
//! so the legacy `rgba(255, 0, 0, 0.5)` and modern `rgb(255 0 0 / 50%)` forms
//! read identically. Tokenizing is done with `cssparser`.

use cssparser::{ParseError, Parser, ParserInput, Token};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ColorError, Result};
use crate::named::named_color;
use crate::space::ColorSpace;
use crate::Color;

/// Parses `input`, falling back to a hash-derived color when `allow_fallback`
/// is set.
///
/// With fallback enabled this never fails: unparsable text always maps to the
/// same color.
///
/// ```rust
/// use tinct_color::parse;
///
/// assert!(parse("not a color", false).is_err());
/// let a = parse("not a color", true).unwrap();
/// let b = parse("not a color", true).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse(input: &str, allow_fallback: bool) -> Result<Color> {
    match parse_color(input) {
        Err(_) if allow_fallback => {
            let color = color_from_text(input);
            debug!(input = %input, color = %color, "no color grammar matched, using text-derived color");
            Ok(color)
        }
        result => result,
    }
}

/// Parses `input` against the supported grammars. All components of the result
/// are in `0.0..=1.0`; numbers too large to convert are an error, not a clamp.
pub fn parse_color(input: &str) -> Result<Color> {
    let text = input.trim();
    let color = match text.strip_prefix('#') {
        Some(digits) => parse_hex(digits),
        None => parse_css(text),
    };
    color
        .map(Color::clamped)
        .ok_or_else(|| ColorError::invalid(input))
}

/// Derives an opaque color from arbitrary text: the first three bytes of the
/// SHA-256 digest (its first six hex characters) read as `#rrggbb`.
pub fn color_from_text(text: &str) -> Color {
    let digest = Sha256::digest(text.as_bytes());
    Color::from_rgb8(digest[0], digest[1], digest[2])
}

// ─── Hex ────────────────────────────────────────────────────────────────────

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).ok();

    match digits.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::from_rgb8(byte(0)?, byte(1)?, byte(2)?)),
        8 => Some(Color::from_rgba8(byte(0)?, byte(1)?, byte(2)?, byte(3)?)),
        _ => None,
    }
}

// ─── CSS-style values ───────────────────────────────────────────────────────

fn parse_css(text: &str) -> Option<Color> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_color_value).ok()
}

fn parse_color_value<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> std::result::Result<Color, ParseError<'i, ()>> {
    let token = input.next()?.clone();
    match token {
        Token::Ident(ref name) => {
            named_color(name.as_ref()).ok_or_else(|| input.new_custom_error::<(), ()>(()))
        }
        Token::Function(ref name) => {
            let function = ColorFunction::from_name(name.as_ref())
                .ok_or_else(|| input.new_custom_error::<(), ()>(()))?;
            let arguments = input.parse_nested_block(collect_arguments)?;
            function
                .build(&arguments)
                .ok_or_else(|| input.new_custom_error::<(), ()>(()))
        }
        _ => Err(input.new_custom_error::<(), ()>(())),
    }
}

/// One numeric argument of a color function, before interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Argument {
    Number(f64),
    /// Percentage as a unit fraction (`50%` → `0.5`).
    Percentage(f64),
    /// Angle converted to degrees.
    Angle(f64),
}

impl Argument {
    fn value(self) -> f64 {
        match self {
            Argument::Number(v) | Argument::Percentage(v) | Argument::Angle(v) => v,
        }
    }
}

fn collect_arguments<'i, 't>(
    input: &mut Parser<'i, 't>,
) -> std::result::Result<Vec<Argument>, ParseError<'i, ()>> {
    let mut arguments = Vec::with_capacity(4);
    while !input.is_exhausted() {
        let token = input.next()?.clone();
        let argument = match token {
            Token::Comma | Token::Delim('/') => continue,
            Token::Number { value, .. } => Argument::Number(value as f64),
            Token::Percentage { unit_value, .. } => Argument::Percentage(unit_value as f64),
            Token::Dimension {
                value, ref unit, ..
            } => match angle_to_degrees(value as f64, unit.as_ref()) {
                Some(degrees) => Argument::Angle(degrees),
                None => return Err(input.new_custom_error::<(), ()>(())),
            },
            Token::Ident(ref ident) if ident.eq_ignore_ascii_case("none") => Argument::Number(0.0),
            _ => return Err(input.new_custom_error::<(), ()>(())),
        };
        // Literals beyond f32 range tokenize as infinity.
        if !argument.value().is_finite() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        arguments.push(argument);
    }
    Ok(arguments)
}

fn angle_to_degrees(value: f64, unit: &str) -> Option<f64> {
    match unit.to_ascii_lowercase().as_str() {
        "deg" => Some(value),
        "rad" => Some(value.to_degrees()),
        "grad" => Some(value * 0.9),
        "turn" => Some(value * 360.0),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorFunction {
    Rgb,
    Hsl,
    Hwb,
    Hsv,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Xyz,
}

impl ColorFunction {
    fn from_name(name: &str) -> Option<Self> {
        let function = match name.to_ascii_lowercase().as_str() {
            "rgb" | "rgba" => ColorFunction::Rgb,
            "hsl" | "hsla" => ColorFunction::Hsl,
            "hwb" => ColorFunction::Hwb,
            "hsv" | "hsva" => ColorFunction::Hsv,
            "lab" => ColorFunction::Lab,
            "lch" => ColorFunction::Lch,
            "oklab" => ColorFunction::Oklab,
            "oklch" => ColorFunction::Oklch,
            "xyz" => ColorFunction::Xyz,
            _ => return None,
        };
        Some(function)
    }

    fn space(self) -> ColorSpace {
        match self {
            ColorFunction::Rgb => ColorSpace::Rgb,
            ColorFunction::Hsl => ColorSpace::Hsl,
            ColorFunction::Hwb => ColorSpace::Hwb,
            ColorFunction::Hsv => ColorSpace::Hsv,
            ColorFunction::Lab => ColorSpace::Lab,
            ColorFunction::Lch => ColorSpace::Lch,
            ColorFunction::Oklab => ColorSpace::Oklab,
            ColorFunction::Oklch => ColorSpace::Oklch,
            ColorFunction::Xyz => ColorSpace::Xyz,
        }
    }

    /// Interprets three components plus optional alpha.
    fn build(self, arguments: &[Argument]) -> Option<Color> {
        let (components, alpha) = match arguments {
            [a, b, c] => ([*a, *b, *c], 1.0),
            [a, b, c, alpha] => ([*a, *b, *c], unit(*alpha)?),
            _ => return None,
        };
        let [a, b, c] = components;

        let coords = match self {
            ColorFunction::Rgb => [channel(a)?, channel(b)?, channel(c)?],
            ColorFunction::Hsl | ColorFunction::Hwb | ColorFunction::Hsv => {
                [hue(a)?, fraction(b)?, fraction(c)?]
            }
            ColorFunction::Lab => [scaled(a, 100.0)?, scaled(b, 125.0)?, scaled(c, 125.0)?],
            ColorFunction::Lch => [scaled(a, 100.0)?, scaled(b, 150.0)?, hue(c)?],
            ColorFunction::Oklab => [scaled(a, 1.0)?, scaled(b, 0.4)?, scaled(c, 0.4)?],
            ColorFunction::Oklch => [scaled(a, 1.0)?, scaled(b, 0.4)?, hue(c)?],
            ColorFunction::Xyz => [scaled(a, 1.0)?, scaled(b, 1.0)?, scaled(c, 1.0)?],
        };

        let color = Color::from_space(self.space(), coords, alpha.clamp(0.0, 1.0));
        // Finite but huge inputs (e.g. `lab(3e38 0 0)`) overflow in the cube.
        color
            .components()
            .iter()
            .all(|c| c.is_finite())
            .then_some(color)
    }
}

/// An RGB channel: `0..=255` or a percentage.
fn channel(argument: Argument) -> Option<f64> {
    match argument {
        Argument::Number(n) => Some(n / 255.0),
        Argument::Percentage(p) => Some(p),
        Argument::Angle(_) => None,
    }
}

/// Alpha or any other unit value: a bare fraction or a percentage.
fn unit(argument: Argument) -> Option<f64> {
    match argument {
        Argument::Number(n) | Argument::Percentage(n) => Some(n),
        Argument::Angle(_) => None,
    }
}

/// Saturation/lightness-like components; bare numbers are read as percents.
fn fraction(argument: Argument) -> Option<f64> {
    match argument {
        Argument::Number(n) => Some(n / 100.0),
        Argument::Percentage(p) => Some(p),
        Argument::Angle(_) => None,
    }
}

fn hue(argument: Argument) -> Option<f64> {
    match argument {
        Argument::Number(degrees) | Argument::Angle(degrees) => Some(degrees),
        Argument::Percentage(_) => None,
    }
}

/// A number in the space's own units, or a percentage of `full_scale`.
fn scaled(argument: Argument, full_scale: f64) -> Option<f64> {
    match argument {
        Argument::Number(n) => Some(n),
        Argument::Percentage(p) => Some(p * full_scale),
        Argument::Angle(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba8(input: &str) -> [u8; 4] {
        parse_color(input)
            .unwrap_or_else(|e| panic!("{}: {}", input, e))
            .to_rgba8()
    }

    // =====================================================================
    // Hex
    // =====================================================================

    #[test]
    fn hex_six_digits() {
        let c = parse_color("#ff0000").unwrap();
        assert_eq!(c, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn hex_short_forms() {
        assert_eq!(rgba8("#f0a"), [0xff, 0x00, 0xaa, 0xff]);
        assert_eq!(rgba8("#f0a8"), [0xff, 0x00, 0xaa, 0x88]);
    }

    #[test]
    fn hex_with_alpha() {
        assert_eq!(rgba8("#ff00aa88"), [0xff, 0x00, 0xaa, 0x88]);
    }

    #[test]
    fn hex_is_case_insensitive_and_trimmed() {
        assert_eq!(rgba8("  #FF00AA\n"), [0xff, 0x00, 0xaa, 0xff]);
    }

    #[test]
    fn hash_input_never_reaches_the_css_grammar() {
        assert!(parse_color("#ff0000 blue").is_err());
        assert!(parse_color("#red").is_err());
    }

    #[test]
    fn hex_rejects_bad_lengths_and_digits() {
        for input in ["#", "#ff", "#fffff", "#fffffff", "#gggggg", "#+f0000", "#ff00aa889"] {
            assert!(parse_color(input).is_err(), "{} should fail", input);
        }
    }

    // =====================================================================
    // rgb()
    // =====================================================================

    #[test]
    fn rgb_separators_are_interchangeable() {
        let expected = parse_color("rgb(255 0 170)").unwrap();
        assert_eq!(parse_color("rgb(255, 0, 170)").unwrap(), expected);
        assert_eq!(parse_color("rgb(255,0,170)").unwrap(), expected);
        assert_eq!(parse_color("rgba(255 0 170)").unwrap(), expected);
    }

    #[test]
    fn rgb_alpha_forms() {
        let legacy = parse_color("rgba(255, 0, 170, 0.5)").unwrap();
        let slash = parse_color("rgb(255 0 170 / 0.5)").unwrap();
        let percent = parse_color("rgb(255 0 170 / 50%)").unwrap();
        assert_eq!(legacy.alpha(), 0.5);
        assert_eq!(legacy, slash);
        assert_eq!(legacy, percent);
    }

    #[test]
    fn rgb_percentage_channels() {
        assert_eq!(rgba8("rgb(100% 50% 0%)"), [255, 128, 0, 255]);
    }

    #[test]
    fn rgb_clamps_out_of_range() {
        let c = parse_color("rgb(300 -20 128 / 1.5)").unwrap();
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.0);
        assert_eq!(c.alpha(), 1.0);
    }

    #[test]
    fn rgb_wrong_arity_fails() {
        assert!(parse_color("rgb(255 0)").is_err());
        assert!(parse_color("rgb(255 0 0 0.5 1)").is_err());
        assert!(parse_color("rgb()").is_err());
    }

    #[test]
    fn trailing_garbage_fails() {
        assert!(parse_color("rgb(255 0 0) red").is_err());
        assert!(parse_color("red blue").is_err());
    }

    // =====================================================================
    // Other functions
    // =====================================================================

    #[test]
    fn hsl_forms() {
        assert_eq!(rgba8("hsl(120 100% 50%)"), [0, 255, 0, 255]);
        assert_eq!(rgba8("hsla(120deg, 100%, 25%, 0.5)"), [0, 128, 0, 128]);
        assert_eq!(rgba8("hsl(0.5turn 100% 50%)"), [0, 255, 255, 255]);
    }

    #[test]
    fn hwb_and_hsv() {
        assert_eq!(rgba8("hwb(0 0% 0%)"), [255, 0, 0, 255]);
        assert_eq!(rgba8("hwb(0 50% 50%)"), [128, 128, 128, 255]);
        assert_eq!(rgba8("hsv(240 100% 100%)"), [0, 0, 255, 255]);
    }

    #[test]
    fn lab_family() {
        assert_eq!(rgba8("lab(53.24% 80.09 67.2)"), [255, 0, 0, 255]);
        assert_eq!(rgba8("lch(53.24% 104.55 40)"), [255, 0, 0, 255]);
        assert_eq!(rgba8("oklab(62.8% 0.2249 0.1258)"), [255, 0, 0, 255]);
        assert_eq!(rgba8("oklch(62.8% 0.2577 29.23)"), [255, 0, 0, 255]);
        assert_eq!(rgba8("oklab(1 0 0)"), [255, 255, 255, 255]);
    }

    #[test]
    fn xyz_function() {
        assert_eq!(rgba8("xyz(0.9505 1 1.089)"), [255, 255, 255, 255]);
    }

    #[test]
    fn none_keyword_reads_as_zero() {
        assert_eq!(rgba8("rgb(none 255 none)"), [0, 255, 0, 255]);
    }

    #[test]
    fn literals_beyond_f32_range_fail() {
        for input in [
            "hsl(1e39 100% 50%)",
            "lab(1e39 0 0)",
            "hwb(0 1e39 1e39)",
            "oklch(50% 1e39 20)",
            "rgb(1e39 0 0)",
            "hsl(1e39deg 100% 50%)",
        ] {
            assert_eq!(
                parse_color(input),
                Err(ColorError::InvalidColorFormat {
                    input: input.to_string()
                }),
                "{}",
                input
            );
        }
    }

    #[test]
    fn coordinates_that_overflow_in_conversion_fail() {
        assert!(parse_color("lab(3e38 0 0)").is_err());
    }

    #[test]
    fn huge_finite_hues_still_land_in_range() {
        let color = parse_color("hsl(1e30 100% 50%)").unwrap();
        for c in color.components() {
            assert!((0.0..=1.0).contains(&c), "{:?}", color);
        }
    }

    #[test]
    fn unknown_function_fails() {
        assert!(parse_color("cmyk(0 0 0 0)").is_err());
        assert!(parse_color("cube(60%, 20%, 0%)").is_err());
    }

    // =====================================================================
    // Named colors
    // =====================================================================

    #[test]
    fn named_colors() {
        assert_eq!(rgba8("rebeccapurple"), [0x66, 0x33, 0x99, 0xff]);
        assert_eq!(rgba8("Red"), [0xff, 0, 0, 0xff]);
        assert_eq!(parse_color("transparent").unwrap(), Color::NO_COLOR);
    }

    // =====================================================================
    // Errors and fallback
    // =====================================================================

    #[test]
    fn error_names_the_input() {
        let err = parse_color("purple-ish").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "purple-ish".into()
            }
        );
    }

    #[test]
    fn empty_input_fails() {
        assert!(parse_color("").is_err());
        assert!(parse_color("   ").is_err());
    }

    #[test]
    fn fallback_hashes_the_raw_text() {
        // sha256("hello") = 2cf24dba...
        let c = parse("hello", true).unwrap();
        assert_eq!(c.to_hex(), "#2cf24d");
        assert_eq!(c, color_from_text("hello"));
    }

    #[test]
    fn fallback_is_not_used_for_valid_input() {
        assert_eq!(parse("#ff0000", true).unwrap(), Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn fallback_disabled_reports_error() {
        assert!(parse("hello", false).is_err());
    }
}
