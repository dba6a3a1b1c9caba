use std::io::Write;

use anyhow::{Context, Result};
use tinct_color::{Color, Representation};
use tinct_render::{color_details, color_swatch, merge_columns, render_half_blocks, SwatchOptions};

use super::Settings;
use crate::cli::{DisplayArgs, DisplayFormat};
use crate::input::parse_one;

/// How each color is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Layout {
    Line(Representation),
    Text,
    Swatch,
}

impl Layout {
    /// An explicit `--format` wins; otherwise a terminal gets swatches and
    /// anything else gets the configured notation. `--no-ansi` downgrades a
    /// swatch to its text panel.
    fn choose(format: Option<DisplayFormat>, settings: &Settings, no_ansi: bool) -> Self {
        let layout = match format {
            Some(DisplayFormat::Text) => Layout::Text,
            Some(DisplayFormat::Ansi) => Layout::Swatch,
            Some(other) => other
                .representation()
                .map_or(Layout::Text, Layout::Line),
            None if settings.styled(no_ansi) => Layout::Swatch,
            None => Layout::Line(settings.format),
        };
        if no_ansi && layout == Layout::Swatch {
            Layout::Text
        } else {
            layout
        }
    }

    fn render(self, color: Color, swatch: &SwatchOptions) -> String {
        match self {
            Layout::Line(repr) => color.format(repr),
            Layout::Text => color_details(color),
            Layout::Swatch => merge_columns(
                &render_half_blocks(&color_swatch(color, swatch)),
                &color_details(color),
                0,
            ),
        }
    }

    fn is_block(self) -> bool {
        !matches!(self, Layout::Line(_))
    }
}

/// `tinct display`: prints every color that parses.
pub fn display(
    args: &DisplayArgs,
    inputs: &[String],
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<usize> {
    let layout = Layout::choose(args.format, settings, args.no_ansi);
    let mut shown = 0;
    for input in inputs {
        let Some(color) = parse_one(input, settings.fallback) else {
            continue;
        };
        if shown > 0 && layout.is_block() {
            writeln!(out).context("failed to write output")?;
        }
        writeln!(out, "{}", layout.render(color, &settings.swatch))
            .context("failed to write output")?;
        shown += 1;
    }
    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn settings(is_term: bool) -> Settings {
        Settings::resolve(Config::default(), false, is_term)
    }

    fn args(format: Option<DisplayFormat>, no_ansi: bool) -> DisplayArgs {
        DisplayArgs {
            colors: Vec::new(),
            format,
            no_ansi,
        }
    }

    fn run(args: &DisplayArgs, inputs: &[&str], settings: &Settings) -> (usize, String) {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let shown = display(args, &inputs, settings, &mut out).unwrap();
        (shown, String::from_utf8(out).unwrap())
    }

    // =========================================================================
    // Layout selection
    // =========================================================================

    #[test]
    fn terminal_defaults_to_swatches() {
        assert_eq!(Layout::choose(None, &settings(true), false), Layout::Swatch);
    }

    #[test]
    fn pipes_default_to_the_configured_notation() {
        let mut piped = settings(false);
        piped.format = Representation::Oklch;
        assert_eq!(
            Layout::choose(None, &piped, false),
            Layout::Line(Representation::Oklch)
        );
        assert_eq!(
            Layout::choose(None, &settings(true), true),
            Layout::Line(Representation::Hex)
        );
    }

    #[test]
    fn explicit_format_wins() {
        assert_eq!(
            Layout::choose(Some(DisplayFormat::Rgb), &settings(true), false),
            Layout::Line(Representation::Rgb)
        );
        assert_eq!(
            Layout::choose(Some(DisplayFormat::Ansi), &settings(false), false),
            Layout::Swatch
        );
        assert_eq!(
            Layout::choose(Some(DisplayFormat::Ansi), &settings(true), true),
            Layout::Text
        );
    }

    // =========================================================================
    // Output
    // =========================================================================

    #[test]
    fn one_line_per_color() {
        let (shown, text) = run(
            &args(Some(DisplayFormat::Rgb), false),
            &["red", "#0000ff80"],
            &settings(false),
        );
        assert_eq!(shown, 2);
        assert_eq!(text, "rgb(255 0 0)\nrgb(0 0 255 / 0.502)\n");
    }

    #[test]
    fn invalid_colors_are_skipped() {
        let mut strict = settings(false);
        strict.fallback = false;
        let (shown, text) = run(&args(None, false), &["nope", "white"], &strict);
        assert_eq!(shown, 1);
        assert_eq!(text, "#ffffff\n");
    }

    #[test]
    fn text_blocks_are_separated_by_a_blank_line() {
        let (shown, text) = run(
            &args(Some(DisplayFormat::Text), false),
            &["red", "lime"],
            &settings(false),
        );
        assert_eq!(shown, 2);
        assert!(text.starts_with("red\n#ff0000\n"));
        assert!(text.contains("\n\nlime\n#00ff00\n"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn swatch_has_escape_sequences_and_details() {
        let (_, text) = run(&args(None, false), &["rebeccapurple"], &settings(true));
        assert!(text.contains("\x1b[48;2;"));
        assert!(text.contains("#663399"));
        assert_eq!(text.lines().count(), 12);
    }
}
