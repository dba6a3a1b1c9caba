//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tinct_color::{BlendSpace, Representation};

/// Inspect, compare and blend colors in a truecolor terminal.
///
/// Colors may be hex codes, CSS names or functional notations such as
/// `oklch(70% 0.1 200)`. When no colors are given on the command line they are
/// read from stdin, one per line.
#[derive(Debug, Parser)]
#[command(name = "tinct")]
#[command(version)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "TINCT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log configuration and fallback decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject unparsable input instead of hashing it to a color
    #[arg(long, global = true)]
    pub no_fallback: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show colors as swatches, detail panels or plain text
    Display(DisplayArgs),

    /// Compare colors against a reference
    Compare(CompareArgs),

    /// Draw a gradient between two colors
    Gradient(GradientArgs),
}

#[derive(Debug, Args)]
pub struct DisplayArgs {
    /// Colors to show
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Output format (defaults to a swatch on a terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<DisplayFormat>,

    /// Never emit escape sequences
    #[arg(long)]
    pub no_ansi: bool,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Color every other color is compared against
    #[arg(value_name = "REF")]
    pub reference: String,

    /// Colors to compare
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Never emit escape sequences
    #[arg(long)]
    pub no_ansi: bool,
}

#[derive(Debug, Args)]
pub struct GradientArgs {
    /// Start color
    pub from: String,

    /// End color
    pub to: String,

    /// Number of cells
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Interpolation space (rgb, linear-rgb, hsv, lab, oklab, lch, oklch, xyz)
    #[arg(short, long)]
    pub space: Option<BlendSpace>,

    /// Never emit escape sequences
    #[arg(long)]
    pub no_ansi: bool,
}

/// What `tinct display` prints for each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayFormat {
    Hex,
    Rgb,
    Hsl,
    Lab,
    Lch,
    Oklab,
    Oklch,
    Xyz,
    /// Name and every notation, one per line
    Text,
    /// Swatch beside the text panel
    Ansi,
}

impl DisplayFormat {
    /// The single-line notation this format prints, if it is one.
    pub fn representation(self) -> Option<Representation> {
        match self {
            DisplayFormat::Hex => Some(Representation::Hex),
            DisplayFormat::Rgb => Some(Representation::Rgb),
            DisplayFormat::Hsl => Some(Representation::Hsl),
            DisplayFormat::Lab => Some(Representation::Lab),
            DisplayFormat::Lch => Some(Representation::Lch),
            DisplayFormat::Oklab => Some(Representation::Oklab),
            DisplayFormat::Oklch => Some(Representation::Oklch),
            DisplayFormat::Xyz => Some(Representation::Xyz),
            DisplayFormat::Text | DisplayFormat::Ansi => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn display_accepts_many_colors() {
        let cli = Cli::try_parse_from(["tinct", "display", "red", "#00ff00", "--format", "oklch"])
            .unwrap();
        match cli.command {
            Command::Display(args) => {
                assert_eq!(args.colors, ["red", "#00ff00"]);
                assert_eq!(args.format, Some(DisplayFormat::Oklch));
                assert!(!args.no_ansi);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn compare_requires_a_reference() {
        assert!(Cli::try_parse_from(["tinct", "compare"]).is_err());
        let cli = Cli::try_parse_from(["tinct", "compare", "red"]).unwrap();
        match cli.command {
            Command::Compare(args) => {
                assert_eq!(args.reference, "red");
                assert!(args.colors.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn gradient_space_parses_through_blend_space() {
        let cli = Cli::try_parse_from([
            "tinct", "gradient", "red", "blue", "--space", "linear_rgb", "-w", "10",
        ])
        .unwrap();
        match cli.command {
            Command::Gradient(args) => {
                assert_eq!(args.space, Some(BlendSpace::LinearRgb));
                assert_eq!(args.width, Some(10));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["tinct", "gradient", "red", "blue", "--space", "cmyk"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["tinct", "display", "red", "--no-fallback", "-v"]).unwrap();
        assert!(cli.no_fallback);
        assert!(cli.verbose);
    }

    #[test]
    fn only_text_and_ansi_lack_a_representation() {
        let without: Vec<DisplayFormat> = DisplayFormat::value_variants()
            .iter()
            .copied()
            .filter(|f| f.representation().is_none())
            .collect();
        assert_eq!(without, [DisplayFormat::Text, DisplayFormat::Ansi]);
    }
}
