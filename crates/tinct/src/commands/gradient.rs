use std::io::Write;

use anyhow::{Context, Result};
use tinct_render::{gradient as strip, gradient_samples};

use super::Settings;
use crate::cli::GradientArgs;
use crate::input::parse_one;

/// `tinct gradient`: a strip on a terminal, otherwise one sample per line in
/// the configured notation.
pub fn gradient(args: &GradientArgs, settings: &Settings, out: &mut dyn Write) -> Result<usize> {
    let from = parse_one(&args.from, settings.fallback);
    let to = parse_one(&args.to, settings.fallback);
    let (Some(from), Some(to)) = (from, to) else {
        return Ok(0);
    };

    let width = args.width.unwrap_or(settings.gradient_width);
    let space = args.space.unwrap_or(settings.gradient_space);

    if settings.styled(args.no_ansi) {
        writeln!(out, "{}", strip(from, to, width, space)).context("failed to write output")?;
    } else {
        for sample in gradient_samples(from, to, width, space) {
            writeln!(out, "{}", sample.format(settings.format)).context("failed to write output")?;
        }
    }
    Ok(2)
}
