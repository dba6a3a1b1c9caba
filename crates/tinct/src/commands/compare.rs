use std::io::Write;

use anyhow::{Context, Result};
use tinct_color::{distance, BlendSpace, Color, Metric};
use tinct_render::{color_details, compare_swatch, gradient, merge_columns, render_half_blocks};

use super::Settings;
use crate::cli::CompareArgs;
use crate::input::{parse_all, parse_one};

/// One line per metric: label, then the distance to four decimals.
fn distances(reference: Color, color: Color) -> String {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let value = distance(reference, color, metric);
            format!("{:<9} {:.4}", metric.label(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One labelled strip per blend space.
fn gradients(reference: Color, color: Color, width: usize) -> String {
    BlendSpace::ALL
        .iter()
        .map(|&space| format!("{:<10} {}", space.name(), gradient(reference, color, width, space)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn comparison(reference: Color, color: Color, settings: &Settings, styled: bool) -> String {
    let details = merge_columns(&color_details(reference), &color_details(color), 0);
    let distances = distances(reference, color);
    if !styled {
        return format!("{details}\n\n{distances}");
    }
    let swatch = render_half_blocks(&compare_swatch(reference, color, &settings.swatch));
    let gradients = gradients(reference, color, settings.gradient_width);
    format!(
        "{}\n\n{distances}\n\n{gradients}",
        merge_columns(&swatch, &details, 0)
    )
}

/// `tinct compare`: the reference against every color that parses.
///
/// An unparsable reference means nothing can be compared, so it yields 0.
pub fn compare(
    args: &CompareArgs,
    inputs: &[String],
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<usize> {
    let Some(reference) = parse_one(&args.reference, settings.fallback) else {
        return Ok(0);
    };
    let styled = settings.styled(args.no_ansi);

    let colors = parse_all(inputs, settings.fallback);
    for (i, &color) in colors.iter().enumerate() {
        if i > 0 {
            writeln!(out).context("failed to write output")?;
        }
        writeln!(out, "{}", comparison(reference, color, settings, styled))
            .context("failed to write output")?;
    }
    Ok(colors.len())
}
