//! Where colors come from.

use std::io::BufRead;

use anyhow::{Context, Result};
use tinct_color::{parse, Color};
use tracing::warn;

/// The command-line colors, or when there are none, each non-blank line of
/// `stdin`.
pub fn gather(args: &[String], stdin: impl BufRead) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    let mut lines = Vec::new();
    for line in stdin.lines() {
        let line = line.context("failed to read colors from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

/// Parses one color, logging and returning `None` on failure.
pub fn parse_one(input: &str, fallback: bool) -> Option<Color> {
    match parse(input, fallback) {
        Ok(color) => Some(color),
        Err(err) => {
            warn!("skipping: {err}");
            None
        }
    }
}

/// Parses every input, dropping the ones that fail.
pub fn parse_all(inputs: &[String], fallback: bool) -> Vec<Color> {
    inputs
        .iter()
        .filter_map(|input| parse_one(input, fallback))
        .collect()
}
