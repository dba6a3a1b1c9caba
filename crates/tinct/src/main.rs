//! # Tinct - Colors in the Terminal
//!
//! `tinct` shows colors as truecolor swatches, compares them under several
//! perceptual metrics, and draws gradients between them.
//!
//! ```text
//! tinct display rebeccapurple '#ff000080'
//! tinct compare red crimson firebrick
//! tinct gradient red blue --space oklch --width 60
//! printf 'red\nteal\n' | tinct display --format oklch
//! ```

mod cli;
mod commands;
mod config;
mod input;
mod logging;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::Term;
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands::Settings;
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match run(cli) {
        Ok(0) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tinct: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command and returns how many colors it processed.
fn run(cli: Cli) -> Result<usize> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(config, cli.no_fallback, Term::stdout().is_term());
    debug!(?settings, "resolved settings");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = match &cli.command {
        Command::Display(args) => {
            let inputs = colors_or_stdin(&args.colors)?;
            commands::display(args, &inputs, &settings, &mut out)?
        }
        Command::Compare(args) => {
            let inputs = colors_or_stdin(&args.colors)?;
            commands::compare(args, &inputs, &settings, &mut out)?
        }
        Command::Gradient(args) => commands::gradient(args, &settings, &mut out)?,
    };
    out.flush().context("failed to write output")?;
    Ok(count)
}

fn colors_or_stdin(args: &[String]) -> Result<Vec<String>> {
    let stdin = io::stdin();
    if args.is_empty() && stdin.is_terminal() {
        anyhow::bail!("no colors given (pass them as arguments or pipe them on stdin)");
    }
    input::gather(args, stdin.lock())
}
