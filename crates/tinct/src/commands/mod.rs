//! Subcommand implementations.
//!
//! Each command writes to a `&mut dyn Write` and returns how many colors it
//! processed, so `main` can decide the exit code and tests can capture output.

mod compare;
mod display;
mod gradient;

pub use compare::compare;
pub use display::display;
pub use gradient::gradient;

use tinct_color::{BlendSpace, Representation};
use tinct_render::SwatchOptions;

use crate::config::Config;

/// Configuration resolved against the global flags and the output stream.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fallback: bool,
    pub format: Representation,
    pub swatch: SwatchOptions,
    pub gradient_width: usize,
    pub gradient_space: BlendSpace,
    /// Stdout is a terminal.
    pub is_term: bool,
}

impl Settings {
    pub fn resolve(config: Config, no_fallback: bool, is_term: bool) -> Self {
        Self {
            fallback: config.fallback && !no_fallback,
            format: config.format,
            swatch: config.swatch,
            gradient_width: config.gradient.width,
            gradient_space: config.gradient.space,
            is_term,
        }
    }

    /// Whether escape sequences may be written, given a command's `--no-ansi`.
    pub fn styled(&self, no_ansi: bool) -> bool {
        self.is_term && !no_ansi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_fallback_flag_overrides_the_file() {
        let settings = Settings::resolve(Config::default(), true, true);
        assert!(!settings.fallback);

        let config = Config {
            fallback: false,
            ..Config::default()
        };
        assert!(!Settings::resolve(config, false, true).fallback);
        assert!(Settings::resolve(Config::default(), false, true).fallback);
    }

    #[test]
    fn styling_needs_a_terminal() {
        let term = Settings::resolve(Config::default(), false, true);
        let pipe = Settings::resolve(Config::default(), false, false);
        assert!(term.styled(false));
        assert!(!term.styled(true));
        assert!(!pipe.styled(false));
    }
}
