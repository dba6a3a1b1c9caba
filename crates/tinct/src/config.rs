//! Optional YAML configuration.
//!
//! ```yaml
//! fallback: false
//! format: oklch
//! swatch:
//!   size: 12
//!   dark: '#444444'
//! gradient:
//!   width: 60
//!   space: oklch
//! ```
//!
//! Every key is optional. Command-line flags override whatever the file sets.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tinct_color::{BlendSpace, Representation};
use tinct_render::SwatchOptions;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Hash unparsable input to a color instead of skipping it.
    pub fallback: bool,
    /// Notation used when output is not a terminal.
    pub format: Representation,
    pub swatch: SwatchOptions,
    pub gradient: GradientConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback: true,
            format: Representation::default(),
            swatch: SwatchOptions::default(),
            gradient: GradientConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    pub width: usize,
    pub space: BlendSpace,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            width: 40,
            space: BlendSpace::default(),
        }
    }
}

impl Config {
    /// Loads `path`, or returns the defaults when there is no file to read.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
