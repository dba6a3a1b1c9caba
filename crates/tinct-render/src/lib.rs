//! # Tinct Render - Colors in the Terminal
//!
//! `tinct-render` draws [`tinct_color::Color`] values with 24-bit ANSI
//! escapes: swatches rasterized with half-block glyphs, gradient strips, and
//! the text panels that accompany them.
//!
//! ## Core Concepts
//!
//! - [`Grid`]: a small row-major image of colors
//! - [`render_half_blocks`]: packs two pixel rows into each line of text
//! - [`color_swatch`] / [`compare_swatch`]: synthetic grids that show a color
//!   (and its alpha) against a checkerboard
//! - [`gradient`]: a strip of painted cells sampled with [`tinct_color::blend`]
//! - [`ansi`]: the raw escape primitives
//!
//! ## Example
//!
//! ```rust
//! use tinct_color::Color;
//! use tinct_render::{color_details, color_swatch, merge_columns, render_half_blocks, SwatchOptions};
//!
//! let color: Color = "rebeccapurple".parse().unwrap();
//! let swatch = render_half_blocks(&color_swatch(color, &SwatchOptions::default()));
//! let panel = merge_columns(&swatch, &color_details(color), 0);
//!
//! assert_eq!(swatch.lines().count(), 12);
//! assert!(panel.contains("#663399"));
//! ```

pub mod ansi;
mod details;
mod gradient;
mod raster;
mod swatch;

pub use details::{color_details, merge_columns, DETAIL_REPRESENTATIONS};
pub use gradient::{gradient, gradient_samples};
pub use raster::{render_half_blocks, Grid, LOWER_HALF, UPPER_HALF};
pub use swatch::{color_swatch, compare_swatch, SwatchOptions};
