//! # Tinct Color - Color Values, Conversion and Comparison
//!
//! `tinct-color` is the numeric core of tinct. It turns textual color
//! descriptions into a canonical [`Color`], converts it among color spaces,
//! measures perceptual distance, composites with alpha and interpolates.
//!
//! Everything here is a pure function over `Copy` values: there is no global
//! mutable state, so any function can be called from any thread.
//!
//! ## Core Concepts
//!
//! - [`Color`]: gamma-encoded sRGB plus alpha, the single source of truth
//! - [`ColorSpace`]: coordinate systems a color converts into and out of
//! - [`Representation`]: textual notations accepted by [`Color::format`]
//! - [`Metric`]: color difference formulas used by [`distance`]
//! - [`BlendSpace`]: the space [`blend`] interpolates in
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct_color::{blend, distance, parse, BlendSpace, Metric, Representation};
//!
//! let red = parse("#ff0000", false).unwrap();
//! let teal = parse("rgb(0 128 128 / 50%)", false).unwrap();
//!
//! assert_eq!(red.format(Representation::Rgb), "rgb(255 0 0)");
//! assert_eq!(teal.format(Representation::Hex), "#00808080");
//!
//! let de = distance(red, teal, Metric::Ciede2000);
//! assert!(de > 0.0);
//!
//! let halfway = blend(red, teal, 0.5, BlendSpace::Oklch);
//! assert!((halfway.alpha() - 0.75).abs() < 1e-9);
//! ```
//!
//! ## Fallback Parsing
//!
//! [`parse`] with `allow_fallback` never fails: unparsable text hashes to a
//! stable color, which is handy for coloring arbitrary labels.
//!
//! ```rust
//! use tinct_color::{color_from_text, parse};
//!
//! let tag = parse("backend", true).unwrap();
//! assert_eq!(tag, color_from_text("backend"));
//! ```

mod blend;
mod color;
mod composite;
mod contrast;
mod distance;
mod error;
mod format;
mod named;
mod parse;
pub mod space;

pub use blend::{blend, BlendSpace};
pub use color::Color;
pub use composite::{over, DEFAULT_GAMMA};
pub use contrast::{contrast_ratio, LUMINANCE_THRESHOLD};
pub use distance::{delta_e_2000, delta_e_76, delta_e_94, delta_e_ok, distance, Metric};
pub use error::{ColorError, Result};
pub use format::{format, Representation};
pub use named::{color_name, named_color};
pub use parse::{color_from_text, parse, parse_color};
pub use space::ColorSpace;
