//! Synthetic swatch images.
//!
//! A swatch is a square grid: a transparent margin, then a checkerboard
//! padding ring, then the color area. Translucent colors are shown against the
//! checkerboard so their alpha is visible.
//!
//! ```text
//!  ┌──────────────────────┐
//!  │ margin (transparent) │
//!  │  ┌────────────────┐  │
//!  │  │ padding        │  │
//!  │  │  ┌──────────┐  │  │
//!  │  │  │ over γ2.2│  │  │   top half
//!  │  │  ├─────┬────┤  │  │
//!  │  │  │γ1.0 │opaq│  │  │   bottom half
//!  │  │  └─────┴────┘  │  │
//!  │  └────────────────┘  │
//!  └──────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tinct_color::{over, Color, DEFAULT_GAMMA};

use crate::raster::Grid;

/// Geometry and checkerboard colors for swatches.
///
/// All fields have defaults, so a configuration file may set only some of
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwatchOptions {
    /// Side of the color area, in pixels.
    pub size: usize,
    /// Transparent border around everything.
    pub margin: usize,
    /// Checkerboard ring between the margin and the color area.
    pub padding: usize,
    /// Checkerboard square where `x + y` is even.
    pub light: Color,
    /// Checkerboard square where `x + y` is odd.
    pub dark: Color,
}

impl Default for SwatchOptions {
    fn default() -> Self {
        Self {
            size: 16,
            margin: 2,
            padding: 2,
            light: Color::LIGHT_GRAY,
            dark: Color::DARK_GRAY,
        }
    }
}

impl SwatchOptions {
    /// Side of the whole swatch: `size + 2·margin + 2·padding`.
    pub fn full_size(&self) -> usize {
        self.size + 2 * (self.margin + self.padding)
    }

    fn inset(&self) -> usize {
        self.margin + self.padding
    }

    /// Background at `(x, y)`: transparent in the margin, checkerboard inside.
    fn backdrop(&self, x: usize, y: usize) -> Color {
        let full = self.full_size();
        let in_margin = x < self.margin
            || y < self.margin
            || x >= full - self.margin
            || y >= full - self.margin;
        if in_margin {
            Color::NO_COLOR
        } else if (x + y) % 2 == 0 {
            self.light
        } else {
            self.dark
        }
    }

    fn in_color_area(&self, x: usize, y: usize) -> bool {
        let (inset, full) = (self.inset(), self.full_size());
        (inset..full - inset).contains(&x) && (inset..full - inset).contains(&y)
    }
}

/// Swatch for a single color.
///
/// The color area is split three ways: the top half composites the color over
/// the checkerboard at gamma 2.2, the bottom left does the same at gamma 1.0,
/// and the bottom right shows the color fully opaque.
pub fn color_swatch(color: Color, options: &SwatchOptions) -> Grid {
    let full = options.full_size();
    let half = full / 2;
    let opaque = color.opaque();

    Grid::from_fn(full, full, |x, y| {
        let backdrop = options.backdrop(x, y);
        if !options.in_color_area(x, y) {
            backdrop
        } else if y < half {
            over(color, backdrop, DEFAULT_GAMMA)
        } else if x < half {
            over(color, backdrop, 1.0)
        } else {
            over(opaque, backdrop, DEFAULT_GAMMA)
        }
    })
}

/// Side-by-side swatch: `left` on the left half, `right` on the right. In each
/// half the top shows the color over the checkerboard and the bottom shows it
/// fully opaque.
pub fn compare_swatch(left: Color, right: Color, options: &SwatchOptions) -> Grid {
    let full = options.full_size();
    let half = full / 2;

    Grid::from_fn(full, full, |x, y| {
        let backdrop = options.backdrop(x, y);
        if !options.in_color_area(x, y) {
            return backdrop;
        }
        let color = if x < half { left } else { right };
        let color = if y < half { color } else { color.opaque() };
        over(color, backdrop, DEFAULT_GAMMA)
    })
}
