//! Half-block rasterization.
//!
//! A terminal cell is roughly twice as tall as it is wide, so each cell
//! carries two vertically stacked pixels: the upper half block `▀` drawn in
//! the top pixel's color (foreground) over the bottom pixel's color
//! (background).
//!
//! | top | bottom | output |
//! |-----|--------|--------|
//! | visible | visible | `ESC[48;2;bottom;38;2;top m▀` |
//! | visible | transparent | `ESC[38;2;top m▀` |
//! | transparent | visible | `ESC[38;2;bottom m▄` |
//! | transparent | transparent | a plain space |
//!
//! Every colored cell is followed by a reset. When the grid height is odd the
//! last row is drawn as upper halves only.

use tinct_color::Color;

use crate::ansi::{bg_fg, fg, RESET};

pub const UPPER_HALF: char = '▀';
pub const LOWER_HALF: char = '▄';

/// A rectangular, row-major pixel buffer with its origin at the top left.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Grid {
    /// A fully transparent grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Color::NO_COLOR)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Builds a grid by evaluating `pixel(x, y)` for every position.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut pixel: impl FnMut(usize, usize) -> Color,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(pixel(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Sets one pixel. Out-of-bounds writes are ignored and return `false`.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.pixels[y * self.width + x] = color;
        true
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // chunks(0) panics; an empty grid has no pixels either way
        self.pixels.chunks(self.width.max(1))
    }
}

/// Renders `grid` as half-block text, one output line per two pixel rows.
///
/// Lines are separated by `\n`; there is no trailing newline.
///
/// With an odd height the last row has no partner: each visible pixel there is
/// a foreground-only `▀`, and a transparent one is a plain space rather than a
/// glyph, same as a transparent pair.
///
/// ```rust
/// use tinct_color::Color;
/// use tinct_render::{render_half_blocks, Grid};
///
/// let mut grid = Grid::new(2, 2);
/// grid.set(0, 0, Color::WHITE);
/// let text = render_half_blocks(&grid);
/// assert_eq!(text, "\x1b[38;2;255;255;255m▀\x1b[0m ");
/// ```
pub fn render_half_blocks(grid: &Grid) -> String {
    let rows: Vec<&[Color]> = grid.rows().collect();
    let mut lines = Vec::with_capacity(rows.len().div_ceil(2));

    for pair in rows.chunks(2) {
        let mut line = String::new();
        match pair {
            [top, bottom] => {
                for (&upper, &lower) in top.iter().zip(bottom.iter()) {
                    push_cell(&mut line, upper, Some(lower));
                }
            }
            [top] => {
                for &upper in top.iter() {
                    push_cell(&mut line, upper, None);
                }
            }
            _ => {}
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn push_cell(line: &mut String, top: Color, bottom: Option<Color>) {
    let top_visible = !top.is_transparent();
    let bottom = bottom.filter(|c| !c.is_transparent());

    let (escape, glyph) = match (top_visible, bottom) {
        (true, Some(bottom)) => (bg_fg(bottom, top), UPPER_HALF),
        (true, None) => (fg(top), UPPER_HALF),
        (false, Some(bottom)) => (fg(bottom), LOWER_HALF),
        (false, None) => {
            line.push(' ');
            return;
        }
    };
    line.push_str(&escape);
    line.push(glyph);
    line.push_str(RESET);
}
