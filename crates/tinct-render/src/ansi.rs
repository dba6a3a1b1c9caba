//! Truecolor SGR escape sequences.
//!
//! Colors are clamped and rounded to 8-bit channels before they are written.
//! Alpha is not representable in a terminal and is ignored here; composite
//! first with [`tinct_color::over`] when it matters.

use tinct_color::Color;

/// Resets all attributes.
pub const RESET: &str = "\x1b[0m";

/// `ESC[38;2;R;G;Bm`
pub fn fg(color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// `ESC[48;2;R;G;Bm`
pub fn bg(color: Color) -> String {
    let [r, g, b] = color.to_rgb8();
    format!("\x1b[48;2;{};{};{}m", r, g, b)
}

/// Background and foreground in a single sequence,
/// `ESC[48;2;R;G;B;38;2;R;G;Bm`.
pub fn bg_fg(background: Color, foreground: Color) -> String {
    let [r1, g1, b1] = background.to_rgb8();
    let [r2, g2, b2] = foreground.to_rgb8();
    format!(
        "\x1b[48;2;{};{};{};38;2;{};{};{}m",
        r1, g1, b1, r2, g2, b2
    )
}

/// `color` as background with black or white text, whichever reads better.
pub fn paint(color: Color) -> String {
    bg_fg(color, color.readable_foreground())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreground_and_background() {
        let c = Color::from_rgb8(255, 0, 170);
        assert_eq!(fg(c), "\x1b[38;2;255;0;170m");
        assert_eq!(bg(c), "\x1b[48;2;255;0;170m");
    }

    #[test]
    fn combined_sequence_puts_background_first() {
        let out = bg_fg(Color::from_rgb8(1, 2, 3), Color::from_rgb8(4, 5, 6));
        assert_eq!(out, "\x1b[48;2;1;2;3;38;2;4;5;6m");
    }

    #[test]
    fn paint_picks_contrasting_text() {
        assert_eq!(paint(Color::WHITE), "\x1b[48;2;255;255;255;38;2;0;0;0m");
        assert_eq!(paint(Color::BLACK), "\x1b[48;2;0;0;0;38;2;255;255;255m");
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(fg(Color::new(2.0, -1.0, 0.5, 1.0)), "\x1b[38;2;255;0;128m");
    }
}
