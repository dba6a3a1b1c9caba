//! Text panels shown next to swatches.

use console::measure_text_width;
use tinct_color::{color_name, Color, Representation};

/// Representations listed in the detail panel, in order.
pub const DETAIL_REPRESENTATIONS: [Representation; 7] = [
    Representation::Hex,
    Representation::Rgb,
    Representation::Hsl,
    Representation::Lab,
    Representation::Lch,
    Representation::Oklab,
    Representation::Oklch,
];

/// The CSS name (or an empty line when the color has none) followed by one
/// line per representation in [`DETAIL_REPRESENTATIONS`].
pub fn color_details(color: Color) -> String {
    let mut lines = Vec::with_capacity(DETAIL_REPRESENTATIONS.len() + 1);
    lines.push(color_name(color).unwrap_or_default().to_string());
    lines.extend(DETAIL_REPRESENTATIONS.iter().map(|&repr| color.format(repr)));
    lines.join("\n")
}

/// Places `right` beside `left`, line by line, separated by one space.
///
/// Left lines are padded to `width` visible columns; escape sequences do not
/// count towards the width. A `width` of 0 uses the widest left line. The
/// shorter block is extended with empty lines.
///
/// ```rust
/// use tinct_render::merge_columns;
///
/// let merged = merge_columns("ab\nc", "1\n2\n3", 0);
/// assert_eq!(merged, "ab 1\nc  2\n   3");
/// ```
pub fn merge_columns(left: &str, right: &str, width: usize) -> String {
    let left: Vec<&str> = left.split('\n').collect();
    let right: Vec<&str> = right.split('\n').collect();

    let width = if width == 0 {
        left.iter().map(|line| measure_text_width(line)).max().unwrap_or(0)
    } else {
        width
    };

    let rows = left.len().max(right.len());
    (0..rows)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or("");
            let r = right.get(i).copied().unwrap_or("");
            let padding = width.saturating_sub(measure_text_width(l));
            format!("{}{} {}", l, " ".repeat(padding), r)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_of_a_named_color() {
        let red = Color::rgb(1.0, 0.0, 0.0);
        let details = color_details(red);
        let lines: Vec<&str> = details.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "red");
        assert_eq!(lines[1], "#ff0000");
        assert_eq!(lines[2], "rgb(255 0 0)");
        assert!(lines[3].starts_with("hsl("));
        assert!(lines[7].starts_with("oklch("));
    }

    #[test]
    fn unnamed_color_leaves_the_first_line_empty() {
        let details = color_details(Color::from_rgb8(0x12, 0x34, 0x56));
        assert!(details.starts_with("\n#123456\n"));
    }

    #[test]
    fn merge_ignores_escape_sequences_in_width() {
        let left = "\x1b[38;2;1;2;3m▀▀\x1b[0m\nx";
        let merged = merge_columns(left, "a\nb", 0);
        let lines: Vec<&str> = merged.split('\n').collect();
        assert_eq!(lines[0], "\x1b[38;2;1;2;3m▀▀\x1b[0m a");
        assert_eq!(lines[1], "x  b");
    }

    #[test]
    fn merge_with_explicit_width() {
        assert_eq!(merge_columns("a", "b", 4), "a    b");
    }

    #[test]
    fn merge_pads_a_shorter_left_block() {
        assert_eq!(merge_columns("a", "1\n2", 1), "a 1\n  2");
    }
}
