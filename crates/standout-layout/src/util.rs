//! Utility functions for ANSI-aware text measurement, truncation, padding and
//! wrapping.
//!
//! All functions in this module handle ANSI escape codes: they are preserved
//! in output but don't count toward display width. The free functions use
//! [`AnsiWidth`]; the layout engine calls the `*_with` variants with whatever
//! [`Measure`] its table was configured with.

use crate::measure::{pieces, AnsiWidth, Measure, Piece};

/// Horizontal alignment of content inside a padded cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Content on the left, padding on the right.
    #[default]
    Left,
    /// Content on the right, padding on the left.
    Right,
    /// Content centered; odd padding goes on the right.
    Center,
}

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use standout_layout::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    AnsiWidth.width(s)
}

/// Truncates a string from the end to fit within a maximum display width.
///
/// If the string already fits, it is returned unchanged. Otherwise grapheme
/// clusters are removed from the end and the ellipsis is appended, so the
/// result is never wider than `max_width`.
///
/// # Example
///
/// ```rust
/// use standout_layout::truncate_end;
///
/// assert_eq!(truncate_end("foo bar", 5, "..."), "fo...");
/// assert_eq!(truncate_end("Short", 10, "..."), "Short");
/// ```
pub fn truncate_end(s: &str, max_width: usize, ellipsis: &str) -> String {
    truncate_end_with(&AnsiWidth, s, max_width, ellipsis)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// ```rust
/// use standout_layout::pad_left;
///
/// assert_eq!(pad_left("42", 5), "   42");
/// assert_eq!(pad_left("hello", 3), "hello");  // No truncation
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_with(&AnsiWidth, s, width, Align::Right)
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// ```rust
/// use standout_layout::pad_right;
///
/// assert_eq!(pad_right("42", 5), "42   ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_with(&AnsiWidth, s, width, Align::Left)
}

/// Pads a string on both sides (centers) to reach the target width.
///
/// ```rust
/// use standout_layout::pad_center;
///
/// assert_eq!(pad_center("hi", 5), " hi  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_with(&AnsiWidth, s, width, Align::Center)
}

/// Breaks a line into pieces no wider than `width`.
///
/// Lines are cut at the width boundary; whitespace at the start of a
/// continuation line is dropped. Grapheme clusters are never split, and one
/// wider than `width` still occupies a line of its own, overflowing it.
///
/// ```rust
/// use standout_layout::wrap;
///
/// assert_eq!(wrap("foo bar", 5), vec!["foo b", "ar"]);
/// assert_eq!(wrap("bar baz", 3), vec!["bar", "baz"]);
/// ```
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    wrap_with(&AnsiWidth, s, width)
}

pub(crate) fn truncate_end_with(
    measure: &dyn Measure,
    s: &str,
    max_width: usize,
    ellipsis: &str,
) -> String {
    if measure.width(s) <= max_width {
        return s.to_string();
    }

    let ellipsis_width = measure.width(ellipsis);
    if max_width <= ellipsis_width {
        // Not enough room for any content; shorten the marker itself
        return truncate_to_display_width(measure, ellipsis, max_width);
    }

    let mut result = truncate_to_display_width(measure, s, max_width - ellipsis_width);
    result.push_str(ellipsis);
    result
}

// Padding goes through the table's `Measure`, which `console::pad_str`
// can't be handed.
pub(crate) fn pad_with(measure: &dyn Measure, s: &str, width: usize, align: Align) -> String {
    let missing = width.saturating_sub(measure.width(s));
    if missing == 0 {
        return s.to_string();
    }

    let (left, right) = match align {
        Align::Left => (0, missing),
        Align::Right => (missing, 0),
        Align::Center => (missing / 2, missing - missing / 2),
    };

    let mut out = String::with_capacity(s.len() + missing);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', right));
    out
}

pub(crate) fn wrap_with(measure: &dyn Measure, s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    let mut after_break = false;

    for piece in pieces(s) {
        match piece {
            Piece::Escape(seq) => current.push_str(seq),
            Piece::Grapheme(g) => {
                let g_width = measure.grapheme_width(g);
                if current_width > 0 && current_width + g_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                    after_break = true;
                }
                if after_break && current_width == 0 && g.chars().all(char::is_whitespace) {
                    continue;
                }
                after_break = false;
                current.push_str(g);
                current_width += g_width;
            }
        }
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    } else if let Some(last) = lines.last_mut() {
        // Trailing escapes (usually a reset) stay with the last real line
        last.push_str(&current);
    }
    lines
}

/// Keeps grapheme clusters from the start until `max_width` is reached.
///
/// Escape sequences are kept even past the cut so resets still apply.
fn truncate_to_display_width(measure: &dyn Measure, s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let mut full = false;

    for piece in pieces(s) {
        match piece {
            Piece::Escape(seq) => result.push_str(seq),
            Piece::Grapheme(_) if full => {}
            Piece::Grapheme(g) => {
                let g_width = measure.grapheme_width(g);
                if current_width + g_width > max_width {
                    full = true;
                    continue;
                }
                result.push_str(g);
                current_width += g_width;
            }
        }
    }

    result
}
