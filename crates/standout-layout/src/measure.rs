//! Display-width measurement.
//!
//! Terminal layout needs the number of cells a string occupies, which is
//! neither its byte length nor its `char` count: CJK characters and most
//! emoji take two cells, combining marks take none, and ANSI escape
//! sequences take none at all.
//!
//! The [`Measure`] trait is the seam the layout engine measures through.
//! [`AnsiWidth`] is the default and is what every public helper in this
//! crate uses unless a table is given another measure.
//!
//! ```rust
//! use standout_layout::{AnsiWidth, Measure};
//!
//! let m = AnsiWidth;
//! assert_eq!(m.width("hello"), 5);
//! assert_eq!(m.width("日本"), 4);
//! assert_eq!(m.width("\x1b[31mred\x1b[0m"), 3);
//! ```

use console::AnsiCodeIterator;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Measures the display width of text, in terminal cells.
///
/// Implementors only need [`char_width`](Measure::char_width). Text is laid
/// out one grapheme cluster at a time, so an emoji sequence or a letter with
/// combining marks is never split; [`grapheme_width`](Measure::grapheme_width)
/// defaults to the sum of its characters. The provided
/// [`width`](Measure::width) adds up grapheme widths and skips ANSI escape
/// sequences. Overriding `width` is allowed, but it must stay consistent with
/// `grapheme_width` or wrapped lines may not line up.
pub trait Measure: Send + Sync {
    /// Width of a single printable character.
    fn char_width(&self, c: char) -> usize;

    /// Width of one grapheme cluster.
    fn grapheme_width(&self, grapheme: &str) -> usize {
        grapheme.chars().map(|c| self.char_width(c)).sum()
    }

    /// Width of a whole string, ignoring escape sequences.
    fn width(&self, s: &str) -> usize {
        pieces(s)
            .map(|piece| match piece {
                Piece::Escape(_) => 0,
                Piece::Grapheme(g) => self.grapheme_width(g),
            })
            .sum()
    }
}

/// Unicode-aware measure that treats ANSI escape sequences as zero-width.
///
/// Widths match [`console::measure_text_width`], so emoji presentation and
/// ZWJ sequences count as a single wide glyph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnsiWidth;

impl Measure for AnsiWidth {
    fn char_width(&self, c: char) -> usize {
        c.width().unwrap_or(0)
    }

    fn grapheme_width(&self, grapheme: &str) -> usize {
        grapheme.width()
    }

    fn width(&self, s: &str) -> usize {
        console::measure_text_width(s)
    }
}

/// A chunk of text as seen by the layout engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// A complete escape sequence, copied through verbatim.
    Escape(&'a str),
    /// A user-perceived character: never split by wrapping or truncation.
    Grapheme(&'a str),
}

/// Splits a string into escape sequences and grapheme clusters.
///
/// Escape sequences (CSI, OSC hyperlinks, DCS) are recognised by
/// [`console::AnsiCodeIterator`]; anything it doesn't match is text.
pub(crate) fn pieces(s: &str) -> impl Iterator<Item = Piece<'_>> {
    AnsiCodeIterator::new(s).flat_map(|(chunk, is_ansi)| {
        let (escape, text) = if is_ansi {
            (Some(Piece::Escape(chunk)), "")
        } else {
            (None, chunk)
        };
        escape
            .into_iter()
            .chain(text.graphemes(true).map(Piece::Grapheme))
    })
}
