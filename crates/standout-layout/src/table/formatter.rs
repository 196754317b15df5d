//! Cell and row formatting against resolved widths.
//!
//! A cell is laid out into a [`CellLines`] block: one entry per physical
//! output line, each padded to the column width. Rows are formatted by laying
//! out every column and filling shorter blocks with blank lines, so all cells
//! of a row end up with the same height.

use super::resolve::ColumnWidths;
use super::types::{Cell, Row};
use crate::measure::{AnsiWidth, Measure};
use crate::util::{pad_with, truncate_end_with, wrap_with, Align};

/// Default marker appended to truncated content.
pub const DEFAULT_ELLIPSIS: &str = "...";

/// A cell laid out for a given width: one or more padded lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellLines {
    lines: Vec<String>,
    width: usize,
}

impl CellLines {
    /// A block of `height` blank lines of the given width.
    pub fn blank(width: usize, height: usize) -> Self {
        CellLines {
            lines: vec![" ".repeat(width); height.max(1)],
            width,
        }
    }

    /// The physical lines, each already padded.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get a specific line.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of physical lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Display width of the block: the widest line.
    ///
    /// Equal to the column width unless a character wider than the column
    /// forced an overflow.
    pub fn width(&self) -> usize {
        self.width
    }

    pub(crate) fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Cell {
    /// Lay this cell out at `width` with the default measure and ellipsis.
    ///
    /// # Example
    ///
    /// ```rust
    /// use standout_layout::Cell;
    ///
    /// let cell = Cell::new("foo bar");
    /// assert_eq!(cell.layout(5, false).lines(), ["fo..."]);
    ///
    /// let wrapped = cell.layout(5, true);
    /// assert_eq!(wrapped.lines(), ["foo b", "ar   "]);
    /// assert_eq!(wrapped.width(), 5);
    /// ```
    pub fn layout(&self, width: usize, wrap: bool) -> CellLines {
        format_cell(&AnsiWidth, self, width, wrap, DEFAULT_ELLIPSIS, Align::Left)
    }
}

/// Lay out one cell: pad, wrap or truncate every sub-line to `width`.
pub(crate) fn format_cell(
    measure: &dyn Measure,
    cell: &Cell,
    width: usize,
    wrap: bool,
    ellipsis: &str,
    align: Align,
) -> CellLines {
    let mut lines = Vec::new();

    for sub_line in cell.sub_lines() {
        if measure.width(sub_line) <= width {
            lines.push(pad_with(measure, sub_line, width, align));
        } else if wrap {
            lines.extend(
                wrap_with(measure, sub_line, width)
                    .iter()
                    .map(|piece| pad_with(measure, piece, width, align)),
            );
        } else {
            let truncated = truncate_end_with(measure, sub_line, width, ellipsis);
            lines.push(pad_with(measure, &truncated, width, align));
        }
    }

    let block_width = lines
        .iter()
        .map(|line| measure.width(line))
        .max()
        .unwrap_or(width);

    CellLines {
        lines,
        width: block_width,
    }
}

/// Formats rows against a fixed set of column widths.
pub(crate) struct RowFormatter<'a> {
    pub(crate) measure: &'a dyn Measure,
    pub(crate) widths: &'a ColumnWidths,
    pub(crate) aligns: &'a [Align],
    pub(crate) wrap: bool,
    pub(crate) ellipsis: &'a str,
}

impl RowFormatter<'_> {
    /// Lay out a row into physical lines, each a list of padded cell strings.
    ///
    /// Columns beyond the row's last cell render as blank padding.
    pub(crate) fn format_row_lines(&self, row: &Row) -> Vec<Vec<String>> {
        let blocks: Vec<CellLines> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| match row.get(i) {
                Some(cell) => {
                    let align = self.aligns.get(i).copied().unwrap_or_default();
                    format_cell(self.measure, cell, width, self.wrap, self.ellipsis, align)
                }
                None => CellLines::blank(width, 1),
            })
            .collect();

        let height = blocks.iter().map(CellLines::height).max().unwrap_or(1);

        let mut columns: Vec<std::vec::IntoIter<String>> = blocks
            .into_iter()
            .map(|block| block.into_lines().into_iter())
            .collect();

        (0..height)
            .map(|_| {
                columns
                    .iter_mut()
                    .zip(self.widths.iter())
                    .map(|(lines, width)| lines.next().unwrap_or_else(|| " ".repeat(width)))
                    .collect()
            })
            .collect()
    }
}
