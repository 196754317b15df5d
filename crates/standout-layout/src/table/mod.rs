//! The table layout engine.
//!
//! A [`Table`] collects rows of cells and renders them as aligned columns
//! that fit a maximum line length:
//!
//! ```rust
//! use standout_layout::Table;
//!
//! let mut table = Table::new().line_length(22).separator_spaces(2);
//! table.add_row(["header1", "header2"]);
//! table.add_row(["short", "alongervalue"]);
//! table.add_row(["medium", "medium"]);
//!
//! assert_eq!(table.column_widths().widths, vec![7, 12]);
//! assert_eq!(
//!     table.render(),
//!     "header1  header2     \nshort    alongervalue\nmedium   medium      "
//! );
//! ```
//!
//! ## Rendering
//!
//! 1. Every column's natural width is the widest `\n`-delimited sub-line of
//!    any of its cells, in display cells.
//! 2. With a line length set, all columns start from the same cap and any
//!    budget left over is handed back in column order (see
//!    [`resolve_widths`]).
//! 3. Each cell is padded to its column width. Content that is too wide is
//!    wrapped onto more lines or truncated with an ellipsis, depending on
//!    [`Table::wrap`]. Cells shorter than the tallest cell in their row get
//!    blank lines.
//! 4. Formatter hooks run last, on the padded cell strings: the header
//!    formatter on every cell of the first row, the first-column formatter on
//!    the first cell of every other row.
//!
//! Widths are computed into a fresh array on every call; [`Table::render`]
//! takes `&self` and leaves the table untouched.

mod formatter;
mod resolve;
mod types;

use std::fmt;
use std::sync::Arc;

pub use formatter::{CellLines, DEFAULT_ELLIPSIS};
pub use resolve::{resolve_widths, ColumnWidths};
pub use types::{Cell, Row};

use self::formatter::RowFormatter;
use self::resolve::natural_widths;
use crate::config::TableConfig;
use crate::measure::{AnsiWidth, Measure};
use crate::traits::TabularRow;
use crate::util::Align;

/// A post-layout text transform, such as styling.
///
/// Formatters receive an already padded cell string and must not change its
/// display width; ANSI styling is the intended use.
pub type Formatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Rows of cells rendered as width-constrained columns.
#[derive(Clone)]
pub struct Table {
    rows: Vec<Row>,
    line_length: usize,
    wrap: bool,
    separator_spaces: usize,
    ellipsis: String,
    aligns: Vec<Align>,
    header_formatter: Option<Formatter>,
    first_column_formatter: Option<Formatter>,
    measure: Arc<dyn Measure>,
}

impl Default for Table {
    fn default() -> Self {
        Table::with_config(TableConfig::default())
    }
}

impl Table {
    /// Create an empty, unconstrained table with two-space separators.
    pub fn new() -> Self {
        Table::default()
    }

    /// Create an empty table from a configuration.
    pub fn with_config(config: TableConfig) -> Self {
        Table {
            rows: Vec::new(),
            line_length: config.line_length,
            wrap: config.wrap,
            separator_spaces: config.separator_spaces,
            ellipsis: config.ellipsis,
            aligns: Vec::new(),
            header_formatter: None,
            first_column_formatter: None,
            measure: Arc::new(AnsiWidth),
        }
    }

    /// Create an empty table constrained to the terminal width.
    pub fn for_terminal() -> Self {
        Table::with_config(TableConfig::for_terminal())
    }

    /// Set the maximum line length. `0` means unconstrained.
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Wrap oversized content (`true`) or truncate it with the ellipsis.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the number of spaces between columns.
    pub fn separator_spaces(mut self, spaces: usize) -> Self {
        self.separator_spaces = spaces;
        self
    }

    /// Set the truncation marker.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Set the alignment of one column. Columns default to [`Align::Left`].
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if self.aligns.len() <= column {
            self.aligns.resize(column + 1, Align::default());
        }
        self.aligns[column] = align;
        self
    }

    /// Set the formatter applied to every cell of the header row.
    pub fn header_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header_formatter = Some(Arc::new(f));
        self
    }

    /// Set the formatter applied to the first cell of every non-header row.
    pub fn first_column_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.first_column_formatter = Some(Arc::new(f));
        self
    }

    /// Style header cells with a `console::Style`.
    pub fn header_style(self, style: console::Style) -> Self {
        self.header_formatter(move |s| style.apply_to(s).to_string())
    }

    /// Style the first column of data rows with a `console::Style`.
    pub fn first_column_style(self, style: console::Style) -> Self {
        self.first_column_formatter(move |s| style.apply_to(s).to_string())
    }

    /// Measure display width with a custom strategy.
    pub fn measure(mut self, measure: impl Measure + 'static) -> Self {
        self.measure = Arc::new(measure);
        self
    }

    /// Append a row. Rows may have any number of cells.
    pub fn add_row<I>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        self.rows.push(Row::new(cells));
        self
    }

    /// Append a row built from a record's [`TabularRow`] implementation.
    pub fn add_record<T: TabularRow + ?Sized>(&mut self, record: &T) -> &mut Self {
        self.add_row(record.to_row())
    }

    /// The rows, in render order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns: the cell count of the longest row.
    pub fn num_columns(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// The column widths a render of the current rows would use.
    pub fn column_widths(&self) -> ColumnWidths {
        let natural = natural_widths(&self.rows, self.measure.as_ref());
        resolve_widths(&natural, self.line_length, self.separator_spaces)
    }

    /// Render all rows, joined by newlines, without a trailing newline.
    ///
    /// An empty table renders as an empty string.
    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        tracing::debug!(
            rows = self.rows.len(),
            columns = widths.len(),
            line_length = self.line_length,
            "rendering table"
        );

        let formatter = RowFormatter {
            measure: self.measure.as_ref(),
            widths: &widths,
            aligns: &self.aligns,
            wrap: self.wrap,
            ellipsis: &self.ellipsis,
        };
        let separator = " ".repeat(self.separator_spaces);

        let mut output = Vec::with_capacity(self.rows.len());
        for (index, row) in self.rows.iter().enumerate() {
            for line in formatter.format_row_lines(row) {
                let cells: Vec<String> = line
                    .into_iter()
                    .enumerate()
                    .map(|(column, cell)| self.style_cell(index, column, cell))
                    .collect();
                output.push(cells.join(separator.as_str()));
            }
        }

        output.join("\n")
    }

    fn style_cell(&self, row: usize, column: usize, cell: String) -> String {
        let formatter = if row == 0 {
            self.header_formatter.as_ref()
        } else if column == 0 {
            self.first_column_formatter.as_ref()
        } else {
            None
        };

        match formatter {
            Some(f) => f(&cell),
            None => cell,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.rows)
            .field("line_length", &self.line_length)
            .field("wrap", &self.wrap)
            .field("separator_spaces", &self.separator_spaces)
            .field("ellipsis", &self.ellipsis)
            .field("aligns", &self.aligns)
            .field("header_formatter", &self.header_formatter.is_some())
            .field("first_column_formatter", &self.first_column_formatter.is_some())
            .finish_non_exhaustive()
    }
}
