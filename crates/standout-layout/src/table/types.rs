//! Row and cell types.

use std::fmt::Display;

/// One column's value within one row.
///
/// The value is rendered through [`Display`] when the cell is built. A cell
/// carries no layout state; the width it is rendered at is decided per
/// render from the whole table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    text: String,
}

impl Cell {
    /// Create a cell from any displayable value.
    pub fn new(value: impl Display) -> Self {
        Cell {
            text: value.to_string(),
        }
    }

    /// An empty cell.
    pub fn blank() -> Self {
        Cell::default()
    }

    /// The stringified value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The raw `\n`-delimited sub-lines of the value.
    ///
    /// A `\r` before the newline is not part of the line.
    pub fn sub_lines(&self) -> impl Iterator<Item = &str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

impl<T: Display> From<T> for Cell {
    fn from(value: T) -> Self {
        Cell::new(value)
    }
}

/// One line of input data: an ordered sequence of cells.
///
/// Rows in a table may have different lengths; the table is as wide as its
/// longest row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Create a row from values convertible into cells.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Row {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// The cells in column order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column index.
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Number of cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row { cells }
    }
}

/// Build a `Vec<Cell>` from values of different types.
///
/// ```rust
/// use standout_layout::{cells, Table};
///
/// let mut table = Table::new();
/// table.add_row(cells!["id", "size", "ratio"]);
/// table.add_row(cells![7, 1024u64, 0.5]);
/// assert_eq!(table.render(), "id  size  ratio\n7   1024  0.5  ");
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::Cell::from($value)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_stringifies_display_values() {
        assert_eq!(Cell::new(42).text(), "42");
        assert_eq!(Cell::from(1.5).text(), "1.5");
        assert_eq!(Cell::from("x").text(), "x");
        assert_eq!(Cell::from(String::from("owned")).text(), "owned");
    }

    #[test]
    fn sub_lines_split_on_newline() {
        let cell = Cell::new("one\ntwo\r\nthree");
        let lines: Vec<&str> = cell.sub_lines().collect();
        assert_eq!(lines, vec!["one", "two", "three"]);
    }

    #[test]
    fn blank_cell_has_one_empty_sub_line() {
        let blank = Cell::blank();
        let lines: Vec<&str> = blank.sub_lines().collect();
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn row_from_mixed_values() {
        let row = Row::from(crate::cells!["a", 1, 'c']);
        assert_eq!(row.len(), 3);
        assert_eq!(row.get(1).map(Cell::text), Some("1"));
        assert_eq!(row.get(3), None);
    }
}
