//! Width resolution algorithm for table columns.
//!
//! Widths are resolved in two phases. Every column first starts from the same
//! cap, `(line_length - separators) / columns`, and is clamped to it. Any
//! budget left over is then handed back in column order, each column growing
//! at most to its natural width. Earlier columns are topped up first.

use super::Row;
use crate::measure::Measure;

/// Resolved widths for all columns in a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    /// Width for each column in display columns.
    pub widths: Vec<usize>,
}

impl ColumnWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Get the total width of all columns (without separators).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Iterate over the widths in column order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }
}

/// Resolve column widths from natural (unconstrained) widths.
///
/// With `line_length == 0` the natural widths are returned unchanged.
///
/// # Example
///
/// ```rust
/// use standout_layout::resolve_widths;
///
/// // Cap is (22 - 2) / 2 = 10; the 2 cells of slack go back to column two.
/// let widths = resolve_widths(&[7, 12], 22, 2);
/// assert_eq!(widths.widths, vec![7, 12]);
///
/// // Cap is (18 - 2) / 2 = 8 and no slack remains.
/// let widths = resolve_widths(&[12, 12], 18, 2);
/// assert_eq!(widths.widths, vec![8, 8]);
/// ```
pub fn resolve_widths(natural: &[usize], line_length: usize, separator: usize) -> ColumnWidths {
    if natural.is_empty() || line_length == 0 {
        return ColumnWidths {
            widths: natural.to_vec(),
        };
    }

    let separators = (natural.len() - 1) * separator;
    let cap = line_length.saturating_sub(separators) / natural.len();

    let mut widths: Vec<usize> = natural.iter().map(|&w| w.min(cap)).collect();

    let used = widths.iter().sum::<usize>() + separators;
    let mut slack = line_length.saturating_sub(used);
    for (width, &wanted) in widths.iter_mut().zip(natural) {
        if slack == 0 {
            break;
        }
        let grow = slack.min(wanted - *width);
        *width += grow;
        slack -= grow;
    }

    tracing::trace!(?natural, cap, ?widths, "resolved column widths");
    ColumnWidths { widths }
}

/// Natural width of every column: the widest sub-line of any cell in it.
pub(crate) fn natural_widths(rows: &[Row], measure: &dyn Measure) -> Vec<usize> {
    let columns = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    let mut widths = vec![0; columns];

    for row in rows {
        for (i, cell) in row.cells().iter().enumerate() {
            let cell_width = cell
                .sub_lines()
                .map(|line| measure.width(line))
                .max()
                .unwrap_or(0);
            widths[i] = widths[i].max(cell_width);
        }
    }

    widths
}
