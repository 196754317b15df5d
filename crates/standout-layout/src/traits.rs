//! Traits for feeding typed records into a table.

/// Trait for types that can be converted to a row of cell strings.
///
/// # Example
///
/// ```rust
/// use standout_layout::{Table, TabularRow};
///
/// struct Task {
///     id: u32,
///     title: String,
///     done: Option<bool>,
/// }
///
/// impl TabularRow for Task {
///     fn to_row(&self) -> Vec<String> {
///         use standout_layout::{TabularFieldDisplay, TabularFieldOption};
///         vec![
///             self.id.to_tabular_cell(),
///             self.title.to_tabular_cell(),
///             TabularFieldOption::to_tabular_cell(&self.done),
///         ]
///     }
/// }
///
/// let mut table = Table::new();
/// table.add_row(["ID", "TITLE", "DONE"]);
/// table.add_record(&Task { id: 1, title: "write docs".into(), done: None });
/// assert_eq!(table.render(), "ID  TITLE       DONE\n1   write docs      ");
/// ```
pub trait TabularRow {
    /// Converts this instance to a row of string values.
    fn to_row(&self) -> Vec<String>;
}

impl<T: TabularRow + ?Sized> TabularRow for &T {
    fn to_row(&self) -> Vec<String> {
        (**self).to_row()
    }
}

/// Cell conversion for plain displayable fields.
pub trait TabularFieldDisplay {
    fn to_tabular_cell(&self) -> String;
}

impl<T: std::fmt::Display> TabularFieldDisplay for T {
    fn to_tabular_cell(&self) -> String {
        self.to_string()
    }
}

/// Cell conversion for optional fields; `None` becomes an empty cell.
pub trait TabularFieldOption {
    fn to_tabular_cell(&self) -> String;
}

impl<T: std::fmt::Display> TabularFieldOption for Option<T> {
    fn to_tabular_cell(&self) -> String {
        match self {
            Some(v) => v.to_string(),
            None => String::new(),
        }
    }
}
