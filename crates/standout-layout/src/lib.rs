//! # Standout Layout - Width-Constrained Terminal Tables
//!
//! `standout-layout` turns rows of heterogeneous values into aligned,
//! human-readable columns that fit a maximum line width. It decides the
//! width of every column, wraps or truncates content that doesn't fit, and
//! keeps multi-line cells lined up.
//!
//! Widths are measured in terminal cells: CJK characters count as 2, ANSI
//! escape codes count as 0.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_layout::{cells, Table};
//!
//! let mut table = Table::new().line_length(18).wrap(true);
//! table.add_row(["NAME", "DESCRIPTION"]);
//! table.add_row(cells!["cache", "stores things for later"]);
//! table.add_row(cells!["queue", 42]);
//!
//! assert_eq!(
//!     table.render(),
//!     "NAME   DESCRIPTION\n\
//!      cache  stores thin\n\
//!      \x20      gs for late\n\
//!      \x20      r          \n\
//!      queue  42         "
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - [`Table`]: collects rows and renders them; rendering never fails and
//!   never mutates the table.
//! - [`resolve_widths`]: the width allocation, usable on its own.
//! - [`Measure`]: how display width is measured; [`AnsiWidth`] by default.
//! - [`TableConfig`]: line length, wrap policy and separator, from code, the
//!   terminal, or a YAML/JSON document.
//! - [`TabularRow`]: feed typed records into a table.
//!
//! ## Styling
//!
//! Styling is a hook, not a policy: formatters receive padded cell strings
//! after layout and must keep their display width.
//!
//! ```rust
//! use standout_layout::Table;
//! use console::Style;
//!
//! let mut table = Table::new()
//!     .header_style(Style::new().bold())
//!     .first_column_formatter(|s| s.to_uppercase());
//! table.add_row(["id", "state"]);
//! table.add_row(["a1", "ok"]);
//! println!("{}", table);
//! ```

pub mod config;
mod error;
pub mod measure;
pub mod table;
mod traits;
mod util;

pub use config::{TableConfig, DEFAULT_LINE_LENGTH, DEFAULT_SEPARATOR_SPACES};
pub use error::LayoutError;
pub use measure::{AnsiWidth, Measure};
pub use table::{
    resolve_widths, Cell, CellLines, ColumnWidths, Formatter, Row, Table, DEFAULT_ELLIPSIS,
};
pub use traits::{TabularFieldDisplay, TabularFieldOption, TabularRow};
pub use util::{display_width, pad_center, pad_left, pad_right, truncate_end, wrap, Align};
