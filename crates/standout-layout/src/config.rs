//! Table configuration.
//!
//! [`TableConfig`] groups the knobs the command layer usually decides on
//! before any rows exist: the line length, the overflow policy, the column
//! separator and the truncation marker. It can be built in code, detected
//! from the terminal, or loaded from a YAML/JSON document.
//!
//! ```rust
//! use standout_layout::TableConfig;
//!
//! let config = TableConfig::from_yaml("line_length: 100\nwrap: true\n").unwrap();
//! assert_eq!(config.line_length, 100);
//! assert!(config.wrap);
//! assert_eq!(config.separator_spaces, 2); // default
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::table::DEFAULT_ELLIPSIS;

/// Line length used when the terminal width cannot be detected.
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// Default number of spaces between adjacent columns.
pub const DEFAULT_SEPARATOR_SPACES: usize = 2;

/// Layout settings for a [`Table`](crate::Table).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Maximum output width in terminal cells. `0` means unconstrained.
    pub line_length: usize,
    /// Wrap oversized content instead of truncating it.
    pub wrap: bool,
    /// Spaces between adjacent columns.
    pub separator_spaces: usize,
    /// Marker appended to truncated content.
    pub ellipsis: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            line_length: 0,
            wrap: false,
            separator_spaces: DEFAULT_SEPARATOR_SPACES,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

impl TableConfig {
    /// Configuration constrained to the current terminal width.
    ///
    /// Falls back to [`DEFAULT_LINE_LENGTH`] when stdout is not a terminal.
    pub fn for_terminal() -> Self {
        let line_length = terminal_width().unwrap_or(DEFAULT_LINE_LENGTH);
        tracing::debug!(line_length, "table line length from terminal");
        TableConfig {
            line_length,
            ..Default::default()
        }
    }

    /// Parse a configuration from YAML. Missing keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, LayoutError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the line length.
    pub fn line_length(mut self, line_length: usize) -> Self {
        self.line_length = line_length;
        self
    }

    /// Set the overflow policy.
    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the separator width.
    pub fn separator_spaces(mut self, spaces: usize) -> Self {
        self.separator_spaces = spaces;
        self
    }
}

/// Get the current terminal width, if stdout is a terminal.
fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .filter(|&w| w > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TableConfig::default();
        assert_eq!(config.line_length, 0);
        assert!(!config.wrap);
        assert_eq!(config.separator_spaces, 2);
        assert_eq!(config.ellipsis, "...");
    }

    #[test]
    fn from_yaml_full() {
        let config = TableConfig::from_yaml(
            "line_length: 40\nwrap: true\nseparator_spaces: 3\nellipsis: \"~\"\n",
        )
        .unwrap();
        assert_eq!(
            config,
            TableConfig {
                line_length: 40,
                wrap: true,
                separator_spaces: 3,
                ellipsis: "~".to_string(),
            }
        );
    }

    #[test]
    fn from_json_partial() {
        let config = TableConfig::from_json(r#"{"separator_spaces": 1}"#).unwrap();
        assert_eq!(config.separator_spaces, 1);
        assert_eq!(config.line_length, 0);
    }

    #[test]
    fn from_yaml_rejects_bad_types() {
        let err = TableConfig::from_yaml("line_length: wide").unwrap_err();
        assert!(matches!(err, LayoutError::Yaml(_)));
    }

    #[test]
    fn from_json_rejects_negative_width() {
        let err = TableConfig::from_json(r#"{"line_length": -1}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn for_terminal_always_constrains() {
        // Under the test harness stdout may or may not be a tty
        assert!(TableConfig::for_terminal().line_length > 0);
    }

    #[test]
    fn builder_setters() {
        let config = TableConfig::default()
            .line_length(60)
            .wrap(true)
            .separator_spaces(4);
        assert_eq!(config.line_length, 60);
        assert!(config.wrap);
        assert_eq!(config.separator_spaces, 4);
    }
}
