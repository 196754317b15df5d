//! Error types for layout configuration.
//!
//! Rendering itself never fails; only loading a [`TableConfig`](crate::TableConfig)
//! from a document can.

/// Errors that can occur while loading a table configuration.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The YAML document could not be parsed into a configuration.
    #[error("invalid YAML table config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document could not be parsed into a configuration.
    #[error("invalid JSON table config: {0}")]
    Json(#[from] serde_json::Error),
}
