//! Errors surfaced by the viewer binary.

use cheatsheet_core::{CopyKey, ParseCopyKeyError};
use cheatsheet_db::CatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    /// No cheatsheet has this exact name.
    #[error("cheatsheet not found: {0}")]
    NotFound(String),

    /// The key does not address a code block or example.
    #[error("nothing to copy at {key} in {name}")]
    NothingToCopy { name: String, key: CopyKey },

    #[error(transparent)]
    InvalidKey(#[from] ParseCopyKeyError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Authored files failed validation.
    #[error("{0} invalid cheatsheet file(s)")]
    Invalid(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
