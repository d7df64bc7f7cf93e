//! Error types for catalog construction and loading.
//!
//! Queries over a built catalog never fail; every error here happens while
//! reading authored files or assembling the store.

use std::path::PathBuf;

use cheatsheet_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Authored data breaks a catalog invariant (duplicate name, empty title...).
    #[error("invalid catalog: {0}")]
    Invalid(#[from] ValidationError),

    /// A file extension that is neither JSON nor YAML.
    #[error("unsupported catalog file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// None of the configured loader sources exists.
    #[error("no catalog sources available")]
    NoSourcesAvailable,
}

impl CatalogError {
    /// True when the source path does not exist, as opposed to existing but
    /// failing to load.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::IoError(err) if err.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
