//! Viewer configuration.
//!
//! Defines the YAML-serializable configuration that selects the catalog
//! sources, the default output format and how long a "copied" marker stays
//! visible. Every field is optional in the file.
//!
//! # Example YAML
//!
//! ```yaml
//! version: "1.0"
//! catalog_dir: ~/.config/cheatsheet/sheets
//! bundle: /usr/share/cheatsheet/catalog.json
//! use_builtin: true
//! default_format: table
//! copy_feedback_ms: 2000
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::loader::CatalogBuilder;

/// How long a "copied" marker stays visible by default.
pub const DEFAULT_COPY_FEEDBACK_MS: u64 = 2000;

/// Output format names understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    #[default]
    Table,
    Markdown,
    Json,
    Yaml,
}

/// Top-level viewer configuration.
///
/// # Examples
///
/// ```
/// use cheatsheet_db::ViewerConfig;
///
/// let config: ViewerConfig = serde_yaml::from_str("copy_feedback_ms: 500").unwrap();
/// assert_eq!(config.copy_feedback().as_millis(), 500);
/// assert!(config.use_builtin);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Configuration format version (e.g., `"1.0"`).
    pub version: String,
    /// Directory of authored cheatsheet files, tried first.
    pub catalog_dir: Option<PathBuf>,
    /// Catalog bundle file, tried after `catalog_dir`.
    pub bundle: Option<PathBuf>,
    /// Fall back to the built-in catalog.
    pub use_builtin: bool,
    /// Format used when the command line does not pick one.
    pub default_format: FormatName,
    /// Lifetime of a "copied" marker, in milliseconds.
    pub copy_feedback_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            catalog_dir: None,
            bundle: None,
            use_builtin: true,
            default_format: FormatName::default(),
            copy_feedback_ms: DEFAULT_COPY_FEEDBACK_MS,
        }
    }
}

impl ViewerConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::CatalogError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::CatalogError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::CatalogError::IoError) if the file cannot
    /// be written, or [`YamlError`](crate::CatalogError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Lifetime of a "copied" marker.
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// Builds the catalog fallback chain described by this configuration.
    ///
    /// Order: `catalog_dir`, then `bundle`, then the built-in catalog when
    /// `use_builtin` is set. Paths that do not exist are skipped; a path
    /// that exists but fails to load is reported by
    /// [`CatalogBuilder::build`].
    pub fn catalog_builder(&self) -> CatalogBuilder {
        let mut builder = CatalogBuilder::new();
        if let Some(dir) = &self.catalog_dir {
            builder = builder.from_dir(dir.clone());
        }
        if let Some(bundle) = &self.bundle {
            builder = builder.from_bundle(bundle.clone());
        }
        if self.use_builtin {
            builder = builder.with_builtin();
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
version: "1.0"
catalog_dir: /opt/sheets
bundle: /opt/catalog.json
use_builtin: false
default_format: markdown
copy_feedback_ms: 750
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: ViewerConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.catalog_dir, Some(PathBuf::from("/opt/sheets")));
        assert_eq!(config.bundle, Some(PathBuf::from("/opt/catalog.json")));
        assert!(!config.use_builtin);
        assert_eq!(config.default_format, FormatName::Markdown);
        assert_eq!(config.copy_feedback(), Duration::from_millis(750));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: ViewerConfig = serde_yaml::from_str("version: \"1.0\"").unwrap();
        assert!(config.catalog_dir.is_none());
        assert!(config.use_builtin);
        assert_eq!(config.default_format, FormatName::Table);
        assert_eq!(config.copy_feedback_ms, DEFAULT_COPY_FEEDBACK_MS);
    }

    #[test]
    fn test_catalog_builder_without_sources_fails() {
        let config: ViewerConfig = serde_yaml::from_str("use_builtin: false").unwrap();
        assert!(config.catalog_builder().build().is_err());
    }

    #[test]
    fn test_catalog_builder_falls_back_to_builtin() {
        let config: ViewerConfig =
            serde_yaml::from_str("catalog_dir: /nonexistent/sheets").unwrap();
        let store = config.catalog_builder().build().unwrap();
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yml");

        let original: ViewerConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        original.save(&path).unwrap();

        let loaded = ViewerConfig::load(&path).unwrap();
        assert_eq!(loaded.catalog_dir, original.catalog_dir);
        assert_eq!(loaded.default_format, original.default_format);
        assert_eq!(loaded.copy_feedback_ms, original.copy_feedback_ms);
    }
}
