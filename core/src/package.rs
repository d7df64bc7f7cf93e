//! Versioned catalog bundles.
//!
//! A [`CatalogPackage`] is what `bundle` exports and what a bundle source
//! loads back.

use serde::{Deserialize, Serialize};

use crate::Cheatsheet;

/// Serializable catalog bundle used for distribution.
///
/// A package groups cheatsheets with version metadata so a whole catalog can
/// ship as a single JSON file.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::*;
///
/// let mut package = CatalogPackage::new("1.0.0", "2024-01-15T10:30:00Z");
/// package.name = Some("devtools".into());
/// package.cheatsheets.push(Cheatsheet::new("Git"));
/// package.cheatsheets.push(Cheatsheet::new("Docker"));
///
/// assert_eq!(package.cheatsheet_count(), 2);
/// assert_eq!(package.version, "1.0.0");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPackage {
    /// Catalog contract version (populated from
    /// [`CATALOG_CONTRACT_VERSION`](crate::CATALOG_CONTRACT_VERSION)).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,
    /// Package format version (semver string).
    pub version: String,
    /// Optional package name.
    pub name: Option<String>,
    /// Optional package description.
    pub description: Option<String>,
    /// RFC 3339 timestamp for package creation.
    pub generated_at: String,
    /// Optional hash of the serialized cheatsheets.
    pub bundle_hash: Option<String>,
    /// Cheatsheets, in catalog order.
    pub cheatsheets: Vec<Cheatsheet>,
}

impl CatalogPackage {
    /// Creates a package with required fields.
    pub fn new(version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            schema_version: Some(crate::CATALOG_CONTRACT_VERSION.to_string()),
            version: version.into(),
            name: None,
            description: None,
            generated_at: generated_at.into(),
            bundle_hash: None,
            cheatsheets: Vec::new(),
        }
    }

    /// Returns the number of cheatsheets in this package.
    pub fn cheatsheet_count(&self) -> usize {
        self.cheatsheets.len()
    }
}
