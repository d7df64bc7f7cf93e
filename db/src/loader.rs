//! Catalog store construction with builder pattern and fallback chains.
//!
//! Provides [`CatalogStore`], the immutable ordered list of cheatsheets, and
//! [`CatalogBuilder`] for constructing a store from several sources with
//! automatic fallback.
//!
//! # Loading patterns
//!
//! ```no_run
//! use cheatsheet_db::CatalogStore;
//!
//! // The hand-authored catalog shipped with the crate
//! let store = CatalogStore::builtin();
//! assert!(!store.is_empty());
//!
//! // A directory of JSON/YAML files, one cheatsheet per file
//! let store = CatalogStore::from_dir("cheatsheets/").unwrap();
//!
//! // A fallback chain
//! let store = CatalogStore::builder()
//!     .from_dir("cheatsheets/")
//!     .from_bundle("catalog.json")
//!     .with_builtin()
//!     .build()
//!     .unwrap();
//! ```
//!
//! Every store is validated once when it is built; duplicate names are
//! rejected there so lookups by name are never ambiguous.

use std::path::{Path, PathBuf};

use cheatsheet_core::{CatalogPackage, Cheatsheet, validate_catalog, validate_package};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::builtin;
use crate::error::{CatalogError, Result};

/// Describes where a [`CatalogStore`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The hand-authored catalog compiled into the crate.
    Builtin,
    /// A directory of individual cheatsheet files.
    Directory(PathBuf),
    /// A single [`CatalogPackage`] JSON file.
    Bundle(PathBuf),
    /// Cheatsheets handed over directly by the caller.
    Memory,
    /// Loaded via a fallback chain of multiple sources.
    Multiple(Vec<CatalogSource>),
}

/// Immutable, ordered collection of cheatsheets.
///
/// Order is the authoring order (or file-name order for directories) and is
/// stable for the lifetime of the store. There is no way to add, remove or
/// modify a record once the store exists.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::Cheatsheet;
/// use cheatsheet_db::CatalogStore;
///
/// let store = CatalogStore::new(vec![Cheatsheet::new("Git"), Cheatsheet::new("Docker")]).unwrap();
/// let names: Vec<&str> = store.names().collect();
/// assert_eq!(names, vec!["Git", "Docker"]);
///
/// // Duplicate names are rejected up front.
/// assert!(CatalogStore::new(vec![Cheatsheet::new("Git"), Cheatsheet::new("Git")]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    cheatsheets: Vec<Cheatsheet>,
    source: CatalogSource,
}

impl CatalogStore {
    /// Builds a store from caller-supplied cheatsheets.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] if the cheatsheets break a catalog
    /// invariant, most importantly name uniqueness.
    pub fn new(cheatsheets: Vec<Cheatsheet>) -> Result<Self> {
        Self::validated(cheatsheets, CatalogSource::Memory)
    }

    fn validated(cheatsheets: Vec<Cheatsheet>, source: CatalogSource) -> Result<Self> {
        if let Some(err) = validate_catalog(&cheatsheets).into_iter().next() {
            warn!(source = ?source, error = %err, "Rejected catalog");
            return Err(err.into());
        }
        info!(source = ?source, count = cheatsheets.len(), "Loaded catalog");
        Ok(Self {
            cheatsheets,
            source,
        })
    }

    /// Returns the hand-authored catalog shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            cheatsheets: builtin::cheatsheets(),
            source: CatalogSource::Builtin,
        }
    }

    /// Returns a new [`CatalogBuilder`] for configuring a fallback chain.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Loads every `*.json`, `*.yaml` and `*.yml` file in a directory.
    ///
    /// Each file holds one [`Cheatsheet`]. Files are read in file-name order
    /// so the resulting catalog order is deterministic; other files are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`] if the directory or a file cannot
    /// be read, a parse error if a file is malformed, or
    /// [`CatalogError::Invalid`] if the combined catalog is invalid.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let file_path = entry?.path();
            if file_path.is_file() && is_catalog_file(&file_path) {
                files.push(file_path);
            }
        }
        files.sort();

        let mut cheatsheets = Vec::with_capacity(files.len());
        for file in &files {
            debug!(file = %file.display(), "Reading cheatsheet");
            cheatsheets.push(load_cheatsheet_file(file)?);
        }

        Self::validated(cheatsheets, CatalogSource::Directory(path.to_path_buf()))
    }

    /// Loads a [`CatalogPackage`] JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::IoError`] if the file cannot be read,
    /// [`CatalogError::JsonError`] if parsing fails, or
    /// [`CatalogError::Invalid`] if the package is invalid.
    pub fn from_bundle(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let package: CatalogPackage = serde_json::from_reader(reader)?;

        if let Some(err) = validate_package(&package).into_iter().next() {
            return Err(err.into());
        }
        Self::validated(package.cheatsheets, CatalogSource::Bundle(path.to_path_buf()))
    }

    /// Returns every cheatsheet in catalog order.
    pub fn all(&self) -> &[Cheatsheet] {
        &self.cheatsheets
    }

    /// Returns the names of every cheatsheet in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cheatsheets.iter().map(|c| c.name.as_str())
    }

    /// Returns the number of cheatsheets.
    pub fn len(&self) -> usize {
        self.cheatsheets.len()
    }

    /// Returns `true` if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.cheatsheets.is_empty()
    }

    /// Returns a reference to the source metadata.
    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Packages the catalog for distribution.
    ///
    /// `generated_at` is the current UTC time and `bundle_hash` covers the
    /// serialized cheatsheets.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::JsonError`] if serialization fails.
    pub fn to_package(&self, version: &str) -> Result<CatalogPackage> {
        let mut package = CatalogPackage::new(version, chrono::Utc::now().to_rfc3339());
        package.bundle_hash = Some(bundle_hash(&self.cheatsheets)?);
        package.cheatsheets = self.cheatsheets.clone();
        Ok(package)
    }
}

/// Computes the SHA-256 hex digest of the compact JSON form of `cheatsheets`.
///
/// The digest depends only on content and order, not on when or where the
/// bundle was produced.
///
/// # Errors
///
/// Returns [`CatalogError::JsonError`] if serialization fails.
pub fn bundle_hash(cheatsheets: &[Cheatsheet]) -> Result<String> {
    let bytes = serde_json::to_vec(cheatsheets)?;
    Ok(format!("{:x}", Sha256::digest(&bytes)))
}

/// Parses one authored cheatsheet file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`CatalogError::UnsupportedFormat`] for any extension other than
/// `json`, `yaml` or `yml`, or an I/O or parse error.
pub fn load_cheatsheet_file(path: impl AsRef<Path>) -> Result<Cheatsheet> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_reader(reader)?),
        Some("yaml" | "yml") => Ok(serde_yaml::from_reader(reader)?),
        _ => Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    }
}

fn is_catalog_file(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref(),
        Some("json" | "yaml" | "yml")
    )
}

/// Builder for constructing a [`CatalogStore`] with a fallback chain.
///
/// Sources are tried in the order they are added. A source whose path does
/// not exist is skipped; the first one that loads wins. A source that exists
/// but cannot be read, parsed or validated stops the chain with its own
/// error. If every source is missing, [`CatalogError::NoSourcesAvailable`]
/// is returned.
pub struct CatalogBuilder {
    sources: Vec<CatalogSource>,
}

impl CatalogBuilder {
    /// Creates a new builder with no sources.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Adds the built-in catalog as a source.
    pub fn with_builtin(mut self) -> Self {
        self.sources.push(CatalogSource::Builtin);
        self
    }

    /// Adds a directory of cheatsheet files as a source.
    pub fn from_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(CatalogSource::Directory(path.into()));
        self
    }

    /// Adds a [`CatalogPackage`] bundle file as a source.
    pub fn from_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.sources.push(CatalogSource::Bundle(path.into()));
        self
    }

    /// Attempts to load the catalog from configured sources in order.
    ///
    /// Returns the first successfully loaded store.
    ///
    /// # Errors
    ///
    /// Returns the load error of the first source that exists but fails, or
    /// [`CatalogError::NoSourcesAvailable`] if no source exists.
    pub fn build(self) -> Result<CatalogStore> {
        if self.sources.is_empty() {
            return Err(CatalogError::NoSourcesAvailable);
        }

        let all_sources = self.sources.clone();

        for source in &self.sources {
            let result = match source {
                CatalogSource::Builtin => Ok(CatalogStore::builtin()),
                CatalogSource::Directory(path) => CatalogStore::from_dir(path),
                CatalogSource::Bundle(path) => CatalogStore::from_bundle(path),
                CatalogSource::Memory | CatalogSource::Multiple(_) => continue,
            };

            match result {
                Ok(mut store) => {
                    store.source = CatalogSource::Multiple(all_sources);
                    return Ok(store);
                }
                Err(err) if err.is_missing() => {
                    debug!(source = ?source, error = %err, "Catalog source missing, trying next")
                }
                Err(err) => return Err(err),
            }
        }

        Err(CatalogError::NoSourcesAvailable)
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cheatsheet_core::{CheatsheetItem, CheatsheetSection};
    use std::io::Write;

    fn sheet(name: &str) -> Cheatsheet {
        Cheatsheet::new(name).with_tag("test").with_section(
            CheatsheetSection::new("Bases").with_item(CheatsheetItem::new("Aide", "Affiche l'aide")),
        )
    }

    fn write_json(dir: &Path, file: &str, sheet: &Cheatsheet) {
        let mut f = std::fs::File::create(dir.join(file)).unwrap();
        serde_json::to_writer_pretty(&mut f, sheet).unwrap();
        f.flush().unwrap();
    }

    fn write_bundle(path: &Path, sheets: Vec<Cheatsheet>) {
        let mut package = CatalogPackage::new("1.0.0", "2024-01-01T00:00:00Z");
        package.cheatsheets = sheets;
        let mut f = std::fs::File::create(path).unwrap();
        serde_json::to_writer_pretty(&mut f, &package).unwrap();
        f.flush().unwrap();
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = CatalogStore::builtin();
        assert!(!store.is_empty());
        assert!(validate_catalog(store.all()).is_empty());
        assert_eq!(store.source(), &CatalogSource::Builtin);
    }

    #[test]
    fn test_from_dir_orders_by_file_name_and_mixes_formats() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "b-git.json", &sheet("Git"));
        std::fs::write(
            dir.path().join("a-bash.yaml"),
            serde_yaml::to_string(&sheet("Bash")).unwrap(),
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let store = CatalogStore::from_dir(dir.path()).unwrap();
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["Bash", "Git"]);
        assert_eq!(
            store.source(),
            &CatalogSource::Directory(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_from_dir_rejects_duplicate_names() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "git.json", &sheet("Git"));
        write_json(dir.path(), "git-copy.json", &sheet("Git"));

        let err = CatalogStore::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_from_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write_bundle(&path, vec![sheet("Git"), sheet("Docker")]);

        let store = CatalogStore::from_bundle(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].name, "Docker");
    }

    #[test]
    fn test_builder_fallback_first_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        write_bundle(&path, vec![sheet("Docker")]);

        let store = CatalogStore::builder()
            .from_dir("/nonexistent/dir/")
            .from_bundle(&path)
            .build()
            .unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["Docker"]);
        assert!(matches!(store.source(), CatalogSource::Multiple(s) if s.len() == 2));
    }

    #[test]
    fn test_builder_falls_back_to_builtin() {
        let store = CatalogStore::builder()
            .from_bundle("/nonexistent/catalog.json")
            .with_builtin()
            .build()
            .unwrap();
        assert_eq!(store.len(), CatalogStore::builtin().len());
    }

    #[test]
    fn test_builder_all_fail() {
        let result = CatalogStore::builder()
            .from_dir("/nonexistent/dir1/")
            .from_bundle("/nonexistent/bundle1.json")
            .build();
        assert!(matches!(result, Err(CatalogError::NoSourcesAvailable)));
        assert!(matches!(
            CatalogStore::builder().build(),
            Err(CatalogError::NoSourcesAvailable)
        ));
    }

    #[test]
    fn test_builder_stops_on_invalid_source() {
        let dir = tempfile::tempdir().unwrap();
        write_json(dir.path(), "git.json", &sheet("Git"));
        write_json(dir.path(), "git-copy.json", &sheet("Git"));

        let err = CatalogStore::builder()
            .from_dir(dir.path())
            .with_builtin()
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_builder_stops_on_malformed_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CatalogStore::builder()
            .from_bundle(&path)
            .with_builtin()
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::JsonError(_)));
    }

    #[test]
    fn test_load_cheatsheet_file_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("git.toml");
        std::fs::write(&path, "name = 'Git'").unwrap();
        assert!(matches!(
            load_cheatsheet_file(&path),
            Err(CatalogError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_bundle_hash_is_content_addressed() {
        let a = bundle_hash(&[sheet("Git")]).unwrap();
        let b = bundle_hash(&[sheet("Git")]).unwrap();
        let c = bundle_hash(&[sheet("Docker")]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_to_package_round_trips_through_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let store = CatalogStore::new(vec![sheet("Git"), sheet("Docker")]).unwrap();

        let package = store.to_package("2.0.0").unwrap();
        assert_eq!(package.version, "2.0.0");
        assert_eq!(
            package.bundle_hash.as_deref(),
            Some(bundle_hash(store.all()).unwrap().as_str())
        );

        std::fs::write(&path, serde_json::to_string_pretty(&package).unwrap()).unwrap();
        let reloaded = CatalogStore::from_bundle(&path).unwrap();
        assert_eq!(reloaded.all(), store.all());
    }
}
