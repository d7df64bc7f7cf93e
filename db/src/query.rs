//! Read-only queries over a [`CatalogStore`].
//!
//! [`CatalogIndex`] borrows a store and builds two derived indexes once:
//! name → position and tag → positions. Every query is total: a miss is
//! `None` or an empty `Vec`, never an error, and no query mutates anything.
//!
//! # Example
//!
//! ```
//! use cheatsheet_db::{CatalogIndex, CatalogStore};
//!
//! let store = CatalogStore::builtin();
//! let index = CatalogIndex::new(&store);
//!
//! let git = index.get_by_name("Git").unwrap();
//! assert!(index.get_by_tag("vcs").iter().any(|c| c.name == git.name));
//! assert!(index.search("VERSION").iter().any(|c| c.name == "Git"));
//! assert!(index.search("nonexistent-zzz").is_empty());
//! assert!(index.all_tags().contains(&"vcs"));
//! ```

use std::collections::{BTreeMap, HashMap};

use cheatsheet_core::Cheatsheet;
use tracing::debug;

use crate::loader::CatalogStore;

/// Derived lookup indexes over an immutable catalog.
///
/// Positions refer to [`CatalogStore::all`], so every result is returned in
/// catalog order.
#[derive(Debug)]
pub struct CatalogIndex<'a> {
    store: &'a CatalogStore,
    by_name: HashMap<&'a str, usize>,
    by_tag: BTreeMap<&'a str, Vec<usize>>,
}

impl<'a> CatalogIndex<'a> {
    /// Builds the name and tag indexes for `store`.
    ///
    /// If two records ever shared a name the first one would win; stores
    /// built through [`CatalogStore`] constructors reject that case.
    pub fn new(store: &'a CatalogStore) -> Self {
        let mut by_name = HashMap::with_capacity(store.len());
        let mut by_tag: BTreeMap<&'a str, Vec<usize>> = BTreeMap::new();

        for (position, sheet) in store.all().iter().enumerate() {
            by_name.entry(sheet.name.as_str()).or_insert(position);
            for tag in &sheet.tags {
                let positions = by_tag.entry(tag.as_str()).or_default();
                // A record repeating a tag is listed once.
                if positions.last() != Some(&position) {
                    positions.push(position);
                }
            }
        }

        Self {
            store,
            by_name,
            by_tag,
        }
    }

    /// The store this index was built from.
    pub fn store(&self) -> &'a CatalogStore {
        self.store
    }

    /// Looks up a cheatsheet by exact, case-sensitive name.
    pub fn get_by_name(&self, name: &str) -> Option<&'a Cheatsheet> {
        let found = self.by_name.get(name).map(|&i| &self.store.all()[i]);
        debug!(cheatsheet = name, found = found.is_some(), "Lookup by name");
        found
    }

    /// Returns every cheatsheet carrying `tag` (exact, case-sensitive).
    pub fn get_by_tag(&self, tag: &str) -> Vec<&'a Cheatsheet> {
        let results: Vec<&'a Cheatsheet> = self
            .by_tag
            .get(tag)
            .map(|positions| positions.iter().map(|&i| &self.store.all()[i]).collect())
            .unwrap_or_default();
        debug!(tag, hits = results.len(), "Lookup by tag");
        results
    }

    /// Case-insensitive substring search over name, description and tags.
    ///
    /// The empty query matches every cheatsheet. Results keep catalog order
    /// and are not ranked.
    pub fn search(&self, query: &str) -> Vec<&'a Cheatsheet> {
        let needle = query.to_lowercase();
        let results: Vec<&'a Cheatsheet> = self
            .store
            .all()
            .iter()
            .filter(|sheet| matches_query(sheet, &needle))
            .collect();
        debug!(query, hits = results.len(), "Search");
        results
    }

    /// Every distinct tag in ascending lexicographic order.
    pub fn all_tags(&self) -> Vec<&'a str> {
        self.by_tag.keys().copied().collect()
    }

    /// Every distinct tag with the number of cheatsheets carrying it,
    /// ascending by tag.
    pub fn tag_counts(&self) -> Vec<(&'a str, usize)> {
        self.by_tag
            .iter()
            .map(|(tag, positions)| (*tag, positions.len()))
            .collect()
    }
}

/// `needle` must already be lowercase.
fn matches_query(sheet: &Cheatsheet, needle: &str) -> bool {
    sheet.name.to_lowercase().contains(needle)
        || sheet
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(needle))
        || sheet
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}
