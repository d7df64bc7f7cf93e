//! Cheatsheet type definitions.
//!
//! This module defines the data model for a cheatsheet: a named reference
//! for one tool, made of ordered sections of items. The types are designed
//! for serialization with [`serde`] so catalogs can be authored as JSON or
//! YAML and round-trip through bundle files.

use serde::{Deserialize, Serialize};

/// Version of the catalog contract (semver).
///
/// Embedded in every [`CatalogPackage`](crate::CatalogPackage) to track
/// compatibility across catalog formats.
pub const CATALOG_CONTRACT_VERSION: &str = "1.0.0";

/// One command or concept entry inside a section.
///
/// An item always has a title and a description. It may carry a literal
/// `code` snippet and any number of `examples`; the first example is the
/// primary one.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::CheatsheetItem;
///
/// let item = CheatsheetItem::new("Cloner un dépôt", "Copie un dépôt distant en local")
///     .with_code("git clone <url>")
///     .with_example("git clone https://github.com/rust-lang/rust.git");
///
/// assert_eq!(item.code.as_deref(), Some("git clone <url>"));
/// assert_eq!(item.primary_example(), Some("git clone https://github.com/rust-lang/rust.git"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatsheetItem {
    /// Short human-readable label
    pub title: String,
    /// Explanatory text
    pub description: String,
    /// Literal command or snippet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Example invocations, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Free-text sub-grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CheatsheetItem {
    /// Creates an item with a title and description.
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            code: None,
            examples: Vec::new(),
            category: None,
        }
    }

    /// Sets the code snippet.
    pub fn with_code(mut self, code: &str) -> Self {
        self.code = Some(code.to_string());
        self
    }

    /// Appends an example.
    pub fn with_example(mut self, example: &str) -> Self {
        self.examples.push(example.to_string());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    /// Returns the first example, if any.
    pub fn primary_example(&self) -> Option<&str> {
        self.examples.first().map(String::as_str)
    }
}

/// A named group of items.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::{CheatsheetItem, CheatsheetSection};
///
/// let section = CheatsheetSection::new("Bases")
///     .with_item(CheatsheetItem::new("Statut", "Affiche l'état du dépôt").with_code("git status"));
/// assert_eq!(section.items.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatsheetSection {
    /// Section heading
    pub title: String,
    /// Items, in display order
    #[serde(default)]
    pub items: Vec<CheatsheetItem>,
}

impl CheatsheetSection {
    /// Creates an empty section.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }

    /// Appends an item.
    pub fn with_item(mut self, item: CheatsheetItem) -> Self {
        self.items.push(item);
        self
    }
}

/// Address of a copyable snippet inside a cheatsheet.
///
/// `section` and `item` are zero-based positions. When `example` is `None`
/// the key designates the item's `code`; otherwise it designates the
/// example at that position.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::CopyKey;
///
/// let key: CopyKey = "0.2.1".parse().unwrap();
/// assert_eq!(key, CopyKey::example(0, 2, 1));
/// assert_eq!(key.to_string(), "0.2.1");
///
/// let code: CopyKey = "1.0".parse().unwrap();
/// assert_eq!(code, CopyKey::code(1, 0));
/// assert!("x.y".parse::<CopyKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CopyKey {
    /// Section position
    pub section: usize,
    /// Item position within the section
    pub item: usize,
    /// Example position, or `None` for the item's code
    pub example: Option<usize>,
}

impl CopyKey {
    /// Key for an item's code block.
    pub fn code(section: usize, item: usize) -> Self {
        Self {
            section,
            item,
            example: None,
        }
    }

    /// Key for one example of an item.
    pub fn example(section: usize, item: usize, example: usize) -> Self {
        Self {
            section,
            item,
            example: Some(example),
        }
    }
}

impl std::fmt::Display for CopyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.example {
            Some(example) => write!(f, "{}.{}.{}", self.section, self.item, example),
            None => write!(f, "{}.{}", self.section, self.item),
        }
    }
}

/// Error returned when a string is not a valid [`CopyKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid copy key '{0}', expected SECTION.ITEM or SECTION.ITEM.EXAMPLE")]
pub struct ParseCopyKeyError(pub String);

impl std::str::FromStr for CopyKey {
    type Err = ParseCopyKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .trim()
            .split('.')
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseCopyKeyError(s.to_string()))?;

        match parts.as_slice() {
            [section, item] => Ok(Self::code(*section, *item)),
            [section, item, example] => Ok(Self::example(*section, *item, *example)),
            _ => Err(ParseCopyKeyError(s.to_string())),
        }
    }
}

/// A complete reference for one tool or technology.
///
/// The `name` is the primary key of a catalog and must be unique across it.
/// `tags` are lowercase keywords used for categorical lookup; their order is
/// irrelevant and repeating a tag has no effect.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::*;
///
/// let sheet = Cheatsheet::new("Git")
///     .with_description("Système de contrôle de version distribué")
///     .with_icon("git-branch")
///     .with_tag("version-control")
///     .with_tag("vcs")
///     .with_section(
///         CheatsheetSection::new("Bases")
///             .with_item(CheatsheetItem::new("Statut", "État du dépôt").with_code("git status")),
///     );
///
/// assert!(sheet.has_tag("vcs"));
/// assert!(!sheet.has_tag("VCS"));
/// assert_eq!(sheet.item_count(), 1);
/// assert_eq!(sheet.snippet(CopyKey::code(0, 0)), Some("git status"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheatsheet {
    /// Unique human-readable identifier (e.g. "Git", "Node.js/npm")
    pub name: String,
    /// One-line summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Symbolic glyph name, resolved by [`Icon::lookup`](crate::Icon::lookup)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Lowercase keywords
    #[serde(default)]
    pub tags: Vec<String>,
    /// Sections, in display order
    #[serde(default)]
    pub sections: Vec<CheatsheetSection>,
}

impl Cheatsheet {
    /// Creates an empty cheatsheet with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the icon name.
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    /// Adds several tags at once.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags.extend(tags.iter().map(|t| t.to_string()));
        self
    }

    /// Appends a section.
    pub fn with_section(mut self, section: CheatsheetSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Returns `true` if `tag` is one of this cheatsheet's tags (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Finds a section by its title.
    pub fn find_section(&self, title: &str) -> Option<&CheatsheetSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Looks up the item addressed by `key`, ignoring its example position.
    pub fn item(&self, key: CopyKey) -> Option<&CheatsheetItem> {
        self.sections.get(key.section)?.items.get(key.item)
    }

    /// Returns the snippet text addressed by `key`.
    ///
    /// Yields the item's code when `key.example` is `None`, the example text
    /// otherwise. Returns `None` when any position is out of range or the
    /// item has no code.
    pub fn snippet(&self, key: CopyKey) -> Option<&str> {
        let item = self.item(key)?;
        match key.example {
            Some(index) => item.examples.get(index).map(String::as_str),
            None => item.code.as_deref(),
        }
    }
}
