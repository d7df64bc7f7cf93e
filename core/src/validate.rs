//! Cheatsheet and catalog validation.
//!
//! Validates structural invariants of authored cheatsheets: non-empty names
//! and titles, lowercase tags, and unique names across a catalog. Authoring
//! defects are caught here before a catalog is queried.
//!
//! # Examples
//!
//! ```
//! use cheatsheet_core::*;
//!
//! let sheet = Cheatsheet::new("Git").with_tag("vcs");
//! assert!(validate_cheatsheet(&sheet).is_empty());
//!
//! // Invalid: uppercase tag
//! let bad = Cheatsheet::new("Git").with_tag("VCS");
//! assert!(!validate_cheatsheet(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{CatalogPackage, Cheatsheet};

/// Cheatsheet/catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Package version string is empty.
    #[error("package version cannot be empty")]
    EmptyPackageVersion,
    /// Cheatsheet name is empty or whitespace-only.
    #[error("cheatsheet name cannot be empty")]
    EmptyName,
    /// Two cheatsheets in the same catalog share a name.
    #[error("duplicate cheatsheet in catalog: {0}")]
    DuplicateName(String),
    /// A section of the named cheatsheet has an empty title.
    #[error("section title cannot be empty in {0}")]
    EmptySectionTitle(String),
    /// An item has an empty title (cheatsheet, section).
    #[error("item title cannot be empty in {0} / {1}")]
    EmptyItemTitle(String, String),
    /// A tag is empty or whitespace-only.
    #[error("empty tag in {0}")]
    EmptyTag(String),
    /// A tag contains uppercase characters (cheatsheet, tag).
    #[error("tag must be lowercase in {0}: {1}")]
    NonLowercaseTag(String, String),
}

/// Validates a full catalog package.
///
/// Checks for an empty version string, then delegates to
/// [`validate_catalog`].
pub fn validate_package(package: &CatalogPackage) -> Vec<ValidationError> {
    if package.version.trim().is_empty() {
        return vec![ValidationError::EmptyPackageVersion];
    }
    validate_catalog(&package.cheatsheets)
}

/// Validates an ordered list of cheatsheets as one catalog.
///
/// Reports the first duplicate name or the first invalid cheatsheet.
///
/// # Examples
///
/// ```
/// use cheatsheet_core::*;
///
/// let catalog = vec![Cheatsheet::new("Git"), Cheatsheet::new("Git")];
/// assert_eq!(
///     validate_catalog(&catalog),
///     vec![ValidationError::DuplicateName("Git".into())]
/// );
/// ```
pub fn validate_catalog(cheatsheets: &[Cheatsheet]) -> Vec<ValidationError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for sheet in cheatsheets {
        let errors = validate_cheatsheet(sheet);
        if !errors.is_empty() {
            return errors;
        }
        if !seen.insert(sheet.name.as_str()) {
            return vec![ValidationError::DuplicateName(sheet.name.clone())];
        }
    }
    Vec::new()
}

/// Validates a single cheatsheet.
///
/// Checks the name, every tag, every section title and every item title.
pub fn validate_cheatsheet(sheet: &Cheatsheet) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if sheet.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
        return errors;
    }

    for tag in &sheet.tags {
        if tag.trim().is_empty() {
            errors.push(ValidationError::EmptyTag(sheet.name.clone()));
            return errors;
        }
        if tag.chars().any(char::is_uppercase) {
            errors.push(ValidationError::NonLowercaseTag(
                sheet.name.clone(),
                tag.clone(),
            ));
            return errors;
        }
    }

    for section in &sheet.sections {
        if section.title.trim().is_empty() {
            errors.push(ValidationError::EmptySectionTitle(sheet.name.clone()));
            return errors;
        }
        if section.items.iter().any(|item| item.title.trim().is_empty()) {
            errors.push(ValidationError::EmptyItemTitle(
                sheet.name.clone(),
                section.title.clone(),
            ));
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use crate::{CheatsheetItem, CheatsheetSection};

    use super::*;

    #[test]
    fn test_validate_package_rejects_empty_version() {
        let package = CatalogPackage::new(" ", "2026-02-07T00:00:00Z");
        assert_eq!(
            validate_package(&package),
            vec![ValidationError::EmptyPackageVersion]
        );
    }

    #[test]
    fn test_validate_catalog_rejects_duplicate_names() {
        let catalog = vec![
            Cheatsheet::new("Git"),
            Cheatsheet::new("Docker"),
            Cheatsheet::new("Git"),
        ];
        assert_eq!(
            validate_catalog(&catalog),
            vec![ValidationError::DuplicateName("Git".to_string())]
        );
    }

    #[test]
    fn test_names_are_case_sensitive_for_uniqueness() {
        let catalog = vec![Cheatsheet::new("Git"), Cheatsheet::new("git")];
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_validate_cheatsheet_rejects_empty_name() {
        let sheet = Cheatsheet::new("   ");
        assert_eq!(validate_cheatsheet(&sheet), vec![ValidationError::EmptyName]);
    }

    #[test]
    fn test_validate_cheatsheet_rejects_uppercase_tag() {
        let sheet = Cheatsheet::new("Git").with_tag("Version-Control");
        assert_eq!(
            validate_cheatsheet(&sheet),
            vec![ValidationError::NonLowercaseTag(
                "Git".to_string(),
                "Version-Control".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_cheatsheet_rejects_empty_item_title() {
        let sheet = Cheatsheet::new("Git")
            .with_section(CheatsheetSection::new("Bases").with_item(CheatsheetItem::new("", "x")));
        assert_eq!(
            validate_cheatsheet(&sheet),
            vec![ValidationError::EmptyItemTitle(
                "Git".to_string(),
                "Bases".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_cheatsheet_rejects_empty_section_title() {
        let sheet = Cheatsheet::new("Git").with_section(CheatsheetSection::new(""));
        assert_eq!(
            validate_cheatsheet(&sheet),
            vec![ValidationError::EmptySectionTitle("Git".to_string())]
        );
    }

    #[test]
    fn test_duplicate_tags_are_allowed() {
        let sheet = Cheatsheet::new("Git").with_tags(&["vcs", "vcs"]);
        assert!(validate_cheatsheet(&sheet).is_empty());
    }
}
