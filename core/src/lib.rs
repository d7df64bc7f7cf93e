//! Core cheatsheet types and shared catalog primitives.
//!
//! This crate defines the data model for developer-tool reference sheets:
//!
//! - [`Cheatsheet`]: a named reference for one tool (description, icon,
//!   tags, sections).
//! - [`CheatsheetSection`]: a titled group of items.
//! - [`CheatsheetItem`]: one command or concept with optional code and
//!   examples.
//! - [`CopyKey`]: the address of one copyable snippet in a cheatsheet.
//! - [`Icon`]: symbolic icon lookup with a default fallback.
//! - [`CatalogPackage`]: a versioned bundle of cheatsheets for
//!   distribution.
//!
//! Validation ([`validate_cheatsheet`], [`validate_catalog`],
//! [`validate_package`]) catches authoring defects such as empty titles,
//! uppercase tags and duplicate names.
//!
//! # Example
//!
//! ```
//! use cheatsheet_core::*;
//!
//! let sheet = Cheatsheet::new("Bash")
//!     .with_description("Shell Unix")
//!     .with_icon("terminal")
//!     .with_tags(&["shell", "unix"])
//!     .with_section(
//!         CheatsheetSection::new("Navigation")
//!             .with_item(CheatsheetItem::new("Dossier courant", "Affiche le chemin").with_code("pwd")),
//!     );
//!
//! assert_eq!(Icon::lookup(sheet.icon.as_deref()), Icon::Terminal);
//! assert!(validate_cheatsheet(&sheet).is_empty());
//! ```

mod icon;
mod package;
mod types;
mod validate;

pub use icon::Icon;
pub use package::CatalogPackage;
pub use types::*;
pub use validate::{ValidationError, validate_catalog, validate_cheatsheet, validate_package};
