//! Immutable cheatsheet catalog, loaders and query layer.
//!
//! This crate builds a [`CatalogStore`] once (from the built-in authored
//! catalog, a directory of cheatsheet files, or a bundle) and answers
//! read-only queries over it through [`CatalogIndex`].
//!
//! # Quick start
//!
//! ```
//! use cheatsheet_db::{CatalogIndex, CatalogStore};
//!
//! let store = CatalogStore::builtin();
//! let index = CatalogIndex::new(&store);
//!
//! if let Some(git) = index.get_by_name("Git") {
//!     println!("{} has {} sections", git.name, git.sections.len());
//! }
//!
//! for sheet in index.get_by_tag("containers") {
//!     println!("  {}", sheet.name);
//! }
//!
//! let tags = index.all_tags();
//! assert!(tags.windows(2).all(|w| w[0] < w[1]));
//! ```
//!
//! The store never changes after construction; the index borrows it and
//! every query is a total function (a miss is `None` or an empty `Vec`).

mod builtin;
mod config;
mod error;
mod loader;
mod query;

pub use config::{DEFAULT_COPY_FEEDBACK_MS, FormatName, ViewerConfig};
pub use error::{CatalogError, Result};
pub use loader::{CatalogBuilder, CatalogSource, CatalogStore, bundle_hash, load_cheatsheet_file};
pub use query::CatalogIndex;
