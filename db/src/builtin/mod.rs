//! Hand-authored catalog compiled into the crate.
//!
//! Each submodule authors the cheatsheets of one family of tools. The
//! order of [`cheatsheets`] is the display order of the built-in catalog.

use cheatsheet_core::{Cheatsheet, CheatsheetItem};

mod containers;
mod editors;
mod languages;
mod shells;
mod vcs;

/// Returns the built-in catalog in authoring order.
pub(crate) fn cheatsheets() -> Vec<Cheatsheet> {
    vec![
        vcs::git(),
        vcs::github_cli(),
        containers::docker(),
        containers::docker_compose(),
        containers::kubectl(),
        shells::bash(),
        shells::linux(),
        languages::node_npm(),
        languages::cargo(),
        languages::python_pip(),
        editors::vim(),
    ]
}

/// Shorthand for an item with a code snippet.
fn cmd(title: &str, description: &str, code: &str) -> CheatsheetItem {
    CheatsheetItem::new(title, description).with_code(code)
}
