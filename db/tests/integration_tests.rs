use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use cheatsheet_core::{Cheatsheet, CheatsheetItem, CheatsheetSection};
use cheatsheet_db::{CatalogError, CatalogIndex, CatalogStore, ViewerConfig};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn git() -> Cheatsheet {
    Cheatsheet::new("Git")
        .with_description("Système de contrôle de version distribué")
        .with_tags(&["version-control", "vcs"])
        .with_section(
            CheatsheetSection::new("Bases")
                .with_item(CheatsheetItem::new("Statut", "État du dépôt").with_code("git status")),
        )
}

fn write_yaml(dir: &Path, file: &str, sheet: &Cheatsheet) {
    let mut f = std::fs::File::create(dir.join(file)).unwrap();
    f.write_all(serde_yaml::to_string(sheet).unwrap().as_bytes())
        .unwrap();
    f.flush().unwrap();
}

fn brute_force_search<'a>(store: &'a CatalogStore, query: &str) -> Vec<&'a str> {
    let q = query.to_lowercase();
    store
        .all()
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&q)
                || c.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&q))
                || c.tags.iter().any(|t| t.to_lowercase().contains(&q))
        })
        .map(|c| c.name.as_str())
        .collect()
}

fn names<'a>(sheets: &[&'a Cheatsheet]) -> Vec<&'a str> {
    sheets.iter().map(|c| c.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Built-in catalog properties
// ---------------------------------------------------------------------------

#[test]
fn test_every_name_resolves_to_its_record() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    for sheet in store.all() {
        assert_eq!(index.get_by_name(&sheet.name), Some(sheet));
    }
}

#[test]
fn test_unknown_names_are_absent() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    for name in ["", "GIT", "Git ", "nonexistent-zzz", "Node.js"] {
        assert!(index.get_by_name(name).is_none(), "{name:?} should be absent");
    }
}

#[test]
fn test_get_by_tag_is_exact_subset() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    for tag in index.all_tags() {
        let expected: Vec<&str> = store
            .all()
            .iter()
            .filter(|c| c.tags.iter().any(|t| t == tag))
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names(&index.get_by_tag(tag)), expected, "tag {tag}");
    }
    assert!(index.get_by_tag("no-such-tag").is_empty());
}

#[test]
fn test_empty_search_returns_catalog_in_order() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    let all: Vec<&str> = store.names().collect();
    assert_eq!(names(&index.search("")), all);
}

#[test]
fn test_search_is_case_insensitive() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    assert_eq!(index.search("GIT"), index.search("git"));
    assert_eq!(index.search("Docker"), index.search("dOCKER"));
}

#[test]
fn test_search_matches_brute_force_filter() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    for query in ["git", "dock", "shell", "package", "RUST", "é", "-", "zzz", "devops"] {
        assert_eq!(
            names(&index.search(query)),
            brute_force_search(&store, query),
            "query {query:?}"
        );
    }
}

#[test]
fn test_all_tags_sorted_deduplicated_and_stable() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    let tags = index.all_tags();

    let expected: Vec<&str> = store
        .all()
        .iter()
        .flat_map(|c| c.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    assert_eq!(tags, expected);
    assert_eq!(tags, index.all_tags());
}

#[test]
fn test_queries_are_idempotent() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);
    assert_eq!(index.get_by_name("Docker"), index.get_by_name("Docker"));
    assert_eq!(index.get_by_tag("unix"), index.get_by_tag("unix"));
    assert_eq!(index.search("ver"), index.search("ver"));
    assert_eq!(index.tag_counts(), index.tag_counts());
}

#[test]
fn test_git_end_to_end() {
    let store = CatalogStore::builtin();
    let index = CatalogIndex::new(&store);

    let git = index.get_by_name("Git").unwrap();
    assert_eq!(
        git.description.as_deref(),
        Some("Système de contrôle de version distribué")
    );
    assert!(index.get_by_tag("vcs").contains(&git));
    assert!(index.search("version").contains(&git));
    assert!(index.search("nonexistent-zzz").is_empty());

    let tags = index.all_tags();
    let vcs = tags.iter().position(|t| *t == "vcs").unwrap();
    let vc = tags.iter().position(|t| *t == "version-control").unwrap();
    assert!(vcs < vc);
}

// ---------------------------------------------------------------------------
// Authored catalogs
// ---------------------------------------------------------------------------

#[test]
fn test_directory_catalog_queries() {
    let dir = tempfile::tempdir().unwrap();
    write_yaml(dir.path(), "01-git.yaml", &git());
    write_yaml(
        dir.path(),
        "02-docker.yml",
        &Cheatsheet::new("Docker").with_tags(&["containers"]),
    );

    let store = CatalogStore::from_dir(dir.path()).unwrap();
    let index = CatalogIndex::new(&store);
    assert_eq!(store.names().collect::<Vec<_>>(), vec!["Git", "Docker"]);
    assert_eq!(index.get_by_name("Git"), Some(&git()));
    assert_eq!(index.all_tags(), vec!["containers", "vcs", "version-control"]);
}

#[test]
fn test_duplicate_names_fail_at_construction() {
    let err = CatalogStore::new(vec![git(), git()]).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid(_)));
    assert!(err.to_string().contains("duplicate cheatsheet"));
}

#[test]
fn test_bundle_export_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    let builtin = CatalogStore::builtin();
    let package = builtin.to_package("1.0.0").unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(&package).unwrap()).unwrap();

    let reloaded = CatalogStore::from_bundle(&path).unwrap();
    assert_eq!(reloaded.all(), builtin.all());
}

#[test]
fn test_config_chain_prefers_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_yaml(dir.path(), "git.yaml", &git());

    let config = ViewerConfig {
        catalog_dir: Some(dir.path().to_path_buf()),
        ..ViewerConfig::default()
    };
    let store = config.catalog_builder().build().unwrap();
    assert_eq!(store.len(), 1);
}
