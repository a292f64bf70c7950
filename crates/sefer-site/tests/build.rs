//! Integration tests for building a site on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use sefer_parser::ParseError;
use sefer_site::{BuildConfig, BuildError, SiteBuilder, check};
use sefer_storage::FsStorage;

fn write(root: &Path, path: &str, content: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, content).unwrap();
}

fn builder(root: &Path, config: BuildConfig) -> SiteBuilder {
    SiteBuilder::new(
        Arc::new(FsStorage::new(root.join("recipes"))),
        Arc::new(FsStorage::new(root.join("html"))),
        config,
    )
}

#[test]
fn test_build_mirrors_source_tree() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "recipes/soups/lentil.md",
        "# Lentil soup\nHearty.\n## Ingredients\nLentils\nCarrots\n## Steps\nRinse.\n\nSimmer.",
    );
    write(dir.path(), "recipes/bread.md", "# Bread\n## Ingredients\nFlour");
    write(dir.path(), "recipes/.draft.md", "# Draft");
    write(dir.path(), "recipes/notes.txt", "not a recipe");

    let report = builder(dir.path(), BuildConfig::default()).build().unwrap();

    let titles: Vec<_> = report.pages.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Bread", "Lentil soup"]);

    let html = dir.path().join("html");
    assert!(html.join("index.html").is_file());
    assert!(html.join("bread.html").is_file());
    assert!(html.join("static/style.css").is_file());
    assert!(!html.join(".draft.html").exists());
    assert!(!html.join("notes.html").exists());

    let lentil = fs::read_to_string(html.join("soups/lentil.html")).unwrap();
    assert!(lentil.contains("<li>Carrots</li>"));
    assert!(lentil.contains("<li>Simmer.</li>"));
    assert_eq!(lentil.matches("<div").count(), lentil.matches("</div>").count());
}

#[test]
fn test_build_skips_malformed_and_keeps_going() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "recipes/bad.md", "Ingredients first\n# Too late");
    write(dir.path(), "recipes/good.md", "# Good\nFine.");

    let report = builder(dir.path(), BuildConfig::default()).build().unwrap();

    assert_eq!(report.pages.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, "bad.md");
    assert!(!dir.path().join("html/bad.html").exists());
}

#[test]
fn test_build_fail_fast() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "recipes/bad.md", "# One\n# Two");
    write(dir.path(), "recipes/good.md", "# Good");

    let config = BuildConfig {
        fail_fast: true,
        ..BuildConfig::default()
    };
    let err = builder(dir.path(), config).build().unwrap_err();

    assert!(matches!(err, BuildError::Document { ref path, .. } if path == "bad.md"));
    assert!(!dir.path().join("html").exists());
}

#[test]
fn test_rebuild_overwrites_pages() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "recipes/soup.md", "# Soup\nOld.");
    builder(dir.path(), BuildConfig::default()).build().unwrap();

    write(dir.path(), "recipes/soup.md", "# Soup\nNew.");
    builder(dir.path(), BuildConfig::default()).build().unwrap();

    let page = fs::read_to_string(dir.path().join("html/soup.html")).unwrap();
    assert!(page.contains("New."));
    assert!(!page.contains("Old."));
}

#[test]
fn test_check_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "recipes/a.md", "# A");
    write(dir.path(), "recipes/b.md", "### B");

    let results = check(&FsStorage::new(dir.path().join("recipes"))).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].result, Ok("A".to_owned()));
    assert_eq!(results[1].result, Err(ParseError::RootLevel { level: 3 }));
    assert!(!dir.path().join("html").exists());
}
