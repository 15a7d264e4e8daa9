//! Catalog sources wired through the YAML config, then searched.

use std::io::Write;

use chrono::NaiveDate;
use docsearch::{search, CatalogSource, DocsearchConfig, Matcher, Priority, SearchOutcome};
use tempfile::NamedTempFile;

const TREE_LISTING: &str = r#"{
    "sha": "abc",
    "tree": [
        {"path": "README.md", "type": "blob", "size": 120, "sha": "1"},
        {"path": "handbook", "type": "tree", "sha": "2"},
        {"path": "handbook/Onboarding.pdf", "type": "blob", "size": 40960, "sha": "3"},
        {"path": "handbook/Leave Policy.docx", "type": "blob", "size": 10240, "sha": "4"},
        {"path": "handbook/Activity log.xlsx", "type": "blob", "sha": "5"},
        {"path": "handbook/team.png", "type": "blob", "sha": "6"}
    ],
    "truncated": false
}"#;

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 30).unwrap()
}

fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn listing_named_in_config_is_loaded_and_searched() {
    let listing = temp_file(TREE_LISTING);
    let yaml = format!(
        "version: \"1\"\ncatalog:\n  owner: \"acme\"\n  repo: \"people\"\n  docs_prefix: \"handbook/\"\n  default_type: \"HR\"\n  listing_path: \"{}\"\n",
        listing.path().display()
    );
    let config = DocsearchConfig::from_yaml(&yaml).unwrap();

    let source = CatalogSource::resolve(None, None, &config.catalog);
    assert!(matches!(source, CatalogSource::Listing(_)));

    let loaded = source.load(&config.catalog, as_of());
    assert!(!loaded.stale, "unexpected fallback: {:?}", loaded.error);

    let names: Vec<&str> = loaded.catalog.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Onboarding", "Leave Policy", "Activity log"]);

    let leave = &loaded.catalog.documents()[1];
    assert_eq!(leave.id, 2);
    assert_eq!(leave.doc_type, "HR");
    assert_eq!(leave.description, "Leave Policy document for HR processes");
    assert_eq!(
        leave.download_url.as_deref(),
        Some("https://raw.githubusercontent.com/acme/people/main/handbook/Leave Policy.docx")
    );
    assert_eq!(loaded.catalog.documents()[2].priority, Priority::High);

    let matcher = Matcher::new(config.matcher.to_match_config()).unwrap();
    let outcome = search("onbording", &loaded.catalog, &matcher);
    let SearchOutcome::Matches { similar, .. } = outcome else {
        panic!("expected matches");
    };
    assert_eq!(similar[0].document.name, "Onboarding");
}

#[test]
fn documents_file_on_command_line_wins() {
    let docs = temp_file(
        r#"[{"id": 11, "name": "Travel Policy", "type": "HR", "description": "Expense rules"}]"#,
    );
    let listing = temp_file(TREE_LISTING);
    let config = DocsearchConfig::default();

    let source = CatalogSource::resolve(Some(docs.path()), Some(listing.path()), &config.catalog);
    let loaded = source.load(&config.catalog, as_of());
    assert!(!loaded.stale);
    assert_eq!(loaded.catalog.len(), 1);

    let outcome = search("expense", &loaded.catalog, &Matcher::default());
    let SearchOutcome::Matches { exact, .. } = outcome else {
        panic!("expected matches");
    };
    assert_eq!(exact[0].id, 11);
}

#[test]
fn recommendations_follow_loaded_catalog() {
    let listing = temp_file(
        r#"[
            {"name": "CLA 1.docx", "type": "file"},
            {"name": "Essay.docx", "type": "file"},
            {"name": "CLA 2.docx", "type": "file"},
            {"name": "Marketing plan.docx", "type": "file"},
            {"name": "Glossary.md", "type": "file"}
        ]"#,
    );
    let config = DocsearchConfig::default();
    let loaded = CatalogSource::Listing(listing.path().to_path_buf()).load(&config.catalog, as_of());

    let outcome = search("", &loaded.catalog, &Matcher::default());
    let SearchOutcome::Recommendations { documents } = outcome else {
        panic!("expected recommendations");
    };
    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Marketing plan", "CLA 1", "Essay"]);
}
