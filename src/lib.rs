//! Workspace umbrella crate for docsearch.
//!
//! docsearch finds documents in a small curated catalog by free-text query,
//! tolerating typos and partial terms. This crate stitches the workspace
//! together so callers can go from "what the user typed" to "what to show"
//! with a single call:
//!
//! - [`similarity`] scores two strings by normalized edit distance.
//! - [`matcher`] classifies a catalog into exact, similar and suggested hits.
//! - [`catalog`] models documents and loads catalogs from listings or files.
//!
//! [`search`] is the view-level entry point: it turns a [`MatchResult`] into
//! the one [`SearchOutcome`] a front end renders, including the recommended
//! reading list for a blank query.
//!
//! ```
//! use docsearch::{fallback_catalog, search, Matcher, SearchOutcome};
//!
//! let catalog = fallback_catalog();
//! let outcome = search("markting plan", &catalog, &Matcher::default());
//! let SearchOutcome::Matches { exact, similar } = outcome else {
//!     panic!("expected matches");
//! };
//! assert!(exact.is_empty());
//! assert_eq!(similar[0].document.name, "Marketing Plan");
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

pub mod cli;
pub mod config;

pub use catalog::{
    documents_from_listing, fallback_catalog, fallback_documents, load_with_fallback, Catalog,
    CatalogConfig, CatalogError, CatalogProvider, Category, Document, DocumentsFileProvider,
    ListingFileProvider, LoadedCatalog, Priority, RepositoryListing, StaticProvider,
};
pub use config::{CatalogYamlConfig, ConfigLoadError, DocsearchConfig, MatchYamlConfig};
pub use matcher::{
    match_catalog, set_match_metrics, MatchConfig, MatchError, MatchMetrics, MatchResult,
    MatchSummary, Matcher, ScoredDocument,
};
pub use similarity::{levenshtein, similarity};

/// What a front end should show for one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Blank query: the recommended reading list.
    Recommendations { documents: Vec<Document> },
    /// At least one exact or similar hit.
    Matches {
        exact: Vec<Document>,
        similar: Vec<ScoredDocument>,
    },
    /// Nothing matched, but one document came close.
    NotFound {
        query: String,
        suggestion: ScoredDocument,
    },
    /// Nothing matched and nothing came close.
    NoResults { query: String },
}

impl SearchOutcome {
    /// Rejection line for [`SearchOutcome::NotFound`].
    pub fn not_found_message(&self) -> Option<String> {
        match self {
            SearchOutcome::NotFound { query, .. } => Some(format!("File \"{query}\" not found")),
            _ => None,
        }
    }
}

/// Evaluate `query` against `catalog` and decide what to show.
pub fn search(query: &str, catalog: &Catalog, matcher: &Matcher) -> SearchOutcome {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchOutcome::Recommendations {
            documents: catalog.recommended().into_iter().cloned().collect(),
        };
    }

    let MatchResult {
        exact,
        similar,
        suggestion,
        query_echo,
    } = matcher.match_catalog(trimmed, catalog.documents());

    if !exact.is_empty() || !similar.is_empty() {
        return SearchOutcome::Matches { exact, similar };
    }

    let query = query_echo.unwrap_or_else(|| trimmed.to_string());
    match suggestion {
        Some(suggestion) => SearchOutcome::NotFound { query, suggestion },
        None => SearchOutcome::NoResults { query },
    }
}

/// Where the catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// JSON array of documents.
    Documents(PathBuf),
    /// Saved repository listing.
    Listing(PathBuf),
    /// The bundled catalog.
    Builtin,
}

impl CatalogSource {
    /// Pick a source: an explicit documents file, then an explicit listing,
    /// then whatever the config names, then the bundled catalog.
    pub fn resolve(
        documents: Option<&Path>,
        listing: Option<&Path>,
        config: &CatalogYamlConfig,
    ) -> Self {
        if let Some(path) = documents {
            return CatalogSource::Documents(path.to_path_buf());
        }
        if let Some(path) = listing {
            return CatalogSource::Listing(path.to_path_buf());
        }
        if let Some(path) = &config.listing_path {
            return CatalogSource::Listing(path.clone());
        }
        if let Some(path) = &config.documents_path {
            return CatalogSource::Documents(path.clone());
        }
        CatalogSource::Builtin
    }

    /// Provider for this source. `as_of` dates documents built from a listing.
    pub fn provider(
        &self,
        config: &CatalogYamlConfig,
        as_of: NaiveDate,
    ) -> Box<dyn CatalogProvider> {
        match self {
            CatalogSource::Documents(path) => Box::new(DocumentsFileProvider::new(path)),
            CatalogSource::Listing(path) => Box::new(ListingFileProvider::new(
                path,
                config.to_catalog_config(),
                as_of,
            )),
            CatalogSource::Builtin => Box::new(StaticProvider::builtin()),
        }
    }

    /// Load the catalog, falling back to the bundled one on failure.
    pub fn load(&self, config: &CatalogYamlConfig, as_of: NaiveDate) -> LoadedCatalog {
        load_with_fallback(self.provider(config, as_of).as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn blank_query_recommends() {
        let outcome = search("  ", &fallback_catalog(), &Matcher::default());
        let SearchOutcome::Recommendations { documents } = outcome else {
            panic!("expected recommendations");
        };
        let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Activity", "Marketing Plan", "CLA 2", "Essay"]);
    }

    #[test]
    fn weak_query_is_not_found_with_suggestion() {
        let outcome = search(" Tasky ", &fallback_catalog(), &Matcher::default());
        assert_eq!(
            outcome.not_found_message().as_deref(),
            Some("File \"Tasky\" not found")
        );
        let SearchOutcome::NotFound { suggestion, .. } = outcome else {
            panic!("expected not found");
        };
        assert_eq!(suggestion.document.name, "Essay");
    }

    #[test]
    fn hopeless_query_has_no_results() {
        let outcome = search("xyz123qweasd", &fallback_catalog(), &Matcher::default());
        assert_eq!(
            outcome,
            SearchOutcome::NoResults {
                query: "xyz123qweasd".to_string()
            }
        );
        assert!(outcome.not_found_message().is_none());
    }

    #[test]
    fn outcome_serializes_with_kind_tag() {
        let outcome = search("zebra", &fallback_catalog(), &Matcher::default());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "no_results");
        assert_eq!(json["query"], "zebra");
    }

    #[test]
    fn source_precedence() {
        let mut cfg = CatalogYamlConfig {
            documents_path: Some(PathBuf::from("cfg-docs.json")),
            ..Default::default()
        };
        let docs = Path::new("cli-docs.json");
        let listing = Path::new("cli-listing.json");

        assert_eq!(
            CatalogSource::resolve(Some(docs), Some(listing), &cfg),
            CatalogSource::Documents(docs.to_path_buf())
        );
        assert_eq!(
            CatalogSource::resolve(None, Some(listing), &cfg),
            CatalogSource::Listing(listing.to_path_buf())
        );
        assert_eq!(
            CatalogSource::resolve(None, None, &cfg),
            CatalogSource::Documents(PathBuf::from("cfg-docs.json"))
        );

        cfg.documents_path = None;
        cfg.listing_path = Some(PathBuf::from("cfg-listing.json"));
        assert_eq!(
            CatalogSource::resolve(None, None, &cfg),
            CatalogSource::Listing(PathBuf::from("cfg-listing.json"))
        );

        cfg.listing_path = None;
        assert_eq!(
            CatalogSource::resolve(None, None, &cfg),
            CatalogSource::Builtin
        );
    }

    #[test]
    fn builtin_source_is_fresh() {
        let loaded = CatalogSource::Builtin.load(&CatalogYamlConfig::default(), as_of());
        assert!(!loaded.stale);
        assert_eq!(loaded.catalog, fallback_catalog());
    }

    #[test]
    fn broken_source_falls_back() {
        let source = CatalogSource::Listing(PathBuf::from("/no/such/listing.json"));
        let loaded = source.load(&CatalogYamlConfig::default(), as_of());
        assert!(loaded.stale);
        assert_eq!(loaded.catalog.len(), 4);
    }
}
