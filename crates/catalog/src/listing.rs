//! Repository listing transform.
//!
//! A catalog source hands us one of two JSON shapes, both as produced by the
//! GitHub REST API:
//!
//! - a **contents** listing: an array of `{name, path, type, size,
//!   download_url, html_url, sha}` for one directory;
//! - a recursive **tree** listing: `{tree: [{path, type, size, sha}]}` for the
//!   whole branch.
//!
//! Tree entries are narrowed to blobs under the configured docs prefix and
//! reshaped into contents entries, so everything downstream sees one shape.
//! Fetching the JSON is the caller's business; nothing here does I/O.
use chrono::NaiveDate;
use serde::Deserialize;

use crate::catalog::Catalog;
use crate::classify::{determine_category, determine_priority, learning_value};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::types::Document;

/// One entry of a contents listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContentsEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// `"file"`, `"dir"`, `"symlink"` or `"submodule"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

/// One entry of a tree listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    /// `"blob"`, `"tree"` or `"commit"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TreeListing {
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

/// Either listing shape.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum RepositoryListing {
    Contents(Vec<ContentsEntry>),
    Tree(TreeListing),
}

impl RepositoryListing {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten into contents entries.
    ///
    /// Tree blobs under `cfg.docs_prefix` keep their path; their name is the
    /// path with the prefix removed, and URLs are derived from
    /// `cfg.repository`.
    pub fn into_entries(self, cfg: &CatalogConfig) -> Vec<ContentsEntry> {
        match self {
            RepositoryListing::Contents(entries) => entries,
            RepositoryListing::Tree(listing) => {
                if listing.truncated {
                    tracing::warn!(
                        entries = listing.tree.len(),
                        "tree listing truncated; catalog may be incomplete"
                    );
                }
                listing
                    .tree
                    .into_iter()
                    .filter(|entry| entry.kind == "blob")
                    .filter_map(|entry| {
                        let name = entry.path.strip_prefix(cfg.docs_prefix.as_str())?;
                        Some(ContentsEntry {
                            name: name.to_string(),
                            kind: "file".to_string(),
                            size: entry.size,
                            download_url: Some(cfg.repository.raw_url(&entry.path)),
                            html_url: Some(cfg.repository.blob_url(&entry.path)),
                            sha: entry.sha,
                            path: entry.path,
                        })
                    })
                    .collect()
            }
        }
    }
}

/// File name without its final extension.
///
/// `"Marketing plan.docx"` becomes `"Marketing plan"`. Only a trailing
/// `.ext` with no further dots or slashes is removed. A name that would end
/// up empty (`".md"`) is returned unchanged.
pub fn strip_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !ext.is_empty() && !ext.contains('/') && !stem.is_empty() => stem,
        _ => filename,
    }
}

/// Build a catalog from a listing.
///
/// Only files with a configured document extension survive. Ids are 1-based
/// positions among the survivors, `last_modified` is `as_of`.
///
/// # Errors
///
/// [`CatalogError::NoDocuments`] when nothing survives the filter, plus
/// whatever [`Catalog::new`] rejects.
pub fn documents_from_listing(
    listing: RepositoryListing,
    cfg: &CatalogConfig,
    as_of: NaiveDate,
) -> Result<Catalog, CatalogError> {
    let files: Vec<ContentsEntry> = listing
        .into_entries(cfg)
        .into_iter()
        .filter(|entry| entry.kind == "file" && cfg.is_document_file(&entry.name))
        .collect();

    if files.is_empty() {
        return Err(CatalogError::NoDocuments);
    }

    let documents = files
        .into_iter()
        .zip(1u64..)
        .map(|(file, id)| {
            let name = strip_extension(&file.name).to_string();
            let priority = determine_priority(&file.name);
            let category = determine_category(&file.name);
            Document {
                id,
                description: format!("{name} document for {} processes", cfg.default_type),
                doc_type: cfg.default_type.clone(),
                category,
                priority,
                learning_value: learning_value(&file.name, category, priority),
                size_bytes: file.size,
                last_modified: Some(as_of),
                download_url: file.download_url,
                source_url: file.html_url,
                sha: file.sha,
                filename: file.name,
                name,
            }
        })
        .collect();

    Catalog::new(documents)
}
