//! Configuration for turning repository listings into catalog documents.
//!
//! [`CatalogConfig`] is cheap to clone and serde-friendly so it can be
//! embedded in the umbrella YAML config.
//!
//! ```rust
//! use catalog::CatalogConfig;
//!
//! let config = CatalogConfig::default();
//! config.validate().expect("defaults are valid");
//! assert_eq!(config.docs_prefix, "docs/");
//! assert!(config.is_document_file("Marketing plan.DOCX"));
//! assert!(!config.is_document_file("logo.png"));
//! ```
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Repository the catalog is listed from. Used to derive download and
/// browse URLs for entries that arrive without them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepositoryRef {
    /// Direct download location of `path` on the configured branch.
    pub fn raw_url(&self, path: &str) -> String {
        format!(
            "https://raw.githubusercontent.com/{}/{}/{}/{}",
            self.owner, self.repo, self.branch, path
        )
    }

    /// Browsable page for `path` on the configured branch.
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.branch, path
        )
    }
}

impl Default for RepositoryRef {
    fn default() -> Self {
        Self {
            owner: "Talion-101".to_string(),
            repo: "document-search-ui".to_string(),
            branch: "main".to_string(),
        }
    }
}

/// Listing transform settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub repository: RepositoryRef,

    /// Directory prefix tree-listing entries must live under. Stripped from
    /// the entry path to form the file name.
    #[serde(default = "CatalogConfig::default_docs_prefix")]
    pub docs_prefix: String,

    /// File extensions (without the dot) that count as documents.
    #[serde(default = "CatalogConfig::default_extensions")]
    pub extensions: Vec<String>,

    /// `type` tag stamped on every document built from a listing.
    #[serde(default = "CatalogConfig::default_type")]
    pub default_type: String,
}

impl CatalogConfig {
    pub(crate) fn default_docs_prefix() -> String {
        "docs/".to_string()
    }

    pub(crate) fn default_extensions() -> Vec<String> {
        ["docx", "pdf", "doc", "txt", "md", "pptx", "xlsx"]
            .iter()
            .map(|ext| ext.to_string())
            .collect()
    }

    pub(crate) fn default_type() -> String {
        "DPM".to_string()
    }

    /// Whether `filename` ends in one of the configured document extensions.
    /// The comparison ignores ASCII case.
    pub fn is_document_file(&self, filename: &str) -> bool {
        let Some((_, ext)) = filename.rsplit_once('.') else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let repo = &self.repository;
        for (field, value) in [
            ("repository.owner", &repo.owner),
            ("repository.repo", &repo.repo),
            ("repository.branch", &repo.branch),
            ("default_type", &self.default_type),
        ] {
            if value.trim().is_empty() {
                return Err(CatalogError::InvalidConfig(format!(
                    "{field} must not be empty"
                )));
            }
        }
        if self.extensions.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "extensions must list at least one file extension".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryRef::default(),
            docs_prefix: Self::default_docs_prefix(),
            extensions: Self::default_extensions(),
            default_type: Self::default_type(),
        }
    }
}
