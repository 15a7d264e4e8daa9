//! YAML configuration for docsearch.
//!
//! One file configures where the catalog comes from, how repository listings
//! are turned into documents, and how strict the matcher is. Every field has
//! a default, so an empty mapping with only a `version` is a valid config.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1"
//! name: "DPM library"
//!
//! catalog:
//!   owner: "Talion-101"
//!   repo: "document-search-ui"
//!   branch: "main"
//!   docs_prefix: "docs/"
//!   extensions: ["docx", "pdf", "md"]
//!   default_type: "DPM"
//!   listing_path: "listing.json"
//!
//! matcher:
//!   similar_threshold: 0.4
//!   suggestion_threshold: 0.2
//!   use_parallel: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use catalog::{CatalogConfig, RepositoryRef};
use matcher::{MatchConfig, DEFAULT_SIMILAR_THRESHOLD, DEFAULT_SUGGESTION_THRESHOLD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocsearchConfig {
    /// Configuration format version, `"1"` or `"1.0"`.
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub catalog: CatalogYamlConfig,

    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl DocsearchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: DocsearchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.catalog.validate()?;
        self.matcher.validate()?;
        Ok(())
    }
}

impl Default for DocsearchConfig {
    fn default() -> Self {
        Self {
            version: "1".to_string(),
            name: None,
            catalog: CatalogYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// `catalog:` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogYamlConfig {
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_repo")]
    pub repo: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_docs_prefix")]
    pub docs_prefix: String,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    #[serde(default = "default_type")]
    pub default_type: String,

    /// Saved repository listing (contents or tree JSON).
    #[serde(default)]
    pub listing_path: Option<PathBuf>,

    /// JSON array of documents.
    #[serde(default)]
    pub documents_path: Option<PathBuf>,
}

impl CatalogYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.listing_path.is_some() && self.documents_path.is_some() {
            return Err(ConfigLoadError::Validation(
                "catalog.listing_path and catalog.documents_path are mutually exclusive"
                    .to_string(),
            ));
        }
        self.to_catalog_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("catalog: {err}")))
    }

    /// Listing transform settings for the catalog crate.
    pub fn to_catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            repository: RepositoryRef {
                owner: self.owner.clone(),
                repo: self.repo.clone(),
                branch: self.branch.clone(),
            },
            docs_prefix: self.docs_prefix.clone(),
            extensions: self.extensions.clone(),
            default_type: self.default_type.clone(),
        }
    }
}

impl Default for CatalogYamlConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            branch: default_branch(),
            docs_prefix: default_docs_prefix(),
            extensions: default_extensions(),
            default_type: default_type(),
            listing_path: None,
            documents_path: None,
        }
    }
}

/// `matcher:` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_similar_threshold")]
    pub similar_threshold: f64,

    #[serde(default = "default_suggestion_threshold")]
    pub suggestion_threshold: f64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_match_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matcher: {err}")))
    }

    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig::default()
            .with_similar_threshold(self.similar_threshold)
            .with_suggestion_threshold(self.suggestion_threshold)
            .with_parallel(self.use_parallel)
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            similar_threshold: default_similar_threshold(),
            suggestion_threshold: default_suggestion_threshold(),
            use_parallel: false,
        }
    }
}

// Defaults mirror the catalog crate's so a partial `catalog:` section
// behaves like no section at all.
fn default_owner() -> String {
    RepositoryRef::default().owner
}
fn default_repo() -> String {
    RepositoryRef::default().repo
}
fn default_branch() -> String {
    RepositoryRef::default().branch
}
fn default_docs_prefix() -> String {
    CatalogConfig::default().docs_prefix
}
fn default_extensions() -> Vec<String> {
    CatalogConfig::default().extensions
}
fn default_type() -> String {
    CatalogConfig::default().default_type
}
fn default_similar_threshold() -> f64 {
    DEFAULT_SIMILAR_THRESHOLD
}
fn default_suggestion_threshold() -> f64 {
    DEFAULT_SUGGESTION_THRESHOLD
}
