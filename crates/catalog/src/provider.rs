//! Catalog providers.
//!
//! A provider is whatever hands the matcher its catalog snapshot. The matcher
//! makes no assumption about freshness; [`load_with_fallback`] is the one
//! place that decides what to do when a provider fails.
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local, NaiveDate};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::fallback::fallback_catalog;
use crate::listing::{documents_from_listing, RepositoryListing};
use crate::types::Document;

/// Source of a catalog snapshot.
pub trait CatalogProvider: Send + Sync {
    /// Short human-readable description, used in logs.
    fn source(&self) -> String;

    fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Serves a catalog that is already in memory.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    catalog: Catalog,
}

impl StaticProvider {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The bundled four-document catalog.
    pub fn builtin() -> Self {
        Self::new(fallback_catalog())
    }
}

impl CatalogProvider for StaticProvider {
    fn source(&self) -> String {
        "static".to_string()
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        Ok(self.catalog.clone())
    }
}

/// Reads a JSON array of [`Document`] records.
#[derive(Debug, Clone)]
pub struct DocumentsFileProvider {
    path: PathBuf,
}

impl DocumentsFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CatalogProvider for DocumentsFileProvider {
    fn source(&self) -> String {
        format!("documents:{}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        let content = fs::read_to_string(&self.path)?;
        let documents: Vec<Document> = serde_json::from_str(&content)?;
        Catalog::new(documents)
    }
}

/// Reads a saved repository listing (contents or tree JSON) and transforms
/// it with [`documents_from_listing`].
#[derive(Debug, Clone)]
pub struct ListingFileProvider {
    path: PathBuf,
    config: CatalogConfig,
    as_of: NaiveDate,
}

impl ListingFileProvider {
    /// `as_of` becomes every document's `last_modified`.
    pub fn new(path: impl AsRef<Path>, config: CatalogConfig, as_of: NaiveDate) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
            as_of,
        }
    }
}

impl CatalogProvider for ListingFileProvider {
    fn source(&self) -> String {
        format!("listing:{}", self.path.display())
    }

    fn load(&self) -> Result<Catalog, CatalogError> {
        self.config.validate()?;
        let content = fs::read_to_string(&self.path)?;
        let listing = RepositoryListing::from_json(&content)?;
        documents_from_listing(listing, &self.config, self.as_of)
    }
}

/// Result of [`load_with_fallback`].
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// True when the built-in catalog stands in for a failed provider.
    pub stale: bool,
    /// Provider error text when `stale` is set.
    pub error: Option<String>,
    pub loaded_at: DateTime<Local>,
}

impl LoadedCatalog {
    /// Load time as shown to the user, e.g. `2025-03-01 14:05:09`, with
    /// ` (Cached)` appended when the built-in catalog stands in.
    pub fn last_updated(&self) -> String {
        let stamp = self.loaded_at.format("%Y-%m-%d %H:%M:%S");
        if self.stale {
            format!("{stamp} (Cached)")
        } else {
            stamp.to_string()
        }
    }
}

/// Load from `provider`, substituting the built-in catalog on any failure.
pub fn load_with_fallback(provider: &dyn CatalogProvider) -> LoadedCatalog {
    let start = Instant::now();
    let source = provider.source();

    match provider.load() {
        Ok(catalog) => {
            info!(
                source = %source,
                documents = catalog.len(),
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_loaded"
            );
            LoadedCatalog {
                catalog,
                stale: false,
                error: None,
                loaded_at: Local::now(),
            }
        }
        Err(err) => {
            warn!(
                source = %source,
                error = %err,
                elapsed_micros = start.elapsed().as_micros(),
                "catalog_fallback"
            );
            LoadedCatalog {
                catalog: fallback_catalog(),
                stale: true,
                error: Some(err.to_string()),
                loaded_at: Local::now(),
            }
        }
    }
}
