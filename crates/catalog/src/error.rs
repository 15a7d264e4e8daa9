//! Error types produced by the catalog crate.
//!
//! | Error | Category | Description |
//! |-------|----------|-------------|
//! | [`Io`](CatalogError::Io) | Provider | Catalog or listing file could not be read |
//! | [`Json`](CatalogError::Json) | Provider | File was not valid catalog/listing JSON |
//! | [`NoDocuments`](CatalogError::NoDocuments) | Provider | Listing held no document files |
//! | [`DuplicateId`](CatalogError::DuplicateId) | Validation | Two documents share an id |
//! | [`EmptyName`](CatalogError::EmptyName) | Validation | Document title is blank |
//! | [`InvalidConfig`](CatalogError::InvalidConfig) | Configuration | Bad [`CatalogConfig`](crate::CatalogConfig) |
//!
//! Provider errors are recoverable: [`load_with_fallback`](crate::load_with_fallback)
//! swaps in the built-in catalog when any of them occurs.
use thiserror::Error;

/// Errors that can occur while building, validating, or loading a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read catalog source: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no document files found in repository listing")]
    NoDocuments,

    #[error("duplicate document id {0} in catalog")]
    DuplicateId(u64),

    #[error("document {0} has an empty name")]
    EmptyName(u64),

    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
}

impl CatalogError {
    /// True for failures of the catalog source itself, as opposed to a
    /// malformed catalog or configuration.
    pub fn is_source_failure(&self) -> bool {
        matches!(
            self,
            CatalogError::Io(_) | CatalogError::Json(_) | CatalogError::NoDocuments
        )
    }
}
