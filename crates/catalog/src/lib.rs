//! docsearch catalog layer
//!
//! This is where documents enter docsearch. We take whatever a catalog
//! source hands us (a saved repository listing, a JSON array of documents, or
//! nothing at all) and produce a validated [`Catalog`] the matcher can scan.
//!
//! ## What we do here
//!
//! - **Model documents** - [`Document`] carries the matchable fields (`name`,
//!   `type`, `description`) plus everything a renderer or downloader wants.
//! - **Transform listings** - contents or tree listings become documents;
//!   only files with a document extension survive ([`documents_from_listing`]).
//! - **Classify** - priority, category and a learning-value blurb are derived
//!   from the file name.
//! - **Fall back** - if a source fails, [`load_with_fallback`] serves the
//!   bundled catalog and flags it stale.
//! - **Recommend** - [`Catalog::recommended`] picks the reading list shown
//!   while no search is active.
//!
//! No network access happens in this crate. Fetching a listing is the
//! caller's job; we start from the JSON.
//!
//! ## Example
//!
//! ```
//! use catalog::{load_with_fallback, DocumentsFileProvider};
//!
//! let loaded = load_with_fallback(&DocumentsFileProvider::new("missing.json"));
//! assert!(loaded.stale);
//! assert_eq!(loaded.catalog.len(), 4);
//! ```

mod catalog;
mod classify;
mod config;
mod error;
mod fallback;
mod listing;
mod provider;
mod types;

pub use crate::catalog::{Catalog, RECOMMENDED_MEDIUM_LIMIT};
pub use crate::classify::{determine_category, determine_priority, learning_value};
pub use crate::config::{CatalogConfig, RepositoryRef};
pub use crate::error::CatalogError;
pub use crate::fallback::{fallback_catalog, fallback_documents};
pub use crate::listing::{
    documents_from_listing, strip_extension, ContentsEntry, RepositoryListing, TreeEntry,
    TreeListing,
};
pub use crate::provider::{
    load_with_fallback, CatalogProvider, DocumentsFileProvider, ListingFileProvider,
    LoadedCatalog, StaticProvider,
};
pub use crate::types::{Category, Document, Priority};
