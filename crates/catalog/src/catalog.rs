use std::collections::HashSet;

use serde::Serialize;

use crate::error::CatalogError;
use crate::types::{Document, Priority};

/// How many medium-priority documents follow the high-priority ones in
/// [`Catalog::recommended`].
pub const RECOMMENDED_MEDIUM_LIMIT: usize = 2;

/// An ordered, validated set of documents.
///
/// Order is insertion order; the matcher only relies on it to break ties.
/// Every document has a unique `id` and a non-blank `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    documents: Vec<Document>,
}

impl Catalog {
    /// Validate and wrap `documents`.
    pub fn new(documents: Vec<Document>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if doc.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(doc.id));
            }
            if !seen.insert(doc.id) {
                return Err(CatalogError::DuplicateId(doc.id));
            }
        }
        Ok(Self { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    /// Reading list shown while no search is active: every high-priority
    /// document in catalog order, then the first
    /// [`RECOMMENDED_MEDIUM_LIMIT`] medium-priority ones.
    pub fn recommended(&self) -> Vec<&Document> {
        let high = self.iter().filter(|doc| doc.priority == Priority::High);
        let medium = self
            .iter()
            .filter(|doc| doc.priority == Priority::Medium)
            .take(RECOMMENDED_MEDIUM_LIMIT);
        high.chain(medium).collect()
    }
}

impl AsRef<[Document]> for Catalog {
    fn as_ref(&self) -> &[Document] {
        &self.documents
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
