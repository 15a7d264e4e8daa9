//! Common utilities for docsearch benchmarks
//!
//! Synthetic catalogs sized well past anything a curated library holds, so
//! the per-document cost dominates.

#![allow(dead_code)]

use docsearch::{Catalog, Document};

const TOPICS: [&str; 8] = [
    "Activity", "Essay", "CLA", "Marketing Plan", "Budget", "Roadmap", "Handbook", "Review",
];

/// Queries covering every outcome: exact, similar, suggestion, nothing.
pub const QUERIES: [(&str, &str); 4] = [
    ("exact", "roadmap 12"),
    ("similar", "markting plan 7"),
    ("suggestion", "hndbk"),
    ("nothing", "xyz123qweasd"),
];

/// `count` documents cycling through a handful of topics.
pub fn synthetic_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            let topic = TOPICS[i % TOPICS.len()];
            Document::new(
                i as u64 + 1,
                format!("{topic} {i}"),
                "DPM",
                format!("{topic} document number {i} for DPM processes"),
            )
        })
        .collect()
}

pub fn synthetic_catalog(count: usize) -> Catalog {
    Catalog::new(synthetic_documents(count)).expect("synthetic ids are unique")
}
