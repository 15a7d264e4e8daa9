//! Built-in catalog used when no source is configured or the configured one
//! fails to load.
use chrono::NaiveDate;

use crate::catalog::Catalog;
use crate::types::{Category, Document, Priority};

const FALLBACK_RAW_BASE: &str = "https://raw.githubusercontent.com/Talion-101/DPM/main";

struct Entry {
    name: &'static str,
    filename: &'static str,
    url_path: &'static str,
    description: &'static str,
    size_kb: u64,
    priority: Priority,
    category: Category,
    learning_value: &'static str,
}

const ENTRIES: [Entry; 4] = [
    Entry {
        name: "Activity",
        filename: "Activity.docx",
        url_path: "Activity.docx",
        description: "Activity document for DPM processes and workflow management",
        size_kb: 245,
        priority: Priority::High,
        category: Category::Fundamentals,
        learning_value: "Essential for understanding basic DPM workflows",
    },
    Entry {
        name: "CLA 2",
        filename: "CLA 2.docx",
        url_path: "CLA%202.docx",
        description: "Advanced CLA 2 document covering complex DPM scenarios",
        size_kb: 189,
        priority: Priority::Medium,
        category: Category::Advanced,
        learning_value: "Advanced concepts for DPM implementation",
    },
    Entry {
        name: "Essay",
        filename: "Essay.docx",
        url_path: "Essay.docx",
        description: "Comprehensive essay on DPM theoretical foundations",
        size_kb: 167,
        priority: Priority::Medium,
        category: Category::Theory,
        learning_value: "Theoretical foundation and case studies",
    },
    Entry {
        name: "Marketing Plan",
        filename: "Marketing plan.docx",
        url_path: "Marketing%20plan.docx",
        description: "Strategic marketing plan utilizing DPM methodologies",
        size_kb: 312,
        priority: Priority::High,
        category: Category::Practical,
        learning_value: "Real-world application and strategic planning",
    },
];

/// The four bundled documents, ids 1 through 4.
pub fn fallback_documents() -> Vec<Document> {
    let modified = NaiveDate::from_ymd_opt(2024, 7, 20);
    ENTRIES
        .iter()
        .zip(1u64..)
        .map(|(entry, id)| Document {
            id,
            name: entry.name.to_string(),
            doc_type: "DPM".to_string(),
            description: entry.description.to_string(),
            category: entry.category,
            priority: entry.priority,
            learning_value: entry.learning_value.to_string(),
            filename: entry.filename.to_string(),
            size_bytes: Some(entry.size_kb * 1024),
            last_modified: modified,
            download_url: Some(format!("{FALLBACK_RAW_BASE}/{}", entry.url_path)),
            source_url: None,
            sha: None,
        })
        .collect()
}

/// [`fallback_documents`] wrapped as a catalog.
pub fn fallback_catalog() -> Catalog {
    match Catalog::new(fallback_documents()) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "builtin catalog rejected");
            Catalog::default()
        }
    }
}
