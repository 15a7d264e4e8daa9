//! Core data model for catalog documents.
//!
//! ```text
//! Document
//! ├── id: u64                      unique within one catalog
//! ├── name: String                 display title, matched + scored
//! ├── type: String                 classification tag, matched
//! ├── description: String          summary, matched + scored
//! ├── category: Category           classification, not matched
//! ├── priority: Priority           drives recommendations
//! ├── learning_value: String
//! ├── filename: String
//! ├── size_bytes: Option<u64>
//! ├── last_modified: Option<NaiveDate>
//! ├── download_url: Option<String>
//! ├── source_url: Option<String>
//! └── sha: Option<String>
//! ```
//!
//! Only `name`, `type` and `description` are ever looked at by the matcher.
//! The rest is carried for whoever renders or downloads the document.
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::classify::{determine_category, determine_priority, learning_value};

/// How important a document is for someone new to the material.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Badge text shown next to recommended documents.
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "Essential",
            Priority::Medium => "Important",
            Priority::Low => "Reference",
        }
    }
}

/// Broad subject area of a document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fundamentals,
    Advanced,
    Theory,
    Practical,
    #[default]
    General,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fundamentals => "fundamentals",
            Category::Advanced => "advanced",
            Category::Theory => "theory",
            Category::Practical => "practical",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry.
///
/// Absent text fields deserialize as empty strings so a sloppy provider can
/// never make matching fail.
///
/// # Examples
///
/// ```rust
/// use catalog::{Category, Document, Priority};
///
/// let doc = Document::new(1, "Activity", "DPM", "Activity document for DPM processes");
/// assert_eq!(doc.priority, Priority::High);
/// assert_eq!(doc.category, Category::Fundamentals);
/// assert_eq!(doc.display_size(), "Unknown");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Document {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub learning_value: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub size_bytes: Option<u64>,
    #[serde(default)]
    pub last_modified: Option<NaiveDate>,
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
}

impl Document {
    /// Build a document from its matchable fields.
    ///
    /// Priority, category and learning value are derived from `name` with the
    /// same heuristics the listing transform applies to file names.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        doc_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let priority = determine_priority(&name);
        let category = determine_category(&name);
        Self {
            id,
            doc_type: doc_type.into(),
            description: description.into(),
            category,
            priority,
            learning_value: learning_value(&name, category, priority),
            filename: name.clone(),
            name,
            ..Default::default()
        }
    }

    /// Size rounded to whole kilobytes, e.g. `"245 KB"`, or `"Unknown"`.
    pub fn display_size(&self) -> String {
        match self.size_bytes {
            Some(bytes) => format!("{} KB", (bytes as f64 / 1024.0).round() as u64),
            None => "Unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_size_rounds_to_kilobytes() {
        let mut doc = Document::new(1, "Essay", "DPM", "");
        doc.size_bytes = Some(245 * 1024);
        assert_eq!(doc.display_size(), "245 KB");
        doc.size_bytes = Some(1536);
        assert_eq!(doc.display_size(), "2 KB");
        doc.size_bytes = Some(100);
        assert_eq!(doc.display_size(), "0 KB");
    }

    #[test]
    fn missing_text_fields_deserialize_as_empty() {
        let doc: Document = serde_json::from_str(r#"{"id": 7, "name": "Essay"}"#).unwrap();
        assert_eq!(doc.id, 7);
        assert_eq!(doc.description, "");
        assert_eq!(doc.doc_type, "");
        assert_eq!(doc.priority, Priority::Low);
        assert!(doc.last_modified.is_none());
    }

    #[test]
    fn type_field_uses_wire_name() {
        let doc = Document::new(3, "CLA 2", "DPM", "Advanced CLA 2 document");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "DPM");
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["category"], "advanced");
        assert!(json.get("doc_type").is_none());
    }

    #[test]
    fn priority_labels() {
        assert_eq!(Priority::High.label(), "Essential");
        assert_eq!(Priority::Medium.label(), "Important");
        assert_eq!(Priority::Low.label(), "Reference");
    }
}
