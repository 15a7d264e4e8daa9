//! File-name heuristics that tag documents with a priority, a category and a
//! one-line learning value. All checks run on the lower-cased name.
use crate::types::{Category, Priority};

pub fn determine_priority(filename: &str) -> Priority {
    let name = filename.to_lowercase();
    if name.contains("activity") || name.contains("marketing") {
        Priority::High
    } else if name.contains("cla") || name.contains("essay") {
        Priority::Medium
    } else {
        Priority::Low
    }
}

pub fn determine_category(filename: &str) -> Category {
    let name = filename.to_lowercase();
    if name.contains("activity") {
        Category::Fundamentals
    } else if name.contains("cla") {
        Category::Advanced
    } else if name.contains("essay") {
        Category::Theory
    } else if name.contains("marketing") {
        Category::Practical
    } else {
        Category::General
    }
}

/// Why someone would read this document.
///
/// Known subjects get a fixed blurb; everything else is phrased from the
/// priority and category.
pub fn learning_value(filename: &str, category: Category, priority: Priority) -> String {
    let name = filename.to_lowercase();
    if name.contains("activity") {
        return "Essential for understanding basic DPM workflows".to_string();
    }
    if name.contains("marketing") {
        return "Real-world application and strategic planning".to_string();
    }
    if name.contains("essay") {
        return "Theoretical foundation and case studies".to_string();
    }
    if name.contains("cla") {
        return "Advanced concepts for DPM implementation".to_string();
    }

    let weight = match priority {
        Priority::High => "Essential",
        Priority::Medium => "Important",
        Priority::Low => "Supplementary",
    };
    format!("{weight} {category} content")
}
