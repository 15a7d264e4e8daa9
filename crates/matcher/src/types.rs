use catalog::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Combined name/description similarity a non-exact document must exceed to
/// be listed as similar.
pub const DEFAULT_SIMILAR_THRESHOLD: f64 = 0.4;

/// Name-only similarity the best candidate must exceed to be offered as a
/// suggestion when nothing else matched.
pub const DEFAULT_SUGGESTION_THRESHOLD: f64 = 0.2;

/// Tuning for a [`crate::Matcher`].
///
/// Both thresholds are strict: a score equal to the threshold does not pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    #[serde(default = "MatchConfig::default_similar_threshold")]
    pub similar_threshold: f64,
    #[serde(default = "MatchConfig::default_suggestion_threshold")]
    pub suggestion_threshold: f64,
    /// Classify documents on the rayon global pool. Output is identical to
    /// the sequential path.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_similar_threshold() -> f64 {
        DEFAULT_SIMILAR_THRESHOLD
    }

    pub(crate) fn default_suggestion_threshold() -> f64 {
        DEFAULT_SUGGESTION_THRESHOLD
    }

    pub fn with_similar_threshold(mut self, threshold: f64) -> Self {
        self.similar_threshold = threshold;
        self
    }

    pub fn with_suggestion_threshold(mut self, threshold: f64) -> Self {
        self.suggestion_threshold = threshold;
        self
    }

    /// Enable or disable parallel classification.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Both thresholds must be finite and inside `[0, 1]`.
    pub fn validate(&self) -> Result<(), MatchError> {
        check_threshold("similar_threshold", self.similar_threshold)?;
        check_threshold("suggestion_threshold", self.suggestion_threshold)
    }
}

fn check_threshold(field: &str, value: f64) -> Result<(), MatchError> {
    if !value.is_finite() {
        return Err(MatchError::InvalidConfig(format!(
            "{field} must be a finite number"
        )));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(MatchError::InvalidConfig(format!(
            "{field} must be between 0.0 and 1.0, got {value}"
        )));
    }
    Ok(())
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            similar_threshold: DEFAULT_SIMILAR_THRESHOLD,
            suggestion_threshold: DEFAULT_SUGGESTION_THRESHOLD,
            use_parallel: false,
        }
    }
}

/// A document together with the score that placed it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredDocument {
    pub document: Document,
    pub similarity: f64,
}

impl ScoredDocument {
    pub fn new(document: Document, similarity: f64) -> Self {
        Self {
            document,
            similarity,
        }
    }

    /// Similarity as a whole percentage, e.g. `0.875` becomes `88`.
    pub fn percent(&self) -> u32 {
        (self.similarity * 100.0).round().clamp(0.0, 100.0) as u32
    }
}

/// Outcome of one query evaluation.
///
/// A document lands in at most one of `exact`, `similar` and `suggestion`.
/// `suggestion` and `query_echo` are only set when the other two buckets are
/// empty, and they are always set together.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Containment hits, in catalog order.
    pub exact: Vec<Document>,
    /// Fuzzy hits, best first; ties keep catalog order.
    pub similar: Vec<ScoredDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<ScoredDocument>,
    /// The trimmed query as the user typed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_echo: Option<String>,
}

impl MatchResult {
    /// True when nothing matched and nothing was suggested.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.similar.is_empty() && self.suggestion.is_none()
    }

    /// Number of documents across all buckets.
    pub fn len(&self) -> usize {
        self.exact.len() + self.similar.len() + usize::from(self.suggestion.is_some())
    }

    /// Rejection line shown above a suggestion.
    pub fn not_found_message(&self) -> Option<String> {
        self.suggestion.as_ref()?;
        self.query_echo
            .as_deref()
            .map(|query| format!("File \"{query}\" not found"))
    }
}

/// Errors surfaced by the matcher.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
