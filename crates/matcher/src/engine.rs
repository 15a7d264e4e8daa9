use std::cmp::Ordering;
use std::time::Instant;

use catalog::Document;
use rayon::prelude::*;
use similarity::similarity;
use tracing::debug;

use crate::metrics::{metrics_recorder, MatchSummary};
use crate::types::{MatchConfig, MatchError, MatchResult, ScoredDocument};


/// How one document relates to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Exact,
    Similar(f64),
    Rejected,
}

/// Classifies a catalog against a query.
///
/// Holds nothing but its validated [`MatchConfig`]; every call recomputes from
/// scratch, so one matcher can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Build a matcher, rejecting thresholds outside `[0, 1]`.
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Evaluate `query` against `documents`.
    ///
    /// 1. A blank query yields an empty result without scoring anything.
    /// 2. A document whose `name`, `type` or `description` contains the
    ///    lower-cased query is an exact hit.
    /// 3. Otherwise the better of its name and description similarity must
    ///    exceed `similar_threshold` for it to be listed as similar.
    /// 4. With no exact or similar hits, the document with the best
    ///    name-only similarity is suggested if that score exceeds
    ///    `suggestion_threshold`. Ties go to the earliest document.
    pub fn match_catalog(&self, query: &str, documents: &[Document]) -> MatchResult {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return MatchResult::default();
        }

        let start = Instant::now();
        let term = trimmed.to_lowercase();

        let verdicts: Vec<Verdict> = if self.config.use_parallel {
            documents
                .par_iter()
                .map(|doc| self.classify(&term, doc))
                .collect()
        } else {
            documents
                .iter()
                .map(|doc| self.classify(&term, doc))
                .collect()
        };

        let mut exact = Vec::new();
        let mut similar = Vec::new();
        for (doc, verdict) in documents.iter().zip(verdicts) {
            match verdict {
                Verdict::Exact => exact.push(doc.clone()),
                Verdict::Similar(score) => similar.push(ScoredDocument::new(doc.clone(), score)),
                Verdict::Rejected => {}
            }
        }

        // `sort_by` is stable, so equal scores keep catalog order.
        similar.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });

        let suggestion = if exact.is_empty() && similar.is_empty() {
            self.suggest(&term, documents)
        } else {
            None
        };
        let query_echo = suggestion.as_ref().map(|_| trimmed.to_string());

        let summary = MatchSummary {
            candidates: documents.len(),
            exact: exact.len(),
            similar: similar.len(),
            suggested: suggestion.is_some(),
        };
        let latency = start.elapsed();

        debug!(
            query_len = trimmed.chars().count(),
            candidates = summary.candidates,
            exact = summary.exact,
            similar = summary.similar,
            suggested = summary.suggested,
            parallel = self.config.use_parallel,
            elapsed_micros = latency.as_micros(),
            "match_complete"
        );

        if let Some(recorder) = metrics_recorder() {
            recorder.record_match(&summary, latency);
        }

        MatchResult {
            exact,
            similar,
            suggestion,
            query_echo,
        }
    }

    fn classify(&self, term: &str, doc: &Document) -> Verdict {
        if contains_term(&doc.name, term)
            || contains_term(&doc.doc_type, term)
            || contains_term(&doc.description, term)
        {
            return Verdict::Exact;
        }

        let score = similarity(term, &doc.name).max(similarity(term, &doc.description));
        if score > self.config.similar_threshold {
            Verdict::Similar(score)
        } else {
            Verdict::Rejected
        }
    }

    fn suggest(&self, term: &str, documents: &[Document]) -> Option<ScoredDocument> {
        let mut best: Option<(&Document, f64)> = None;
        for doc in documents {
            let score = similarity(term, &doc.name);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((doc, score));
            }
        }

        best.filter(|(_, score)| *score > self.config.suggestion_threshold)
            .map(|(doc, score)| ScoredDocument::new(doc.clone(), score))
    }
}

fn contains_term(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

/// Evaluate `query` with the default thresholds.
///
/// ```
/// use catalog::fallback_documents;
///
/// let result = matcher::match_catalog("activty", &fallback_documents());
/// assert!(result.exact.is_empty());
/// assert_eq!(result.similar[0].document.name, "Activity");
/// assert_eq!(result.similar[0].percent(), 88);
/// ```
pub fn match_catalog(query: &str, documents: &[Document]) -> MatchResult {
    Matcher::default().match_catalog(query, documents)
}
