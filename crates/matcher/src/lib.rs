//! # docsearch matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` answers one question: given what the user typed and the
//! catalog, which documents should they see? It is a pure function of its
//! inputs. Nothing is cached between calls and nothing touches the network.
//!
//! ## How a query is evaluated
//!
//! 1. The query is trimmed; a blank query returns an empty [`MatchResult`].
//! 2. The trimmed query is lower-cased once.
//! 3. Each document is checked in catalog order:
//!    - **exact** if its `name`, `type` or `description` contains the query;
//!    - **similar** if the better of its name and description
//!      [`similarity`](similarity::similarity) exceeds
//!      [`DEFAULT_SIMILAR_THRESHOLD`] (0.4);
//!    - otherwise dropped.
//! 4. Similar hits are sorted best first. The sort is stable.
//! 5. If neither bucket has anything, the document whose *name* alone scores
//!    best becomes the suggestion, provided it beats
//!    [`DEFAULT_SUGGESTION_THRESHOLD`] (0.2). The trimmed query is echoed back
//!    so the caller can say `File "<query>" not found`.
//!
//! Both thresholds are strict and can be tuned through [`MatchConfig`].
//!
//! ## Core Types
//!
//! - [`Matcher`]: holds a validated [`MatchConfig`] and evaluates queries.
//! - [`MatchResult`]: the `exact`, `similar` and `suggestion` buckets.
//! - [`ScoredDocument`]: a document plus the score that placed it.
//! - [`MatchMetrics`]: optional process-wide observer, see
//!   [`set_match_metrics`].
//!
//! ## Example Usage
//!
//! ```
//! use catalog::fallback_documents;
//! use matcher::{MatchConfig, Matcher};
//!
//! let docs = fallback_documents();
//! let matcher = Matcher::new(MatchConfig::default()).expect("valid config");
//!
//! let result = matcher.match_catalog("tasky", &docs);
//! assert!(result.exact.is_empty() && result.similar.is_empty());
//! assert_eq!(result.suggestion.as_ref().map(|s| s.document.name.as_str()), Some("Essay"));
//! assert_eq!(result.not_found_message().as_deref(), Some("File \"tasky\" not found"));
//! ```

mod engine;
mod metrics;
mod types;

pub use crate::engine::{match_catalog, Matcher};
pub use crate::metrics::{set_match_metrics, MatchMetrics, MatchSummary};
pub use crate::types::{
    MatchConfig, MatchError, MatchResult, ScoredDocument, DEFAULT_SIMILAR_THRESHOLD,
    DEFAULT_SUGGESTION_THRESHOLD,
};
