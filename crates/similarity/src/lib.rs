//! docsearch similarity layer.
//!
//! Scores how close two short strings are, for typo-tolerant lookup of
//! document titles and descriptions. Everything here is a pure function.
//!
//! ## What we do
//!
//! - Levenshtein edit distance over Unicode scalar values ([`levenshtein`])
//! - Case-insensitive normalized closeness in `[0.0, 1.0]` ([`similarity`])
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no global state. Same two strings in, same score
//! out, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `similarity(a, b) == similarity(b, a)`
//! - `similarity(x, x) == 1.0`, including for two empty strings
//! - Case never affects the score: both sides are lower-cased first
//! - Cost is `O(len(a) * len(b))`; inputs are expected to be titles and
//!   one-line summaries, not full-text bodies
//!
//! ```rust
//! use similarity::{levenshtein, similarity};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert!((similarity("activty", "Activity") - 0.875).abs() < 1e-12);
//! ```

mod distance;
mod score;

pub use crate::distance::levenshtein;
pub use crate::score::similarity;
