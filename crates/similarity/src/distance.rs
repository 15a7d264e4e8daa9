//! Levenshtein edit distance.
//!
//! Classic dynamic-programming recurrence:
//!
//! ```text
//! dist[i][0] = i
//! dist[0][j] = j
//! dist[i][j] = dist[i-1][j-1]                                  if a[i-1] == b[j-1]
//!            = 1 + min(dist[i-1][j-1], dist[i][j-1], dist[i-1][j])  otherwise
//! ```
//!
//! Only the previous row is ever read, so two rows are kept instead of the
//! full matrix. Characters are compared as Unicode scalar values.

/// Minimum number of single-character insertions, deletions and
/// substitutions needed to turn `a` into `b`.
///
/// Comparison is exact (case-sensitive). Use [`similarity`](crate::similarity)
/// for the case-insensitive normalized score.
///
/// # Examples
///
/// ```rust
/// use similarity::levenshtein;
///
/// assert_eq!(levenshtein("", ""), 0);
/// assert_eq!(levenshtein("abc", ""), 3);
/// assert_eq!(levenshtein("flaw", "lawn"), 2);
/// assert_eq!(levenshtein("Essay", "essay"), 1);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_chars(&a, &b)
}

pub(crate) fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(curr[j]).min(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
