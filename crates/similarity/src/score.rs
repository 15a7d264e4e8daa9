use crate::distance::levenshtein_chars;

/// Case-insensitive closeness of two strings in `[0.0, 1.0]`.
///
/// Both inputs are lower-cased, then scored as
/// `(len(longer) - d) / len(longer)` where `d` is the Levenshtein distance
/// and lengths are counted in Unicode scalar values of the lower-cased text.
/// Two empty strings score `1.0`; an empty string against anything else
/// scores `0.0`.
///
/// The function is total and symmetric.
///
/// # Examples
///
/// ```rust
/// use similarity::similarity;
///
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("Essay", "ESSAY"), 1.0);
/// assert_eq!(similarity("tasky", "essay"), 0.4);
/// assert_eq!(similarity("abc", ""), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    let longer = a.len().max(b.len());
    if longer == 0 {
        return 1.0;
    }

    let distance = levenshtein_chars(&a, &b);
    (longer - distance) as f64 / longer as f64
}
