//! Pairwise line comparison: normalized equality and edit-distance similarity.

use crate::normalize::normalize;

/// Returns `true` if the two lines are equal after normalization.
pub fn lines_equal(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Unit-cost Levenshtein distance over characters of the raw strings.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`.
///
/// Computed on the raw, non-normalized strings. Two empty strings are fully
/// similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}
