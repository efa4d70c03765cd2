//! Line splitting and whitespace normalization.
//!
//! Normalized lines are only ever used for comparison. Records always carry
//! the original line text.

/// Split a text into lines on `'\n'`, dropping a trailing `'\r'` from each line.
///
/// An empty text yields a single empty line, and a text ending in a newline
/// yields a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Trim a line and collapse every interior run of whitespace into one space.
pub fn normalize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for word in line.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Returns `true` if the line is empty or only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
