//! Text and JSON renderings of a diff, and export to a file.

use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDate;
use linegap_diff::{DiffRecord, DiffStats, LineDiff};
use tracing::debug;

use crate::error::CompareResult;

/// Render one line per record. See [`render_line`].
pub fn render_text(records: &[DiffRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(out, "{}", render_line(record));
    }
    out
}

/// Marker, baseline and candidate line numbers, then the content.
/// Modified records show `original → content`.
pub fn render_line(record: &DiffRecord) -> String {
    let content = match record.original_content() {
        Some(original) => format!("{original} → {}", record.content()),
        None => record.content().to_string(),
    };
    format!(
        "{} {} {} | {}",
        record.kind().marker(),
        line_number(record.baseline_line()),
        line_number(record.candidate_line()),
        content
    )
}

fn line_number(n: Option<usize>) -> String {
    match n {
        Some(n) => format!("{n:>5}"),
        None => " ".repeat(5),
    }
}

/// Pretty-printed JSON of a full diff.
pub fn render_json(diff: &LineDiff) -> serde_json::Result<String> {
    serde_json::to_string_pretty(diff)
}

/// `"identical"`, or the non-zero counts as `+added -removed ~modified`.
pub fn summary_label(stats: &DiffStats) -> String {
    if stats.identical {
        return "identical".to_string();
    }
    let parts = [('+', stats.added), ('-', stats.removed), ('~', stats.modified)];
    parts
        .iter()
        .filter(|(_, n)| *n > 0)
        .map(|(sign, n)| format!("{sign}{n}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// File name for an export made on `date`.
pub fn default_export_name(date: NaiveDate) -> String {
    format!("diff_{}.txt", date.format("%Y-%m-%d"))
}

/// Write the text rendering of `records` to `path`.
pub fn export_to(path: impl AsRef<Path>, records: &[DiffRecord]) -> CompareResult<()> {
    let path = path.as_ref();
    std::fs::write(path, render_text(records))?;
    debug!(path = %path.display(), records = records.len(), "diff exported");
    Ok(())
}
