//! Aggregate statistics over a record sequence.

use serde::{Deserialize, Serialize};

use crate::normalize::is_blank;
use crate::record::DiffRecord;

/// Counts of each record kind, ignoring blank-only changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
    /// `true` when there are no added, removed, or modified lines.
    pub identical: bool,
}

impl DiffStats {
    /// Total number of counted changes.
    pub fn changes(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// Count records in a single pass.
///
/// Added and removed records count only when their content is not blank, and
/// modified records only when either side is not blank. Every unchanged
/// record counts.
pub fn diff_stats(records: &[DiffRecord]) -> DiffStats {
    let mut stats = DiffStats::default();

    for record in records {
        match record {
            DiffRecord::Added { content, .. } if !is_blank(content) => stats.added += 1,
            DiffRecord::Removed { content, .. } if !is_blank(content) => stats.removed += 1,
            DiffRecord::Modified {
                content,
                original_content,
                ..
            } if !is_blank(content) || !is_blank(original_content) => stats.modified += 1,
            DiffRecord::Unchanged { .. } => stats.unchanged += 1,
            _ => {}
        }
    }

    stats.identical = stats.changes() == 0;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_identical() {
        let stats = diff_stats(&[]);
        assert_eq!(stats, DiffStats { identical: true, ..Default::default() });
    }

    #[test]
    fn counts_each_kind() {
        let records = vec![
            DiffRecord::Unchanged {
                baseline_line: 1,
                candidate_line: 1,
                content: "a".into(),
            },
            DiffRecord::Removed {
                baseline_line: 2,
                content: "b".into(),
            },
            DiffRecord::Added {
                candidate_line: 2,
                content: "x".into(),
            },
            DiffRecord::Modified {
                baseline_line: 3,
                candidate_line: 3,
                content: "cc".into(),
                original_content: "c".into(),
            },
        ];
        let stats = diff_stats(&records);
        assert_eq!(stats.added, 1);
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.modified, 1);
        assert_eq!(stats.unchanged, 1);
        assert_eq!(stats.changes(), 3);
        assert!(!stats.identical);
    }

    #[test]
    fn blank_changes_are_not_counted() {
        let records = vec![
            DiffRecord::Added {
                candidate_line: 1,
                content: "   ".into(),
            },
            DiffRecord::Removed {
                baseline_line: 1,
                content: String::new(),
            },
            DiffRecord::Modified {
                baseline_line: 2,
                candidate_line: 2,
                content: " ".into(),
                original_content: "\t".into(),
            },
        ];
        let stats = diff_stats(&records);
        assert_eq!(stats.changes(), 0);
        assert!(stats.identical);
    }

    #[test]
    fn blank_unchanged_lines_are_counted() {
        let records = vec![DiffRecord::Unchanged {
            baseline_line: 1,
            candidate_line: 1,
            content: String::new(),
        }];
        assert_eq!(diff_stats(&records).unchanged, 1);
    }

    #[test]
    fn modified_with_one_blank_side_counts() {
        let records = vec![DiffRecord::Modified {
            baseline_line: 1,
            candidate_line: 1,
            content: "text".into(),
            original_content: "  ".into(),
        }];
        assert_eq!(diff_stats(&records).modified, 1);
    }
}
