//! Diff records: the classified lines produced by the alignment walker.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::DiffStats;

/// Classification of a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Unchanged,
    Added,
    Removed,
    Modified,
}

impl DiffKind {
    /// Lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unchanged => "unchanged",
            Self::Added => "added",
            Self::Removed => "removed",
            Self::Modified => "modified",
        }
    }

    /// One-character marker used in text renderings.
    pub fn marker(&self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Added => '+',
            Self::Removed => '-',
            Self::Modified => '~',
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of a diff result. Line numbers are 1-based.
///
/// `content` is the candidate-side text, or the baseline text when the record
/// has no candidate side. Only [`DiffRecord::Modified`] carries the baseline
/// text separately, as `original_content`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffRecord {
    /// The line is present on both sides (after normalization).
    Unchanged {
        baseline_line: usize,
        candidate_line: usize,
        content: String,
    },
    /// The line exists only in the candidate.
    Added {
        candidate_line: usize,
        content: String,
    },
    /// The line exists only in the baseline.
    Removed {
        baseline_line: usize,
        content: String,
    },
    /// The baseline line was rewritten into the candidate line.
    Modified {
        baseline_line: usize,
        candidate_line: usize,
        content: String,
        original_content: String,
    },
}

impl DiffRecord {
    pub fn kind(&self) -> DiffKind {
        match self {
            Self::Unchanged { .. } => DiffKind::Unchanged,
            Self::Added { .. } => DiffKind::Added,
            Self::Removed { .. } => DiffKind::Removed,
            Self::Modified { .. } => DiffKind::Modified,
        }
    }

    /// Baseline line number, absent for added lines.
    pub fn baseline_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { baseline_line, .. }
            | Self::Removed { baseline_line, .. }
            | Self::Modified { baseline_line, .. } => Some(*baseline_line),
            Self::Added { .. } => None,
        }
    }

    /// Candidate line number, absent for removed lines.
    pub fn candidate_line(&self) -> Option<usize> {
        match self {
            Self::Unchanged { candidate_line, .. }
            | Self::Added { candidate_line, .. }
            | Self::Modified { candidate_line, .. } => Some(*candidate_line),
            Self::Removed { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Unchanged { content, .. }
            | Self::Added { content, .. }
            | Self::Removed { content, .. }
            | Self::Modified { content, .. } => content,
        }
    }

    /// Baseline text of a modified line.
    pub fn original_content(&self) -> Option<&str> {
        match self {
            Self::Modified {
                original_content, ..
            } => Some(original_content),
            _ => None,
        }
    }

    /// Returns `true` for every kind except [`DiffKind::Unchanged`].
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged { .. })
    }
}

/// The full result of comparing one candidate against a baseline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// Records in reading order.
    pub records: Vec<DiffRecord>,
    /// Aggregate counts over `records`.
    pub stats: DiffStats,
    /// Number of lines in the baseline text.
    pub baseline_lines: usize,
    /// Number of lines in the candidate text.
    pub candidate_lines: usize,
}

impl LineDiff {
    /// Returns `true` if the candidate matches the baseline.
    pub fn is_identical(&self) -> bool {
        self.stats.identical
    }

    /// Iterate over the change records only.
    pub fn changes(&self) -> impl Iterator<Item = &DiffRecord> {
        self.records.iter().filter(|r| r.is_change())
    }
}
