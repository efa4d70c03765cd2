//! Comparison result types.
//!
//! These types describe how each candidate relates to the baseline and what
//! the candidates look like taken together.

use linegap_diff::DiffStats;
use serde::{Deserialize, Serialize};

/// How one candidate relates to the baseline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    /// The candidate (or the baseline) is blank, so nothing was compared.
    Empty,
    /// No counted differences.
    Identical,
    /// The candidate differs; `changes` is added + removed + modified.
    Different { changes: usize },
}

impl SourceStatus {
    pub fn from_stats(stats: &DiffStats) -> Self {
        if stats.identical {
            Self::Identical
        } else {
            Self::Different {
                changes: stats.changes(),
            }
        }
    }

    pub fn is_compared(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Status of a single candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceReport {
    pub name: String,
    pub status: SourceStatus,
    /// Present when the candidate was compared.
    pub stats: Option<DiffStats>,
}

/// Verdict over every compared candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum OverallVerdict {
    /// Fewer than two candidates were compared.
    Insufficient,
    /// Every compared candidate matches the baseline.
    AllIdentical { sources: Vec<String> },
    /// At least one compared candidate differs from the baseline.
    Gap {
        identical: Vec<String>,
        different: Vec<String>,
    },
}

impl OverallVerdict {
    /// Derive the verdict from per-candidate reports.
    pub fn from_reports(reports: &[SourceReport]) -> Self {
        let compared: Vec<&SourceReport> = reports.iter().filter(|r| r.status.is_compared()).collect();
        if compared.len() < 2 {
            return Self::Insufficient;
        }

        let (identical, different): (Vec<&SourceReport>, Vec<&SourceReport>) = compared
            .into_iter()
            .partition(|r| r.status == SourceStatus::Identical);
        if different.is_empty() {
            Self::AllIdentical {
                sources: names(&identical),
            }
        } else {
            Self::Gap {
                identical: names(&identical),
                different: names(&different),
            }
        }
    }
}

fn names(reports: &[&SourceReport]) -> Vec<String> {
    reports.iter().map(|r| r.name.clone()).collect()
}

/// Result of comparing a whole source set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub baseline: String,
    /// `false` when the baseline is blank and nothing was compared.
    pub active: bool,
    pub sources: Vec<SourceReport>,
    pub overall: OverallVerdict,
}

impl ComparisonReport {
    pub fn source(&self, name: &str) -> Option<&SourceReport> {
        self.sources.iter().find(|r| r.name == name)
    }
}
