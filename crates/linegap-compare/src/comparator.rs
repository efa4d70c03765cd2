use linegap_diff::{DiffConfig, LineDiff, LineDiffer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CompareError, CompareResult};
use crate::source::SourceSet;
use crate::status::{ComparisonReport, OverallVerdict, SourceReport, SourceStatus};

/// Line-by-line comparison of one candidate, for detailed display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedDiff {
    /// Name of the candidate the baseline was compared with.
    pub source: String,
    pub diff: LineDiff,
}

/// Runs the line differ over every candidate of a [`SourceSet`].
#[derive(Clone, Debug, Default)]
pub struct Comparator {
    differ: LineDiffer,
}

impl Comparator {
    pub fn new(config: DiffConfig) -> CompareResult<Self> {
        Ok(Self {
            differ: LineDiffer::new(config)?,
        })
    }

    pub fn differ(&self) -> &LineDiffer {
        &self.differ
    }

    /// Compare every filled candidate against the baseline.
    ///
    /// A blank baseline yields an inactive report in which no candidate is
    /// compared.
    pub fn compare(&self, sources: &SourceSet) -> ComparisonReport {
        let baseline = sources.baseline();
        let active = baseline.is_filled();

        let reports: Vec<SourceReport> = sources
            .candidates()
            .iter()
            .map(|candidate| {
                if !active || !candidate.is_filled() {
                    return SourceReport {
                        name: candidate.name.clone(),
                        status: SourceStatus::Empty,
                        stats: None,
                    };
                }
                let diff = self.differ.compare(&baseline.text, &candidate.text);
                SourceReport {
                    name: candidate.name.clone(),
                    status: SourceStatus::from_stats(&diff.stats),
                    stats: Some(diff.stats),
                }
            })
            .collect();

        let overall = OverallVerdict::from_reports(&reports);
        debug!(
            baseline = %baseline.name,
            active,
            candidates = reports.len(),
            compared = reports.iter().filter(|r| r.status.is_compared()).count(),
            "comparison report built"
        );

        ComparisonReport {
            baseline: baseline.name.clone(),
            active,
            sources: reports,
            overall,
        }
    }

    /// Line-level diff for the focused candidate, or the first filled one.
    ///
    /// A focused candidate that is blank falls back to the first filled
    /// candidate. Returns `None` when the baseline is blank or no candidate is
    /// filled.
    pub fn detail(&self, sources: &SourceSet, focus: Option<&str>) -> CompareResult<Option<DetailedDiff>> {
        let focused = match focus {
            Some(name) => Some(
                sources
                    .get(name)
                    .ok_or_else(|| CompareError::UnknownSource(name.to_string()))?,
            ),
            None => None,
        };

        if !sources.baseline().is_filled() {
            return Ok(None);
        }

        let target = focused
            .filter(|s| s.is_filled())
            .or_else(|| sources.filled().next());

        Ok(target.map(|source| DetailedDiff {
            source: source.name.clone(),
            diff: self.differ.compare(&sources.baseline().text, &source.text),
        }))
    }
}
