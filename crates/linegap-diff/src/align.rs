//! Alignment walker: the two-cursor scan that classifies lines.
//!
//! The walker advances a baseline cursor `i` and a candidate cursor `j`.
//! Equal lines (after normalization) are unchanged. On a mismatch it probes
//! a bounded window ahead on both sides to find where the texts line up
//! again, and falls back to edit-distance similarity to decide between a
//! modification and a removal.
//!
//! Every step advances at least one cursor, so a comparison takes at most
//! `len(baseline) + len(candidate)` steps.

use tracing::{debug, trace};

use crate::compare::{lines_equal, similarity};
use crate::config::DiffConfig;
use crate::error::DiffResult;
use crate::normalize::{is_blank, split_lines};
use crate::record::{DiffRecord, LineDiff};
use crate::stats::diff_stats;

/// Outcome of resynchronizing after a mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verdict {
    /// Drop the baseline line; advance `i` only.
    Removed,
    /// Take the candidate line as new; advance `j` only.
    Added,
    /// Pair both lines as a rewrite; advance both.
    Modified,
    /// Both lines are blank; advance both.
    Unchanged,
}

/// Line differ with a validated policy.
///
/// A differ holds no per-call state and can be shared across threads.
#[derive(Clone, Debug)]
pub struct LineDiffer {
    config: DiffConfig,
}

impl Default for LineDiffer {
    fn default() -> Self {
        Self {
            config: DiffConfig::default(),
        }
    }
}

impl LineDiffer {
    /// Create a differ, rejecting invalid policy values.
    pub fn new(config: DiffConfig) -> DiffResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Split both texts into lines and classify them.
    pub fn diff(&self, baseline: &str, candidate: &str) -> Vec<DiffRecord> {
        self.diff_lines(&split_lines(baseline), &split_lines(candidate))
    }

    /// Like [`LineDiffer::diff`], bundling the records with stats and line counts.
    pub fn compare(&self, baseline: &str, candidate: &str) -> LineDiff {
        let baseline = split_lines(baseline);
        let candidate = split_lines(candidate);
        let records = self.diff_lines(&baseline, &candidate);
        let stats = diff_stats(&records);

        LineDiff {
            records,
            stats,
            baseline_lines: baseline.len(),
            candidate_lines: candidate.len(),
        }
    }

    /// Classify already-split lines.
    pub fn diff_lines(&self, baseline: &[&str], candidate: &[&str]) -> Vec<DiffRecord> {
        let mut records = Vec::with_capacity(baseline.len().max(candidate.len()));
        let (mut i, mut j) = (0usize, 0usize);

        while i < baseline.len() || j < candidate.len() {
            if i >= baseline.len() {
                push_added(&mut records, candidate, j);
                j += 1;
            } else if j >= candidate.len() {
                push_removed(&mut records, baseline, i);
                i += 1;
            } else if lines_equal(baseline[i], candidate[j]) {
                push_unchanged(&mut records, baseline, i, j);
                i += 1;
                j += 1;
            } else {
                match self.find_best_match(baseline, candidate, i, j) {
                    Verdict::Removed => {
                        push_removed(&mut records, baseline, i);
                        i += 1;
                    }
                    Verdict::Added => {
                        push_added(&mut records, candidate, j);
                        j += 1;
                    }
                    Verdict::Modified => {
                        if !is_blank(baseline[i]) || !is_blank(candidate[j]) {
                            records.push(DiffRecord::Modified {
                                baseline_line: i + 1,
                                candidate_line: j + 1,
                                content: candidate[j].to_string(),
                                original_content: baseline[i].to_string(),
                            });
                        }
                        i += 1;
                        j += 1;
                    }
                    Verdict::Unchanged => {
                        push_unchanged(&mut records, baseline, i, j);
                        i += 1;
                        j += 1;
                    }
                }
            }
        }

        debug!(
            baseline_lines = baseline.len(),
            candidate_lines = candidate.len(),
            records = records.len(),
            changes = records.iter().filter(|r| r.is_change()).count(),
            "line diff computed"
        );
        records
    }

    /// Decide how to resolve a mismatch at `(i, j)`.
    ///
    /// For each step `k` in the window, a baseline line `k` ahead matching the
    /// current candidate line wins over a candidate line `k` ahead matching
    /// the current baseline line. The first hit by increasing `k` decides.
    fn find_best_match(&self, baseline: &[&str], candidate: &[&str], i: usize, j: usize) -> Verdict {
        let window = self
            .config
            .lookahead
            .min(baseline.len() - i)
            .min(candidate.len() - j);

        for k in 1..=window {
            if i + k < baseline.len() && lines_equal(baseline[i + k], candidate[j]) {
                trace!(i, j, k, "baseline resyncs ahead; removing");
                return Verdict::Removed;
            }
            if j + k < candidate.len() && lines_equal(baseline[i], candidate[j + k]) {
                trace!(i, j, k, "candidate resyncs ahead; adding");
                return Verdict::Added;
            }
        }

        if is_blank(baseline[i]) && is_blank(candidate[j]) {
            return Verdict::Unchanged;
        }

        let score = similarity(baseline[i], candidate[j]);
        let verdict = if score > self.config.similarity_threshold {
            Verdict::Modified
        } else {
            Verdict::Removed
        };
        trace!(i, j, score, ?verdict, "no resync within window");
        verdict
    }
}

fn push_added(records: &mut Vec<DiffRecord>, candidate: &[&str], j: usize) {
    if !is_blank(candidate[j]) {
        records.push(DiffRecord::Added {
            candidate_line: j + 1,
            content: candidate[j].to_string(),
        });
    }
}

fn push_removed(records: &mut Vec<DiffRecord>, baseline: &[&str], i: usize) {
    if !is_blank(baseline[i]) {
        records.push(DiffRecord::Removed {
            baseline_line: i + 1,
            content: baseline[i].to_string(),
        });
    }
}

fn push_unchanged(records: &mut Vec<DiffRecord>, baseline: &[&str], i: usize, j: usize) {
    records.push(DiffRecord::Unchanged {
        baseline_line: i + 1,
        candidate_line: j + 1,
        content: baseline[i].to_string(),
    });
}

/// Diff two texts with the default policy.
pub fn diff(baseline: &str, candidate: &str) -> Vec<DiffRecord> {
    LineDiffer::default().diff(baseline, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DiffKind;

    fn unchanged(b: usize, c: usize, content: &str) -> DiffRecord {
        DiffRecord::Unchanged {
            baseline_line: b,
            candidate_line: c,
            content: content.into(),
        }
    }

    fn added(c: usize, content: &str) -> DiffRecord {
        DiffRecord::Added {
            candidate_line: c,
            content: content.into(),
        }
    }

    fn removed(b: usize, content: &str) -> DiffRecord {
        DiffRecord::Removed {
            baseline_line: b,
            content: content.into(),
        }
    }

    fn kinds(records: &[DiffRecord]) -> Vec<DiffKind> {
        records.iter().map(DiffRecord::kind).collect()
    }

    #[test]
    fn identical_texts_are_unchanged() {
        let records = diff("a\nb\nc", "a\nb\nc");
        assert_eq!(
            records,
            vec![unchanged(1, 1, "a"), unchanged(2, 2, "b"), unchanged(3, 3, "c")]
        );
        assert!(diff_stats(&records).identical);
    }

    #[test]
    fn dissimilar_line_becomes_remove_then_add() {
        let records = diff("a\nb\nc", "a\nx\nc");
        assert_eq!(
            records,
            vec![
                unchanged(1, 1, "a"),
                removed(2, "b"),
                added(2, "x"),
                unchanged(3, 3, "c"),
            ]
        );
        let stats = diff_stats(&records);
        assert_eq!((stats.added, stats.removed, stats.modified, stats.unchanged), (1, 1, 0, 2));
        assert!(!stats.identical);
    }

    #[test]
    fn interior_whitespace_is_ignored() {
        let records = diff("hello world", "hello   world");
        assert_eq!(records, vec![unchanged(1, 1, "hello world")]);
        assert!(diff_stats(&records).identical);
    }

    #[test]
    fn trailing_line_is_added() {
        let records = diff("foo\nbar", "foo\nbar\nbaz");
        assert_eq!(
            records,
            vec![unchanged(1, 1, "foo"), unchanged(2, 2, "bar"), added(3, "baz")]
        );
        assert_eq!(diff_stats(&records).added, 1);
    }

    #[test]
    fn similar_line_is_modified() {
        let records = diff("alpha\nbeta", "alpha\nbetaa");
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[1],
            DiffRecord::Modified {
                baseline_line: 2,
                candidate_line: 2,
                content: "betaa".into(),
                original_content: "beta".into(),
            }
        );
        assert_eq!(diff_stats(&records).modified, 1);
    }

    #[test]
    fn unchanged_content_is_the_original_baseline_text() {
        let records = diff("  indented   line", "indented line");
        assert_eq!(records, vec![unchanged(1, 1, "  indented   line")]);
    }

    #[test]
    fn baseline_ahead_match_wins_tie() {
        // Both "b == candidate[0]" and "a == candidate[1]" hold at k = 1.
        let records = diff("a\nb", "b\na");
        assert_eq!(records, vec![removed(1, "a"), unchanged(2, 1, "b"), added(2, "a")]);
    }

    #[test]
    fn resyncs_after_inserted_block() {
        let records = diff("a\nb\nc\nd", "a\nx\ny\nb\nc\nd");
        assert_eq!(
            records,
            vec![
                unchanged(1, 1, "a"),
                added(2, "x"),
                added(3, "y"),
                unchanged(2, 4, "b"),
                unchanged(3, 5, "c"),
                unchanged(4, 6, "d"),
            ]
        );
    }

    #[test]
    fn resyncs_after_removed_block() {
        let records = diff("a\nx\ny\nb", "a\nb");
        assert_eq!(
            records,
            vec![unchanged(1, 1, "a"), removed(2, "x"), removed(3, "y"), unchanged(4, 2, "b")]
        );
    }

    #[test]
    fn window_is_bounded_by_remaining_lines() {
        let records = diff("a\nb", "a\n1\n2\n3\n4\nb");
        assert_eq!(
            kinds(&records),
            vec![
                DiffKind::Unchanged,
                DiffKind::Removed,
                DiffKind::Added,
                DiffKind::Added,
                DiffKind::Added,
                DiffKind::Added,
                DiffKind::Added,
            ]
        );
        let stats = diff_stats(&records);
        assert_eq!((stats.added, stats.removed), (5, 1));
    }

    #[test]
    fn zero_lookahead_disables_resync() {
        let differ = LineDiffer::new(DiffConfig {
            lookahead: 0,
            ..Default::default()
        })
        .unwrap();
        let records = differ.diff("a\nb", "x\na\nb");
        assert_eq!(
            records,
            vec![removed(1, "a"), removed(2, "b"), added(1, "x"), added(2, "a"), added(3, "b")]
        );

        let records = diff("a\nb", "x\na\nb");
        assert_eq!(records, vec![added(1, "x"), unchanged(1, 2, "a"), unchanged(2, 3, "b")]);
    }

    #[test]
    fn threshold_is_configurable() {
        let strict = LineDiffer::new(DiffConfig {
            similarity_threshold: 0.9,
            ..Default::default()
        })
        .unwrap();
        let records = strict.diff("beta", "betaa");
        assert_eq!(records, vec![removed(1, "beta"), added(1, "betaa")]);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        // similarity("ab", "ax") is exactly 0.5
        let differ = LineDiffer::new(DiffConfig {
            similarity_threshold: 0.5,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(kinds(&differ.diff("ab", "ax")), vec![DiffKind::Removed, DiffKind::Added]);
        assert_eq!(kinds(&diff("ab", "ax")), vec![DiffKind::Modified]);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = LineDiffer::new(DiffConfig {
            similarity_threshold: 2.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn both_empty_texts() {
        let records = diff("", "");
        assert_eq!(records, vec![unchanged(1, 1, "")]);
        assert!(diff_stats(&records).identical);
    }

    #[test]
    fn empty_baseline_adds_everything() {
        let records = diff("", "a\nb");
        assert_eq!(records, vec![added(1, "a"), added(2, "b")]);
        assert_eq!(diff_stats(&records).added, 2);
    }

    #[test]
    fn empty_candidate_removes_everything() {
        let records = diff("a\nb", "");
        assert_eq!(records, vec![removed(1, "a"), removed(2, "b")]);
        assert_eq!(diff_stats(&records).removed, 2);
    }

    #[test]
    fn disjoint_texts_terminate() {
        let records = diff("aaa\nbbb\nccc", "xyz\nuvw");
        let stats = diff_stats(&records);
        assert_eq!(stats.removed, 3);
        assert_eq!(stats.added, 2);
        assert_eq!(stats.unchanged, 0);
    }

    #[test]
    fn blank_lines_are_not_emitted_as_changes() {
        let records = diff("a\n\nb", "a\nb");
        assert_eq!(records, vec![unchanged(1, 1, "a"), unchanged(3, 2, "b")]);
        assert!(diff_stats(&records).identical);

        let records = diff("a\nb", "a\n   \nb\n");
        assert_eq!(records, vec![unchanged(1, 1, "a"), unchanged(2, 3, "b")]);
        assert!(diff_stats(&records).identical);
    }

    #[test]
    fn crlf_matches_lf() {
        let records = diff("a\r\nb\r\n", "a\nb\n");
        assert!(diff_stats(&records).identical);
        assert_eq!(records[0].content(), "a");
    }

    #[test]
    fn compare_reports_line_counts() {
        let result = LineDiffer::default().compare("a\nb\nc", "a\nc");
        assert_eq!(result.baseline_lines, 3);
        assert_eq!(result.candidate_lines, 2);
        assert_eq!(result.stats.removed, 1);
        assert_eq!(result.changes().count(), 1);
        assert!(!result.is_identical());
    }

    #[test]
    fn differ_is_shareable_across_threads() {
        let differ = LineDiffer::default();
        let candidates = ["a\nb", "a\nx", "a"];
        let identical: Vec<bool> = std::thread::scope(|s| {
            let handles: Vec<_> = candidates
                .iter()
                .map(|c| {
                    let differ = &differ;
                    s.spawn(move || diff_stats(&differ.diff("a\nb", c)).identical)
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(identical, vec![true, false, false]);
    }
}
