//! Caller-held navigation over the changes of a record sequence.

use linegap_diff::DiffRecord;

/// Steps forward and backward through the change records of one diff,
/// wrapping at both ends.
///
/// The cursor stores indices into the record slice it was built from; it
/// must be rebuilt whenever that sequence is recomputed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffCursor {
    changes: Vec<usize>,
    position: Option<usize>,
}

impl DiffCursor {
    pub fn new(records: &[DiffRecord]) -> Self {
        Self {
            changes: records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_change())
                .map(|(idx, _)| idx)
                .collect(),
            position: None,
        }
    }

    /// Number of change records.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Position within the change list, `None` before the first move.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Record index of the current change.
    pub fn current(&self) -> Option<usize> {
        self.position.map(|p| self.changes[p])
    }

    /// Move to the next change, wrapping to the first. Returns its record index.
    pub fn next(&mut self) -> Option<usize> {
        if self.changes.is_empty() {
            return None;
        }
        let next = match self.position {
            Some(p) => (p + 1) % self.changes.len(),
            None => 0,
        };
        self.position = Some(next);
        self.current()
    }

    /// Move to the previous change, wrapping to the last. Returns its record index.
    pub fn previous(&mut self) -> Option<usize> {
        if self.changes.is_empty() {
            return None;
        }
        let previous = match self.position {
            Some(p) if p > 0 => p - 1,
            _ => self.changes.len() - 1,
        };
        self.position = Some(previous);
        self.current()
    }

    pub fn reset(&mut self) {
        self.position = None;
    }

    /// `"difference k/n"` for the current position.
    pub fn hint(&self) -> Option<String> {
        self.position
            .map(|p| format!("difference {}/{}", p + 1, self.changes.len()))
    }
}

/// The line to scroll to for a record: baseline side first.
pub fn anchor_line(record: &DiffRecord) -> usize {
    record
        .baseline_line()
        .or_else(|| record.candidate_line())
        .unwrap_or_default()
}
