use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Upper bound accepted for [`DiffConfig::lookahead`].
pub const MAX_LOOKAHEAD: usize = 64;

/// Policy constants for the alignment walker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// A mismatched pair whose similarity is strictly above this value is a
    /// modification; otherwise the baseline line is treated as removed.
    pub similarity_threshold: f64,
    /// How many lines ahead on each side the walker probes to resynchronize
    /// after a mismatch. Zero disables resynchronization.
    pub lookahead: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.3,
            lookahead: 3,
        }
    }
}

impl DiffConfig {
    /// Check that the policy values are usable.
    pub fn validate(&self) -> DiffResult<()> {
        let threshold = self.similarity_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(DiffError::InvalidThreshold(threshold));
        }
        if self.lookahead > MAX_LOOKAHEAD {
            return Err(DiffError::LookaheadTooLarge {
                requested: self.lookahead,
                max: MAX_LOOKAHEAD,
            });
        }
        Ok(())
    }
}
