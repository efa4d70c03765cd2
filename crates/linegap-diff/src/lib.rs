//! Line diff engine for linegap.
//!
//! Compares a baseline text against a candidate text line by line and
//! classifies every line as unchanged, added, removed, or modified. Lines are
//! compared after whitespace normalization, and a bounded lookahead is used to
//! resynchronize after a mismatch.
//!
//! # Key Types
//!
//! - [`DiffRecord`] / [`DiffKind`] -- One classified line of the result
//! - [`DiffStats`] -- Aggregate counts over a record sequence
//! - [`LineDiff`] -- Records, stats and line counts for one comparison
//! - [`LineDiffer`] / [`DiffConfig`] -- The alignment walker and its policy

pub mod align;
pub mod compare;
pub mod config;
pub mod error;
pub mod normalize;
pub mod record;
pub mod stats;

pub use align::{diff, LineDiffer};
pub use compare::{edit_distance, lines_equal, similarity};
pub use config::{DiffConfig, MAX_LOOKAHEAD};
pub use error::{DiffError, DiffResult};
pub use normalize::{is_blank, normalize, split_lines};
pub use record::{DiffKind, DiffRecord, LineDiff};
pub use stats::{diff_stats, DiffStats};
