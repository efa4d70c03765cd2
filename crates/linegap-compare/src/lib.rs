//! Multi-source comparison for linegap.
//!
//! Compares several named candidate texts against one shared baseline,
//! reports a status per candidate and an overall verdict, and provides the
//! caller-held navigation cursor and text export used by front ends.
//!
//! # Key Types
//!
//! - [`SourceSet`] / [`Source`] -- The baseline plus ordered candidates
//! - [`Comparator`] -- Runs the line diff engine over a source set
//! - [`ComparisonReport`] / [`SourceStatus`] / [`OverallVerdict`] -- Results
//! - [`DiffCursor`] -- Next/previous stepping over change records

pub mod comparator;
pub mod cursor;
pub mod error;
pub mod export;
pub mod source;
pub mod status;

pub use comparator::{Comparator, DetailedDiff};
pub use cursor::{anchor_line, DiffCursor};
pub use error::{CompareError, CompareResult};
pub use export::{default_export_name, export_to, render_json, render_line, render_text, summary_label};
pub use source::{Source, SourceSet};
pub use status::{ComparisonReport, OverallVerdict, SourceReport, SourceStatus};
