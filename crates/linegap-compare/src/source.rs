//! Named texts: one baseline and an ordered list of candidates.

use linegap_diff::is_blank;
use serde::{Deserialize, Serialize};

use crate::error::{CompareError, CompareResult};

/// A named text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// A source is filled when its text is not blank.
    pub fn is_filled(&self) -> bool {
        !is_blank(&self.text)
    }
}

/// The baseline and the candidates compared against it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSet {
    baseline: Source,
    candidates: Vec<Source>,
}

impl SourceSet {
    pub fn new(baseline: Source) -> Self {
        Self {
            baseline,
            candidates: Vec::new(),
        }
    }

    /// Append a candidate. Names must be non-empty and unique across the set,
    /// the baseline included.
    pub fn add_candidate(&mut self, name: impl Into<String>, text: impl Into<String>) -> CompareResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CompareError::EmptySourceName);
        }
        if self.baseline.name == name || self.get(&name).is_some() {
            return Err(CompareError::DuplicateSource(name));
        }
        self.candidates.push(Source::new(name, text));
        Ok(())
    }

    /// Replace the text of an existing candidate.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> CompareResult<()> {
        let source = self
            .candidates
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| CompareError::UnknownSource(name.to_string()))?;
        source.text = text.into();
        Ok(())
    }

    pub fn baseline(&self) -> &Source {
        &self.baseline
    }

    /// Candidates in insertion order.
    pub fn candidates(&self) -> &[Source] {
        &self.candidates
    }

    pub fn get(&self, name: &str) -> Option<&Source> {
        self.candidates.iter().find(|s| s.name == name)
    }

    /// Candidates with non-blank text, in insertion order.
    pub fn filled(&self) -> impl Iterator<Item = &Source> {
        self.candidates.iter().filter(|s| s.is_filled())
    }
}
