//! Units known to have filed their compliance paperwork.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Reference set of unit numbers with submitted documentation.
///
/// Membership is an exact string match against `unit_no`; no trimming or
/// case folding is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SubmissionRegistry {
    units: HashSet<String>,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a unit has submitted.
    pub fn insert(&mut self, unit_no: impl Into<String>) -> bool {
        self.units.insert(unit_no.into())
    }

    pub fn contains(&self, unit_no: &str) -> bool {
        self.units.contains(unit_no)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for SubmissionRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            units: iter.into_iter().map(Into::into).collect(),
        }
    }
}
