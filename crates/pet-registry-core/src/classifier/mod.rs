//! Compliance classifier.
//!
//! Maps raw records to enriched records by running the rule cascade. Pure:
//! the as-of date is always supplied by the caller, never read from the
//! clock.

mod rules;
mod vaccine;

pub use rules::*;
pub use vaccine::*;

use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::models::{ComplianceStatus, EnrichedPetRecord, RawPetRecord, SubmissionRegistry};

/// Status assigned when no rule matches.
pub const FALLBACK_STATUS: ComplianceStatus = ComplianceStatus::Compliant;

/// Rule cascade bound to a reference date.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
    as_of: NaiveDate,
}

impl Classifier {
    /// Create a classifier with the standard rules.
    pub fn new(as_of: NaiveDate) -> Self {
        Self::with_rules(as_of, default_rules())
    }

    /// Create a classifier with a custom cascade.
    pub fn with_rules(as_of: NaiveDate, rules: Vec<Rule>) -> Self {
        Self { rules, as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a single record.
    pub fn classify(
        &self,
        record: &RawPetRecord,
        registry: &SubmissionRegistry,
    ) -> EnrichedPetRecord {
        let is_submitted = registry.contains(&record.unit_no);
        EnrichedPetRecord {
            record: record.clone(),
            status: evaluate(&self.rules, record, is_submitted, self.as_of),
            is_submitted,
        }
    }

    /// Classify every record, preserving input order.
    pub fn classify_all(
        &self,
        records: &[RawPetRecord],
        registry: &SubmissionRegistry,
    ) -> Vec<EnrichedPetRecord> {
        records
            .iter()
            .map(|record| self.classify(record, registry))
            .collect()
    }
}

/// Classify a record against the standard rules.
pub fn classify(
    record: &RawPetRecord,
    registry: &SubmissionRegistry,
    as_of: NaiveDate,
) -> EnrichedPetRecord {
    let is_submitted = registry.contains(&record.unit_no);
    EnrichedPetRecord {
        record: record.clone(),
        status: evaluate(standard_rules(), record, is_submitted, as_of),
        is_submitted,
    }
}

fn standard_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(default_rules)
}

fn evaluate(
    rules: &[Rule],
    record: &RawPetRecord,
    is_submitted: bool,
    as_of: NaiveDate,
) -> ComplianceStatus {
    let input = RuleInput::new(record, is_submitted, as_of);
    rules
        .iter()
        .find(|rule| rule.when.matches(&input))
        .map(|rule| rule.status)
        .unwrap_or(FALLBACK_STATUS)
}
