//! Table search and status filter.

use serde::{Deserialize, Serialize};

use crate::models::{ComplianceStatus, EnrichedPetRecord};

/// Search text plus an optional status restriction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecordFilter {
    /// Case-insensitive substring over unit, pet name and owner name
    pub search: String,
    /// `None` shows every status
    pub status: Option<ComplianceStatus>,
}

impl RecordFilter {
    pub fn new(search: impl Into<String>, status: Option<ComplianceStatus>) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches(&self, enriched: &EnrichedPetRecord) -> bool {
        if let Some(status) = self.status {
            if enriched.status != status {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let record = &enriched.record;
        [&record.unit_no, &record.pet_name, &record.owner_name]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Matching records, in input order.
    pub fn apply(&self, records: &[EnrichedPetRecord]) -> Vec<EnrichedPetRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
