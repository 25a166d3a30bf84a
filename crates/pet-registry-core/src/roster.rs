//! The authoritative in-memory record set.
//!
//! Owns the raw records for a session. Every mutation replaces whole
//! records, so a classification pass never sees a half-applied edit.

use std::collections::HashSet;

use thiserror::Error;

use crate::classifier::Classifier;
use crate::models::{EnrichedPetRecord, RawPetRecord, SubmissionRegistry};

/// Roster errors.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Record has no id")]
    MissingId,
}

pub type RosterResult<T> = Result<T, RosterError>;

/// What an upsert did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    Replaced,
}

/// Ordered, id-unique list of raw pet records.
#[derive(Debug, Clone, Default)]
pub struct PetRoster {
    records: Vec<RawPetRecord>,
}

impl PetRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from records, rejecting duplicate or empty ids.
    pub fn from_records(records: Vec<RawPetRecord>) -> RosterResult<Self> {
        validate_ids(&records)?;
        Ok(Self { records })
    }

    /// Load seed data: a JSON array of records.
    pub fn from_seed_json(json: &str) -> RosterResult<Self> {
        let records: Vec<RawPetRecord> = serde_json::from_str(json)?;
        let roster = Self::from_records(records)?;
        tracing::info!(records = roster.len(), "loaded seed records");
        Ok(roster)
    }

    pub fn records(&self) -> &[RawPetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RawPetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace the record with the same id, or append it.
    pub fn upsert(&mut self, record: RawPetRecord) -> RosterResult<Upsert> {
        if record.id.is_empty() {
            return Err(RosterError::MissingId);
        }

        let outcome = match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                Upsert::Replaced
            }
            None => {
                self.records.push(record);
                Upsert::Inserted
            }
        };
        tracing::debug!(?outcome, total = self.records.len(), "roster upsert");
        Ok(outcome)
    }

    /// Append imported records in order. Returns how many were added.
    ///
    /// The batch is checked as a whole first, so a rejected batch leaves
    /// the roster untouched.
    pub fn append(&mut self, records: Vec<RawPetRecord>) -> RosterResult<usize> {
        let mut seen: HashSet<&str> = self.records.iter().map(|r| r.id.as_str()).collect();
        for record in &records {
            if record.id.is_empty() {
                return Err(RosterError::MissingId);
            }
            if !seen.insert(record.id.as_str()) {
                return Err(RosterError::DuplicateId(record.id.clone()));
            }
        }

        let added = records.len();
        self.records.extend(records);
        tracing::debug!(added, total = self.records.len(), "roster append");
        Ok(added)
    }

    /// Swap in a whole new record list.
    pub fn replace_all(&mut self, records: Vec<RawPetRecord>) -> RosterResult<()> {
        validate_ids(&records)?;
        self.records = records;
        Ok(())
    }

    /// Classify the full roster, in roster order.
    pub fn classify(
        &self,
        classifier: &Classifier,
        registry: &SubmissionRegistry,
    ) -> Vec<EnrichedPetRecord> {
        classifier.classify_all(&self.records, registry)
    }
}

fn validate_ids(records: &[RawPetRecord]) -> RosterResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.id.is_empty() {
            return Err(RosterError::MissingId);
        }
        if !seen.insert(record.id.as_str()) {
            return Err(RosterError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
