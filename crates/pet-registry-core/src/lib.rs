//! Pet Registry Core Library
//!
//! Compliance tracking for a residential property's pet registry.
//!
//! # Architecture
//!
//! ```text
//!   Seed JSON ──┐        Add/Edit form ──┐        CSV file ──► codec::import_csv
//!               │                        │                          │
//!               ▼                        ▼                          ▼
//!        ┌────────────────────────────────────────────────────────────────┐
//!        │                PetRoster (authoritative records)                │
//!        └───────────────────────────────┬────────────────────────────────┘
//!                                        │ full recompute on every change
//!                                        ▼
//!                         Classifier (rule cascade, as-of date)
//!                                        │
//!                                        ▼
//!                              EnrichedPetRecord list
//!                                        │
//!                  ┌─────────────────────┼─────────────────────┐
//!                  ▼                     ▼                     ▼
//!          DashboardSummary        RecordFilter ──────►  codec::to_csv
//! ```
//!
//! # Core Principle
//!
//! **Classification is pure.** The reference date and the submission
//! registry are always passed in; nothing reads the clock or does I/O.
//!
//! # Modules
//!
//! - [`models`]: Domain types (RawPetRecord, ComplianceStatus, SubmissionRegistry)
//! - [`classifier`]: Ordered compliance rules and vaccine expiry handling
//! - [`codec`]: CSV import and export
//! - [`roster`]: The in-memory record set
//! - [`report`]: Table filtering and dashboard aggregates
//! - [`config`]: JSON engine configuration

pub mod classifier;
pub mod codec;
pub mod config;
pub mod models;
pub mod report;
pub mod roster;

// Re-export commonly used types
pub use classifier::{classify, Classifier, Rule, RuleCondition};
pub use codec::{from_csv, import_csv, to_csv, HeaderSynonyms, ImportOutcome};
pub use config::EngineConfig;
pub use models::{
    ComplianceStatus, EnrichedPetRecord, RawPetRecord, ResidentType, Sex, SubmissionRegistry,
};
pub use report::{DashboardSummary, RecordFilter};
pub use roster::PetRoster;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex, MutexGuard};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum PetRegistryError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Roster error: {0}")]
    RosterError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("State error: {0}")]
    StateError(String),
}

impl From<config::ConfigError> for PetRegistryError {
    fn from(e: config::ConfigError) -> Self {
        PetRegistryError::ConfigError(e.to_string())
    }
}

impl From<roster::RosterError> for PetRegistryError {
    fn from(e: roster::RosterError) -> Self {
        PetRegistryError::RosterError(e.to_string())
    }
}

impl From<models::UnknownStatus> for PetRegistryError {
    fn from(e: models::UnknownStatus) -> Self {
        PetRegistryError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PetRegistryError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PetRegistryError::StateError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Start a session from a JSON engine config.
#[uniffi::export]
pub fn open_registry(config_json: String) -> Result<Arc<PetRegistryCore>, PetRegistryError> {
    let config = EngineConfig::from_json_str(&config_json)?;
    Ok(Arc::new(PetRegistryCore::from_config(&config)))
}

// =========================================================================
// Main API Object
// =========================================================================

struct Session {
    roster: PetRoster,
    classifier: Classifier,
    registry: SubmissionRegistry,
    synonyms: HeaderSynonyms,
}

impl Session {
    fn enriched(&self, filter: &RecordFilter) -> Vec<EnrichedPetRecord> {
        filter.apply(&self.roster.classify(&self.classifier, &self.registry))
    }
}

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct PetRegistryCore {
    session: Mutex<Session>,
}

impl PetRegistryCore {
    /// Create an empty session from a parsed config.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            session: Mutex::new(Session {
                roster: PetRoster::new(),
                classifier: config.classifier(),
                registry: config.submission_registry(),
                synonyms: config.header_synonyms(),
            }),
        }
    }

    fn session(&self) -> Result<MutexGuard<'_, Session>, PetRegistryError> {
        Ok(self.session.lock()?)
    }
}

#[uniffi::export]
impl PetRegistryCore {
    // =========================================================================
    // Roster Operations
    // =========================================================================

    /// Replace the roster with seed records. Returns the record count.
    pub fn load_seed_json(&self, json: String) -> Result<u32, PetRegistryError> {
        let seeded = PetRoster::from_seed_json(&json)?;
        let mut session = self.session()?;
        session.roster = seeded;
        Ok(session.roster.len() as u32)
    }

    /// Save add/edit form output. A blank id means a new pet.
    pub fn save_pet(&self, pet: FfiPetRecord) -> Result<FfiPetRecord, PetRegistryError> {
        let mut record: RawPetRecord = pet.into();
        if record.id.trim().is_empty() {
            record.id = models::new_record_id();
        }
        record.fill_blanks();

        let mut session = self.session()?;
        session.roster.upsert(record.clone())?;
        Ok(record.into())
    }

    /// Get a raw record by id.
    pub fn get_pet(&self, id: String) -> Result<Option<FfiPetRecord>, PetRegistryError> {
        let session = self.session()?;
        Ok(session.roster.get(&id).cloned().map(|r| r.into()))
    }

    /// Import CSV text and append the rows to the roster.
    pub fn import_csv(&self, text: String) -> Result<FfiImportSummary, PetRegistryError> {
        let mut session = self.session()?;
        let outcome = codec::import_csv(&text, &session.synonyms);
        let summary = FfiImportSummary {
            imported: outcome.imported() as u32,
            skipped_rows: outcome.skipped_rows as u32,
            unresolved_fields: outcome
                .unresolved_fields
                .iter()
                .map(|f| format!("{:?}", f))
                .collect(),
        };
        session.roster.append(outcome.records)?;
        Ok(summary)
    }

    // =========================================================================
    // View Operations
    // =========================================================================

    /// Classified records matching the filter, in roster order.
    pub fn list_pets(&self, filter: FfiFilter) -> Result<Vec<FfiEnrichedPet>, PetRegistryError> {
        let filter = RecordFilter::try_from(filter)?;
        let session = self.session()?;
        Ok(session
            .enriched(&filter)
            .into_iter()
            .map(|e| e.into())
            .collect())
    }

    /// Export the filtered view as CSV.
    pub fn export_csv(&self, filter: FfiFilter) -> Result<String, PetRegistryError> {
        let filter = RecordFilter::try_from(filter)?;
        let session = self.session()?;
        Ok(to_csv(&session.enriched(&filter)))
    }

    /// Dashboard figures over the whole roster.
    pub fn summary(&self) -> Result<FfiSummary, PetRegistryError> {
        let session = self.session()?;
        let enriched = session.enriched(&RecordFilter::default());
        Ok(DashboardSummary::from_records(&enriched).into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe raw pet record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetRecord {
    pub id: String,
    pub unit_no: String,
    pub tower: String,
    pub floor: String,
    pub owner_name: String,
    pub resident_type: String,
    pub pet_name: String,
    pub pet_type: String,
    pub breed: String,
    pub sex: String,
    pub age_years: f64,
    pub weight_kg: f64,
    pub vaccine_expire: String,
    pub remark: String,
    pub dob: String,
    pub vaccine_last_date: String,
    pub vaccine_status: String,
    pub documents_complete: bool,
}

impl From<RawPetRecord> for FfiPetRecord {
    fn from(record: RawPetRecord) -> Self {
        Self {
            id: record.id,
            unit_no: record.unit_no,
            tower: record.tower,
            floor: record.floor,
            owner_name: record.owner_name,
            resident_type: record.resident_type.as_str().to_string(),
            pet_name: record.pet_name,
            pet_type: record.pet_type,
            breed: record.breed,
            sex: record.sex.as_str().to_string(),
            age_years: record.age_years,
            weight_kg: record.weight_kg,
            vaccine_expire: record.vaccine_expire,
            remark: record.remark,
            dob: record.dob,
            vaccine_last_date: record.vaccine_last_date,
            vaccine_status: record.vaccine_status,
            documents_complete: record.documents_complete,
        }
    }
}

impl From<FfiPetRecord> for RawPetRecord {
    fn from(pet: FfiPetRecord) -> Self {
        RawPetRecord {
            id: pet.id,
            unit_no: pet.unit_no,
            tower: pet.tower,
            floor: pet.floor,
            owner_name: pet.owner_name,
            resident_type: ResidentType::parse(&pet.resident_type),
            pet_name: pet.pet_name,
            pet_type: pet.pet_type,
            breed: pet.breed,
            sex: Sex::parse(&pet.sex),
            age_years: pet.age_years,
            weight_kg: pet.weight_kg,
            vaccine_expire: pet.vaccine_expire,
            remark: pet.remark,
            dob: pet.dob,
            vaccine_last_date: pet.vaccine_last_date,
            vaccine_status: pet.vaccine_status,
            documents_complete: pet.documents_complete,
        }
    }
}

/// FFI-safe classified record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiEnrichedPet {
    pub pet: FfiPetRecord,
    /// Display label
    pub status: String,
    /// Stable variant name
    pub status_code: String,
    pub is_submitted: bool,
}

impl From<EnrichedPetRecord> for FfiEnrichedPet {
    fn from(enriched: EnrichedPetRecord) -> Self {
        Self {
            status: enriched.status.label().to_string(),
            status_code: enriched.status.code().to_string(),
            is_submitted: enriched.is_submitted,
            pet: enriched.record.into(),
        }
    }
}

/// FFI-safe table filter. `status` accepts a label or variant name.
#[derive(Debug, Clone, Default, uniffi::Record)]
pub struct FfiFilter {
    pub search: String,
    pub status: Option<String>,
}

impl TryFrom<FfiFilter> for RecordFilter {
    type Error = PetRegistryError;

    fn try_from(filter: FfiFilter) -> Result<Self, Self::Error> {
        let status = filter
            .status
            .as_deref()
            .map(str::parse::<ComplianceStatus>)
            .transpose()?;
        Ok(RecordFilter::new(filter.search, status))
    }
}

/// FFI-safe import result.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiImportSummary {
    pub imported: u32,
    pub skipped_rows: u32,
    pub unresolved_fields: Vec<String>,
}

/// FFI-safe status count.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStatusCount {
    pub status: String,
    pub count: u32,
    pub percent: u32,
}

/// FFI-safe pet type count.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTypeCount {
    pub pet_type: String,
    pub count: u32,
}

/// FFI-safe dashboard summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSummary {
    pub total: u32,
    pub by_status: Vec<FfiStatusCount>,
    pub by_type: Vec<FfiTypeCount>,
    pub submitted: u32,
    pub not_submitted: u32,
}

impl From<DashboardSummary> for FfiSummary {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            total: summary.total as u32,
            by_status: summary
                .by_status
                .into_iter()
                .map(|s| FfiStatusCount {
                    status: s.status.label().to_string(),
                    count: s.count as u32,
                    percent: s.percent,
                })
                .collect(),
            by_type: summary
                .by_type
                .into_iter()
                .map(|t| FfiTypeCount {
                    pet_type: t.pet_type,
                    count: t.count as u32,
                })
                .collect(),
            submitted: summary.submitted as u32,
            not_submitted: summary.not_submitted as u32,
        }
    }
}
