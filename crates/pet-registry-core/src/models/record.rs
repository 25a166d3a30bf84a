//! Pet registry records.

use serde::{Deserialize, Serialize};

use super::status::ComplianceStatus;

/// Placeholder for an unknown or unrecorded text value.
pub const MISSING: &str = "-";

/// Pet name used while the animal's identity is unconfirmed.
pub const UNKNOWN_PET_NAME: &str = "Unknown";

/// Vaccine status bookkeeping value when nothing has been recorded.
pub const NO_VACCINE_RECORD: &str = "NO RECORD";

/// Whether the household living in the unit owns it or rents it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ResidentType {
    #[default]
    Owner,
    Tenant,
    #[serde(rename = "-", alias = "Unset")]
    Unset,
}

impl ResidentType {
    /// Lenient parse; anything unrecognised is `Unset`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "owner" => ResidentType::Owner,
            "tenant" => ResidentType::Tenant,
            _ => ResidentType::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidentType::Owner => "Owner",
            ResidentType::Tenant => "Tenant",
            ResidentType::Unset => MISSING,
        }
    }
}

/// Sex of the animal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "M", alias = "Male")]
    Male,
    #[serde(rename = "F", alias = "Female")]
    Female,
    #[default]
    #[serde(rename = "-", alias = "Unset")]
    Unset,
}

impl Sex {
    /// Lenient parse accepting `M`/`F` and the full words.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "m" | "male" => Sex::Male,
            "f" | "female" => Sex::Female,
            _ => Sex::Unset,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Unset => MISSING,
        }
    }
}

/// One pet's registry entry as maintained by the juristic office.
///
/// `remark` is free text and is the main input to classification. The
/// bookkeeping fields (`dob`, `vaccine_last_date`, `vaccine_status`,
/// `documents_complete`) are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RawPetRecord {
    /// Unique within the roster; never reassigned
    pub id: String,
    pub unit_no: String,
    pub tower: String,
    pub floor: String,
    /// `-` when unknown
    pub owner_name: String,
    pub resident_type: ResidentType,
    /// `Unknown` until identity is confirmed
    pub pet_name: String,
    /// Open vocabulary: Dog, Cat, Bird, Rabbit, Other, Unknown, ...
    pub pet_type: String,
    pub breed: String,
    pub sex: Sex,
    pub age_years: f64,
    pub weight_kg: f64,
    /// ISO date, or `-` / empty / `N/A` when there is no record
    pub vaccine_expire: String,
    pub remark: String,
    pub dob: String,
    pub vaccine_last_date: String,
    pub vaccine_status: String,
    pub documents_complete: bool,
}

impl Default for RawPetRecord {
    /// A record with every field at its import default and an empty id.
    fn default() -> Self {
        Self {
            id: String::new(),
            unit_no: MISSING.to_string(),
            tower: MISSING.to_string(),
            floor: MISSING.to_string(),
            owner_name: MISSING.to_string(),
            resident_type: ResidentType::Owner,
            pet_name: UNKNOWN_PET_NAME.to_string(),
            pet_type: UNKNOWN_PET_NAME.to_string(),
            breed: MISSING.to_string(),
            sex: Sex::Unset,
            age_years: 0.0,
            weight_kg: 0.0,
            vaccine_expire: MISSING.to_string(),
            remark: String::new(),
            dob: MISSING.to_string(),
            vaccine_last_date: MISSING.to_string(),
            vaccine_status: NO_VACCINE_RECORD.to_string(),
            documents_complete: true,
        }
    }
}

impl RawPetRecord {
    /// Create a record for a unit with a freshly minted id.
    pub fn new(unit_no: String, pet_name: String) -> Self {
        let mut record = Self {
            id: new_record_id(),
            unit_no,
            pet_name,
            ..Self::default()
        };
        record.fill_blanks();
        record
    }

    /// Replace blank text fields with their placeholders.
    ///
    /// Used on add/edit form output, where untouched inputs arrive empty.
    /// `remark` and `vaccine_expire` may legitimately stay empty.
    pub fn fill_blanks(&mut self) {
        for field in [
            &mut self.unit_no,
            &mut self.tower,
            &mut self.floor,
            &mut self.owner_name,
            &mut self.breed,
            &mut self.dob,
            &mut self.vaccine_last_date,
        ] {
            if field.trim().is_empty() {
                *field = MISSING.to_string();
            }
        }
        if self.pet_name.trim().is_empty() {
            self.pet_name = UNKNOWN_PET_NAME.to_string();
        }
        if self.pet_type.trim().is_empty() {
            self.pet_type = "Other".to_string();
        }
        if self.vaccine_status.trim().is_empty() {
            self.vaccine_status = NO_VACCINE_RECORD.to_string();
        }
        self.age_years = non_negative(self.age_years);
        self.weight_kg = non_negative(self.weight_kg);
    }

    /// Whether the pet's identity is still unconfirmed.
    pub fn is_unidentified(&self) -> bool {
        self.pet_name == UNKNOWN_PET_NAME
    }
}

/// Mint a new record id.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Clamp negative, NaN and infinite values to zero.
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// A record together with its derived compliance fields.
///
/// Recomputed on every pass; never written back to the raw record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPetRecord {
    #[serde(flatten)]
    pub record: RawPetRecord,
    pub status: ComplianceStatus,
    /// Whether the unit appears in the submission registry
    pub is_submitted: bool,
}

impl EnrichedPetRecord {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}
