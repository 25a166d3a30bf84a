//! Logical import fields and the header names that map onto them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A record field that can be populated from an imported column.
///
/// `id` is intentionally absent: imported rows always get fresh ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CsvField {
    UnitNo,
    Tower,
    Floor,
    OwnerName,
    ResidentType,
    PetName,
    PetType,
    Breed,
    Sex,
    AgeYears,
    WeightKg,
    VaccineExpire,
    VaccineLastDate,
    VaccineStatus,
    Dob,
    DocumentsComplete,
    Remark,
}

impl CsvField {
    pub const ALL: [CsvField; 17] = [
        CsvField::UnitNo,
        CsvField::Tower,
        CsvField::Floor,
        CsvField::OwnerName,
        CsvField::ResidentType,
        CsvField::PetName,
        CsvField::PetType,
        CsvField::Breed,
        CsvField::Sex,
        CsvField::AgeYears,
        CsvField::WeightKg,
        CsvField::VaccineExpire,
        CsvField::VaccineLastDate,
        CsvField::VaccineStatus,
        CsvField::Dob,
        CsvField::DocumentsComplete,
        CsvField::Remark,
    ];
}

/// Accepted header spellings per field, all lower-case.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSynonyms {
    synonyms: HashMap<CsvField, Vec<String>>,
}

impl Default for HeaderSynonyms {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderSynonyms {
    /// Create a synonym table with the built-in spellings.
    pub fn new() -> Self {
        Self {
            synonyms: Self::default_synonyms(),
        }
    }

    /// Create a table with no spellings at all.
    pub fn empty() -> Self {
        Self {
            synonyms: HashMap::new(),
        }
    }

    /// Accept another header spelling for a field.
    pub fn add_synonym(&mut self, field: CsvField, header: &str) {
        let header = header.trim().to_lowercase();
        let entry = self.synonyms.entry(field).or_default();
        if !entry.contains(&header) {
            entry.push(header);
        }
    }

    /// Merge extra spellings, e.g. from configuration.
    pub fn extend(&mut self, extra: &HashMap<CsvField, Vec<String>>) {
        for (field, headers) in extra {
            for header in headers {
                self.add_synonym(*field, header);
            }
        }
    }

    pub fn synonyms_for(&self, field: CsvField) -> &[String] {
        self.synonyms.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `header` (already lower-cased) names `field`.
    pub fn accepts(&self, field: CsvField, header: &str) -> bool {
        self.synonyms_for(field).iter().any(|s| s == header)
    }

    /// Resolve each field to the first header column that names it.
    pub fn resolve(&self, headers: &[String]) -> ColumnMap {
        let columns = CsvField::ALL
            .iter()
            .filter_map(|&field| {
                headers
                    .iter()
                    .position(|h| self.accepts(field, h))
                    .map(|idx| (field, idx))
            })
            .collect();
        ColumnMap { columns }
    }

    fn default_synonyms() -> HashMap<CsvField, Vec<String>> {
        let table: [(CsvField, &[&str]); 17] = [
            (CsvField::UnitNo, &["unit no", "unit", "unitno", "unit_no", "unit number", "room"]),
            (CsvField::Tower, &["tower", "building", "bldg"]),
            (CsvField::Floor, &["floor", "level"]),
            (
                CsvField::OwnerName,
                &["owner name", "owner", "ownername", "owner_name", "resident name"],
            ),
            (
                CsvField::ResidentType,
                &["resident type", "residenttype", "resident_type", "occupancy"],
            ),
            (CsvField::PetName, &["pet name", "petname", "pet_name", "name"]),
            (CsvField::PetType, &["type", "pet type", "pettype", "pet_type", "species"]),
            (CsvField::Breed, &["breed"]),
            (CsvField::Sex, &["sex", "gender"]),
            (CsvField::AgeYears, &["age", "age (years)", "ageyears", "age_years"]),
            (
                CsvField::WeightKg,
                &["weight (kg)", "weight", "weightkg", "weight_kg", "weight kg"],
            ),
            (
                CsvField::VaccineExpire,
                &[
                    "vaccine exp",
                    "vaccine expire",
                    "vaccineexpire",
                    "vaccine_expire",
                    "vaccine expiry",
                    "vaccine expiration",
                ],
            ),
            (
                CsvField::VaccineLastDate,
                &["vaccine last date", "vaccinelastdate", "vaccine_last_date", "last vaccine"],
            ),
            (
                CsvField::VaccineStatus,
                &["vaccine status", "vaccinestatus", "vaccine_status"],
            ),
            (CsvField::Dob, &["dob", "date of birth", "birth date"]),
            (
                CsvField::DocumentsComplete,
                &["documents complete", "documentscomplete", "documents_complete", "docs complete"],
            ),
            (CsvField::Remark, &["remark", "remarks", "note", "notes", "comment"]),
        ];

        table
            .into_iter()
            .map(|(field, names)| (field, names.iter().map(|n| n.to_string()).collect()))
            .collect()
    }
}

/// Column index per field for one import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnMap {
    columns: HashMap<CsvField, usize>,
}

impl ColumnMap {
    pub fn index_of(&self, field: CsvField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// The cell for `field` in `row`, if the column exists and is non-empty.
    pub fn cell<'r>(&self, row: &'r [String], field: CsvField) -> Option<&'r str> {
        self.index_of(field)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Fields with no matching header, in declaration order.
    pub fn unresolved(&self) -> Vec<CsvField> {
        CsvField::ALL
            .iter()
            .copied()
            .filter(|field| !self.columns.contains_key(field))
            .collect()
    }
}
