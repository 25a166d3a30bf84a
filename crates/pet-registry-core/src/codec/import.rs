//! CSV import.

use serde::Serialize;

use super::fields::{ColumnMap, CsvField, HeaderSynonyms};
use super::split::split_line;
use crate::models::{new_record_id, non_negative, RawPetRecord, ResidentType, Sex};

/// Rows with fewer cells than this are treated as malformed.
pub const MIN_ROW_CELLS: usize = 2;

/// Result of importing one CSV document.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ImportOutcome {
    /// Parsed rows in file order, each with a fresh id
    pub records: Vec<RawPetRecord>,
    /// Data rows dropped as malformed
    pub skipped_rows: usize,
    /// Fields that no header column named
    pub unresolved_fields: Vec<CsvField>,
}

impl ImportOutcome {
    pub fn imported(&self) -> usize {
        self.records.len()
    }
}

/// Parse CSV text into raw records.
///
/// Returns an empty vector unless there is a header row and at least one
/// data row. Appending the result to the roster is up to the caller.
pub fn from_csv(text: &str, synonyms: &HeaderSynonyms) -> Vec<RawPetRecord> {
    import_csv(text, synonyms).records
}

/// Parse CSV text and report what was dropped along the way.
pub fn import_csv(text: &str, synonyms: &HeaderSynonyms) -> ImportOutcome {
    let lines: Vec<(usize, &str)> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| (idx + 1, line))
        .collect();

    if lines.len() < 2 {
        tracing::debug!(lines = lines.len(), "csv import needs a header and one data row");
        return ImportOutcome::default();
    }

    let header_line = lines[0].1.trim_start_matches('\u{feff}');
    let headers: Vec<String> = split_line(header_line)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect();
    let columns = synonyms.resolve(&headers);

    let mut outcome = ImportOutcome {
        unresolved_fields: columns.unresolved(),
        ..ImportOutcome::default()
    };

    for &(line_no, line) in &lines[1..] {
        let row = split_line(line);
        if row.len() < MIN_ROW_CELLS {
            tracing::debug!(line = line_no, cells = row.len(), "skipping malformed csv row");
            outcome.skipped_rows += 1;
            continue;
        }
        outcome.records.push(build_record(&columns, &row));
    }

    tracing::info!(
        imported = outcome.records.len(),
        skipped = outcome.skipped_rows,
        unresolved = outcome.unresolved_fields.len(),
        "csv import finished"
    );

    outcome
}

fn build_record(columns: &ColumnMap, row: &[String]) -> RawPetRecord {
    let defaults = RawPetRecord::default();
    let text = |field: CsvField, fallback: String| {
        columns
            .cell(row, field)
            .map(str::to_string)
            .unwrap_or(fallback)
    };
    let number = |field: CsvField| {
        columns
            .cell(row, field)
            .and_then(|value| value.parse::<f64>().ok())
            .map(non_negative)
            .unwrap_or(0.0)
    };

    RawPetRecord {
        id: new_record_id(),
        unit_no: text(CsvField::UnitNo, defaults.unit_no),
        tower: text(CsvField::Tower, defaults.tower),
        floor: text(CsvField::Floor, defaults.floor),
        owner_name: text(CsvField::OwnerName, defaults.owner_name),
        resident_type: columns
            .cell(row, CsvField::ResidentType)
            .map(ResidentType::parse)
            .unwrap_or(defaults.resident_type),
        pet_name: text(CsvField::PetName, defaults.pet_name),
        pet_type: text(CsvField::PetType, defaults.pet_type),
        breed: text(CsvField::Breed, defaults.breed),
        sex: columns
            .cell(row, CsvField::Sex)
            .map(Sex::parse)
            .unwrap_or(defaults.sex),
        age_years: number(CsvField::AgeYears),
        weight_kg: number(CsvField::WeightKg),
        vaccine_expire: text(CsvField::VaccineExpire, defaults.vaccine_expire),
        remark: text(CsvField::Remark, defaults.remark),
        dob: text(CsvField::Dob, defaults.dob),
        vaccine_last_date: text(CsvField::VaccineLastDate, defaults.vaccine_last_date),
        vaccine_status: text(CsvField::VaccineStatus, defaults.vaccine_status),
        documents_complete: columns
            .cell(row, CsvField::DocumentsComplete)
            .and_then(parse_flag)
            .unwrap_or(defaults.documents_complete),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
