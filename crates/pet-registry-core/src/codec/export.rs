//! CSV export.

use super::split::{escape_cell, quote_cell};
use crate::models::EnrichedPetRecord;

/// Export column headers, in output order.
///
/// Every header except `ID` and `Status` is also an import synonym, so an
/// exported file can be re-imported as-is.
pub const EXPORT_HEADERS: [&str; 13] = [
    "ID",
    "Unit No",
    "Tower",
    "Floor",
    "Pet Name",
    "Type",
    "Breed",
    "Sex",
    "Weight (kg)",
    "Vaccine Exp",
    "Owner Name",
    "Status",
    "Remark",
];

/// Serialize classified records to CSV text.
///
/// Id, owner name, status and remark are always quoted. Other cells are
/// quoted only when they contain a comma or a quote.
pub fn to_csv(records: &[EnrichedPetRecord]) -> String {
    let mut csv = String::new();

    // Header
    csv.push_str(&EXPORT_HEADERS.join(","));
    csv.push('\n');

    for enriched in records {
        let record = &enriched.record;
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            quote_cell(&record.id),
            escape_cell(&record.unit_no),
            escape_cell(&record.tower),
            escape_cell(&record.floor),
            escape_cell(&record.pet_name),
            escape_cell(&record.pet_type),
            escape_cell(&record.breed),
            record.sex.as_str(),
            record.weight_kg,
            escape_cell(&record.vaccine_expire),
            quote_cell(&record.owner_name),
            quote_cell(enriched.status.label()),
            quote_cell(&record.remark),
        ));
    }

    csv
}
