//! Golden tests for the compliance classifier.
//!
//! Cases mirror real registry entries: remarks as the juristic office
//! writes them, checked against a fixed reporting date.

use chrono::NaiveDate;
use proptest::prelude::*;

use pet_registry_core::classifier::{classify, Classifier};
use pet_registry_core::models::{ComplianceStatus, RawPetRecord, SubmissionRegistry};

/// Test case from golden file.
struct GoldenCase {
    id: &'static str,
    unit_no: &'static str,
    pet_name: &'static str,
    vaccine_expire: &'static str,
    remark: &'static str,
    expected: ComplianceStatus,
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()
}

fn submitted() -> SubmissionRegistry {
    [
        "1559/379", "1559/454", "1559/81", "1559/127", "1559/362", "1559/233", "1559/54",
    ]
    .into_iter()
    .collect()
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "over-limit-cats",
            unit_no: "1559/379",
            pet_name: "Luna",
            vaccine_expire: "",
            remark: "Over limit (4 cats), Mixed vaccine status",
            expected: ComplianceStatus::NonCompliantLimit,
        },
        GoldenCase {
            id: "limit-beats-expired",
            unit_no: "1559/379",
            pet_name: "Galileo",
            vaccine_expire: "2024-01-01",
            remark: "Over limit, vaccine expired",
            expected: ComplianceStatus::NonCompliantLimit,
        },
        GoldenCase {
            id: "over-weight",
            unit_no: "1559/500",
            pet_name: "Bruno",
            vaccine_expire: "2026-06-01",
            remark: "Over weight: 28kg",
            expected: ComplianceStatus::NonCompliantLimit,
        },
        GoldenCase {
            id: "quantity",
            unit_no: "1559/501",
            pet_name: "Kiki",
            vaccine_expire: "",
            remark: "Quantity exceeds house rules",
            expected: ComplianceStatus::NonCompliantLimit,
        },
        GoldenCase {
            id: "id-mismatch-beats-expired",
            unit_no: "1559/362",
            pet_name: "Tinkle",
            vaccine_expire: "",
            remark: "Vaccine expired & ID Mismatch",
            expected: ComplianceStatus::NonCompliantDocs,
        },
        GoldenCase {
            id: "missing-docs",
            unit_no: "1559/454",
            pet_name: "Coco",
            vaccine_expire: "2026-06-01",
            remark: "Missing DOCUMENTS",
            expected: ComplianceStatus::NonCompliantDocs,
        },
        GoldenCase {
            id: "expired-remark-without-date",
            unit_no: "1559/127",
            pet_name: "Ped",
            vaccine_expire: "-",
            remark: "Vaccine expired Jul 2025",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-date",
            unit_no: "1559/127",
            pet_name: "Ped",
            vaccine_expire: "2025-07-01",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-date-beats-pending",
            unit_no: "1559/233",
            pet_name: "Unknown",
            vaccine_expire: "2025-02-01",
            remark: "Pending Review",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-slash-ymd",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "2025/07/01",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-us-mdy",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "07/01/2025",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-month-name",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "Jul 1, 2025",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-long-month-name",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "July 1, 2025",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "lapsed-year-month",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "2025-07",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "current-us-mdy",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "06/01/2026",
            remark: "",
            expected: ComplianceStatus::Compliant,
        },
        GoldenCase {
            id: "year-month-reads-as-first-day",
            unit_no: "1559/454",
            pet_name: "Rex",
            vaccine_expire: "2025-12",
            remark: "",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "expires-on-as-of",
            unit_no: "1559/454",
            pet_name: "JB",
            vaccine_expire: "2025-12-12",
            remark: "",
            expected: ComplianceStatus::Compliant,
        },
        GoldenCase {
            id: "unparseable-date",
            unit_no: "1559/454",
            pet_name: "JB",
            vaccine_expire: "not-a-date",
            remark: "",
            expected: ComplianceStatus::Compliant,
        },
        GoldenCase {
            id: "unparseable-date-still-sees-remark",
            unit_no: "1559/454",
            pet_name: "JB",
            vaccine_expire: "not-a-date",
            remark: "expired",
            expected: ComplianceStatus::NonCompliantVaccine,
        },
        GoldenCase {
            id: "na-sentinel",
            unit_no: "1559/454",
            pet_name: "JB",
            vaccine_expire: "N/A",
            remark: "",
            expected: ComplianceStatus::Compliant,
        },
        GoldenCase {
            id: "pending-review",
            unit_no: "1559/54",
            pet_name: "Mek (Pending)",
            vaccine_expire: "",
            remark: "Pending Review: File 54 (3).pdf",
            expected: ComplianceStatus::PendingVerification,
        },
        GoldenCase {
            id: "unknown-name-submitted",
            unit_no: "1559/233",
            pet_name: "Unknown",
            vaccine_expire: "",
            remark: "",
            expected: ComplianceStatus::PendingVerification,
        },
        GoldenCase {
            id: "unknown-name-not-submitted",
            unit_no: "1559/999",
            pet_name: "Unknown",
            vaccine_expire: "",
            remark: "",
            expected: ComplianceStatus::PendingVerification,
        },
        GoldenCase {
            id: "not-submitted",
            unit_no: "1559/999",
            pet_name: "Rex",
            vaccine_expire: "2026-06-01",
            remark: "Valid until Jun 2026",
            expected: ComplianceStatus::PendingSubmission,
        },
        GoldenCase {
            id: "unit-match-is-exact",
            unit_no: "1559/454 ",
            pet_name: "JB",
            vaccine_expire: "2026-06-01",
            remark: "",
            expected: ComplianceStatus::PendingSubmission,
        },
        GoldenCase {
            id: "compliant",
            unit_no: "1559/454",
            pet_name: "JB",
            vaccine_expire: "2026-06-01",
            remark: "Valid until Jun 2026",
            expected: ComplianceStatus::Compliant,
        },
    ]
}

fn to_record(case: &GoldenCase) -> RawPetRecord {
    RawPetRecord {
        id: case.id.to_string(),
        unit_no: case.unit_no.to_string(),
        pet_name: case.pet_name.to_string(),
        vaccine_expire: case.vaccine_expire.to_string(),
        remark: case.remark.to_string(),
        ..RawPetRecord::default()
    }
}

#[test]
fn test_golden_cases() {
    let registry = submitted();
    let mut failures = Vec::new();

    for case in get_golden_cases() {
        let enriched = classify(&to_record(&case), &registry, as_of());
        if enriched.status != case.expected {
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                case.id, case.expected, enriched.status
            ));
        }
    }

    assert!(failures.is_empty(), "Golden failures:\n{}", failures.join("\n"));
}

#[test]
fn test_batch_matches_single() {
    let registry = submitted();
    let classifier = Classifier::new(as_of());
    let records: Vec<RawPetRecord> = get_golden_cases().iter().map(to_record).collect();

    let batch = classifier.classify_all(&records, &registry);
    assert_eq!(batch.len(), records.len());
    for (record, enriched) in records.iter().zip(&batch) {
        assert_eq!(&enriched.record, record);
        assert_eq!(enriched, &classify(record, &registry, as_of()));
    }
}

#[test]
fn test_derived_fields_do_not_touch_input() {
    let registry = submitted();
    let record = to_record(&get_golden_cases()[0]);
    let before = record.clone();
    let enriched = classify(&record, &registry, as_of());
    assert_eq!(record, before);
    assert!(enriched.is_submitted);
}

fn arb_record() -> impl Strategy<Value = RawPetRecord> {
    (
        prop::sample::select(vec!["1559/454", "1559/999", "1559/233"]),
        prop::sample::select(vec!["Unknown", "Luna", "unknown"]),
        prop::sample::select(vec!["", "-", "N/A", "2025-07-01", "2026-06-01", "garbage"]),
        "[a-zA-Z &:()]{0,30}",
    )
        .prop_map(|(unit, name, expire, remark)| RawPetRecord {
            id: "prop".into(),
            unit_no: unit.into(),
            pet_name: name.into(),
            vaccine_expire: expire.into(),
            remark,
            ..RawPetRecord::default()
        })
}

proptest! {
    #[test]
    fn classification_is_deterministic(record in arb_record()) {
        let registry = submitted();
        let first = classify(&record, &registry, as_of());
        let second = classify(&record, &registry, as_of());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn limit_remarks_always_win(record in arb_record(), keyword in prop::sample::select(vec!["over weight", "OVER LIMIT", "Quantity"])) {
        let mut record = record;
        record.remark = format!("{} expired pending doc", keyword);
        let enriched = classify(&record, &submitted(), as_of());
        prop_assert_eq!(enriched.status, ComplianceStatus::NonCompliantLimit);
    }

    #[test]
    fn garbage_dates_never_lapse(remark in "[a-z ]{0,20}") {
        prop_assume!(!remark.contains("expired"));
        prop_assume!(!remark.contains("doc"));
        prop_assume!(!remark.contains("over"));
        prop_assume!(!remark.contains("quantity"));
        let record = RawPetRecord {
            id: "g".into(),
            unit_no: "1559/454".into(),
            pet_name: "Luna".into(),
            vaccine_expire: "31/02/2025".into(),
            remark,
            ..RawPetRecord::default()
        };
        let status = classify(&record, &submitted(), as_of()).status;
        prop_assert_ne!(status, ComplianceStatus::NonCompliantVaccine);
    }
}
