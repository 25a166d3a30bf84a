//! Ordered compliance rules.
//!
//! The cascade is plain data: a list of `(condition, status)` pairs read
//! top to bottom, first match wins. Anything that falls through every rule
//! is `Compliant`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::vaccine::VaccineExpiry;
use crate::models::{ComplianceStatus, RawPetRecord, UNKNOWN_PET_NAME};

/// A predicate over a single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleCondition {
    /// Case-insensitive substring match of any keyword against the remark
    RemarkContainsAny { keywords: Vec<String> },
    /// `vaccine_expire` is a date strictly before the as-of date
    VaccineLapsed,
    /// Exact, case-sensitive pet name match
    PetNameIs { name: String },
    /// The unit is missing from the submission registry
    NotSubmitted,
    AnyOf { conditions: Vec<RuleCondition> },
}

/// Facts about one record that conditions are evaluated against.
pub struct RuleInput<'a> {
    pub record: &'a RawPetRecord,
    /// Lower-cased once per record
    pub remark: String,
    pub is_submitted: bool,
    pub as_of: NaiveDate,
}

impl<'a> RuleInput<'a> {
    pub fn new(record: &'a RawPetRecord, is_submitted: bool, as_of: NaiveDate) -> Self {
        Self {
            record,
            remark: record.remark.to_lowercase(),
            is_submitted,
            as_of,
        }
    }
}

impl RuleCondition {
    pub fn remark_contains_any(keywords: &[&str]) -> Self {
        RuleCondition::RemarkContainsAny {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    pub fn matches(&self, input: &RuleInput<'_>) -> bool {
        match self {
            RuleCondition::RemarkContainsAny { keywords } => keywords
                .iter()
                .any(|keyword| input.remark.contains(&keyword.to_lowercase())),
            RuleCondition::VaccineLapsed => {
                let expiry = VaccineExpiry::parse(&input.record.vaccine_expire);
                if expiry == VaccineExpiry::Unparseable {
                    tracing::debug!(
                        id = %input.record.id,
                        value = %input.record.vaccine_expire,
                        "unparseable vaccine expiry, treating as current"
                    );
                }
                expiry.is_lapsed(input.as_of)
            }
            RuleCondition::PetNameIs { name } => input.record.pet_name == *name,
            RuleCondition::NotSubmitted => !input.is_submitted,
            RuleCondition::AnyOf { conditions } => conditions.iter().any(|c| c.matches(input)),
        }
    }
}

/// One step of the cascade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    pub when: RuleCondition,
    pub status: ComplianceStatus,
}

impl Rule {
    pub fn new(when: RuleCondition, status: ComplianceStatus) -> Self {
        Self { when, status }
    }
}

/// The registry's standard cascade.
///
/// Limit and document problems outrank vaccine problems, which outrank the
/// pending states.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            RuleCondition::remark_contains_any(&["over weight", "over limit", "quantity"]),
            ComplianceStatus::NonCompliantLimit,
        ),
        Rule::new(
            RuleCondition::remark_contains_any(&["id mismatch", "doc"]),
            ComplianceStatus::NonCompliantDocs,
        ),
        Rule::new(
            RuleCondition::remark_contains_any(&["expired"]),
            ComplianceStatus::NonCompliantVaccine,
        ),
        Rule::new(
            RuleCondition::VaccineLapsed,
            ComplianceStatus::NonCompliantVaccine,
        ),
        Rule::new(
            RuleCondition::AnyOf {
                conditions: vec![
                    RuleCondition::remark_contains_any(&["pending"]),
                    RuleCondition::PetNameIs {
                        name: UNKNOWN_PET_NAME.to_string(),
                    },
                ],
            },
            ComplianceStatus::PendingVerification,
        ),
        Rule::new(RuleCondition::NotSubmitted, ComplianceStatus::PendingSubmission),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()
    }

    #[test]
    fn test_remark_keywords_ignore_case() {
        let record = RawPetRecord {
            remark: "OVER LIMIT (4 cats)".into(),
            ..RawPetRecord::default()
        };
        let input = RuleInput::new(&record, true, as_of());
        assert!(RuleCondition::remark_contains_any(&["over limit"]).matches(&input));
        assert!(RuleCondition::remark_contains_any(&["Over Limit"]).matches(&input));
        assert!(!RuleCondition::remark_contains_any(&["expired"]).matches(&input));
    }

    #[test]
    fn test_doc_keyword_is_a_substring_match() {
        // "document", "docs", "doctor" all contain "doc"
        let record = RawPetRecord {
            remark: "Seen by doctor".into(),
            ..RawPetRecord::default()
        };
        let input = RuleInput::new(&record, true, as_of());
        assert!(RuleCondition::remark_contains_any(&["id mismatch", "doc"]).matches(&input));
    }

    #[test]
    fn test_pet_name_is_case_sensitive() {
        let record = RawPetRecord {
            pet_name: "unknown".into(),
            ..RawPetRecord::default()
        };
        let input = RuleInput::new(&record, true, as_of());
        let condition = RuleCondition::PetNameIs {
            name: "Unknown".into(),
        };
        assert!(!condition.matches(&input));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"{"when": {"kind": "remark_contains_any", "keywords": ["biting"]},
                       "status": "NonCompliantDocs"}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.status, ComplianceStatus::NonCompliantDocs);
        assert_eq!(rule.when, RuleCondition::remark_contains_any(&["biting"]));
    }

    #[test]
    fn test_default_rules_end_with_submission_check() {
        let rules = default_rules();
        assert_eq!(rules.len(), 6);
        assert_eq!(rules[0].status, ComplianceStatus::NonCompliantLimit);
        assert_eq!(
            rules.last().map(|r| r.status),
            Some(ComplianceStatus::PendingSubmission)
        );
    }
}
