//! Compliance status labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The single classification attached to a pet record.
///
/// Variants are declared in rule priority order: a record is only ever
/// assigned one of them, and earlier rules in the cascade win.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComplianceStatus {
    /// No outstanding issues
    Compliant,
    /// Too many pets in the unit or the animal exceeds the weight limit
    NonCompliantLimit,
    /// Vaccination has lapsed
    NonCompliantVaccine,
    /// Identity or paperwork problem
    NonCompliantDocs,
    /// Submitted but not yet checked by the juristic office
    PendingVerification,
    /// Unit has not filed its paperwork
    PendingSubmission,
}

/// Returned when a status label is not recognised.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown compliance status: {0}")]
pub struct UnknownStatus(pub String);

impl ComplianceStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [ComplianceStatus; 6] = [
        ComplianceStatus::Compliant,
        ComplianceStatus::PendingVerification,
        ComplianceStatus::PendingSubmission,
        ComplianceStatus::NonCompliantVaccine,
        ComplianceStatus::NonCompliantLimit,
        ComplianceStatus::NonCompliantDocs,
    ];

    /// Human-readable label, as shown in the table and written to CSV.
    pub fn label(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliantLimit => "Non-Compliant (Over Limit/Weight)",
            ComplianceStatus::NonCompliantVaccine => "Non-Compliant (Vaccine Expired)",
            ComplianceStatus::NonCompliantDocs => "Non-Compliant (Documents)",
            ComplianceStatus::PendingVerification => "Pending Verification",
            ComplianceStatus::PendingSubmission => "Pending (Missing Submission)",
        }
    }

    /// Variant name, stable across label wording changes.
    pub fn code(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliantLimit => "NonCompliantLimit",
            ComplianceStatus::NonCompliantVaccine => "NonCompliantVaccine",
            ComplianceStatus::NonCompliantDocs => "NonCompliantDocs",
            ComplianceStatus::PendingVerification => "PendingVerification",
            ComplianceStatus::PendingSubmission => "PendingSubmission",
        }
    }

    pub fn is_non_compliant(&self) -> bool {
        matches!(
            self,
            ComplianceStatus::NonCompliantLimit
                | ComplianceStatus::NonCompliantVaccine
                | ComplianceStatus::NonCompliantDocs
        )
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ComplianceStatus::PendingVerification | ComplianceStatus::PendingSubmission
        )
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ComplianceStatus {
    type Err = UnknownStatus;

    /// Accepts either the display label or the variant name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ComplianceStatus::ALL
            .iter()
            .copied()
            .find(|status| {
                status.label().eq_ignore_ascii_case(wanted)
                    || status.code().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
