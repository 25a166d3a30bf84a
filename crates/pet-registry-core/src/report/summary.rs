//! Dashboard aggregates.

use serde::Serialize;

use crate::models::{ComplianceStatus, EnrichedPetRecord};

/// Count of records in one status.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatusCount {
    pub status: ComplianceStatus,
    pub count: usize,
    /// Rounded share of the total, 0 when there are no records
    pub percent: u32,
}

/// Count of records of one pet type.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TypeCount {
    pub pet_type: String,
    pub count: usize,
}

/// Figures behind the dashboard cards and charts.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    pub total: usize,
    /// One entry per status, in [`ComplianceStatus::ALL`] order
    pub by_status: Vec<StatusCount>,
    /// Pet types in first-seen order
    pub by_type: Vec<TypeCount>,
    pub submitted: usize,
    pub not_submitted: usize,
}

impl DashboardSummary {
    pub fn from_records(records: &[EnrichedPetRecord]) -> Self {
        let total = records.len();

        let by_status = ComplianceStatus::ALL
            .iter()
            .map(|&status| {
                let count = records.iter().filter(|r| r.status == status).count();
                StatusCount {
                    status,
                    count,
                    percent: percent_of(count, total),
                }
            })
            .collect();

        let mut by_type: Vec<TypeCount> = Vec::new();
        for record in records {
            match by_type
                .iter_mut()
                .find(|t| t.pet_type == record.record.pet_type)
            {
                Some(entry) => entry.count += 1,
                None => by_type.push(TypeCount {
                    pet_type: record.record.pet_type.clone(),
                    count: 1,
                }),
            }
        }

        let submitted = records.iter().filter(|r| r.is_submitted).count();

        Self {
            total,
            by_status,
            by_type,
            submitted,
            not_submitted: total - submitted,
        }
    }

    pub fn count(&self, status: ComplianceStatus) -> usize {
        self.by_status
            .iter()
            .find(|s| s.status == status)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    /// Statuses with at least one record, for the distribution chart.
    pub fn non_empty_statuses(&self) -> impl Iterator<Item = &StatusCount> {
        self.by_status.iter().filter(|s| s.count > 0)
    }
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}
