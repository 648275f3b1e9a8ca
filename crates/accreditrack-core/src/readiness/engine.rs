//! # Readiness Engine
//!
//! Maps a document set onto checklist completion.
//!
//! ## Rules
//!
//! | Step | Rule |
//! |------|------|
//! | Completed | required items with at least one matching document (`criterionCode` + `checklistTitle`) |
//! | Missing | required items not completed, in checklist order |
//! | Percent | `round(100 * completed / required)`, or 0 when nothing is required |
//! | Status | `>= 80` On Track, `>= 50` In Progress, otherwise At Risk |
//!
//! All arithmetic is integer-only. Rounding is half-up.

use crate::primitives::{IN_PROGRESS_THRESHOLD, ON_TRACK_THRESHOLD};
use crate::{Criterion, DocumentRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// STATUS
// =============================================================================

/// Readiness classification of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadinessStatus {
    /// At least `ON_TRACK_THRESHOLD` percent complete.
    OnTrack,
    /// At least `IN_PROGRESS_THRESHOLD` percent complete.
    InProgress,
    /// Below `IN_PROGRESS_THRESHOLD`.
    AtRisk,
}

impl ReadinessStatus {
    /// Classify a readiness percent.
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        if percent >= ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else if percent >= IN_PROGRESS_THRESHOLD {
            Self::InProgress
        } else {
            Self::AtRisk
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::InProgress => "In Progress",
            Self::AtRisk => "At Risk",
        }
    }

    /// Traffic-light tone used by dashboards.
    #[must_use]
    pub fn tone(&self) -> &'static str {
        match self {
            Self::OnTrack => "green",
            Self::InProgress => "yellow",
            Self::AtRisk => "red",
        }
    }
}

impl std::fmt::Display for ReadinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// REPORTS
// =============================================================================

/// Completion of a single criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionReport {
    pub code: String,
    pub name: String,
    /// Required items with evidence, in checklist order.
    pub completed_items: Vec<String>,
    /// Required items without evidence, in checklist order.
    pub missing_items: Vec<String>,
    /// Number of required items (N_c).
    pub required_count: usize,
    /// 0..=100.
    pub readiness_percent: u8,
    pub status: ReadinessStatus,
}

impl CriterionReport {
    /// True when no required item is missing.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_items.is_empty()
    }
}

/// Aggregate figures across the whole checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSummary {
    /// Raw record count, independent of completion.
    pub total_documents: usize,
    pub total_required_items: usize,
    pub total_completed_items: usize,
    pub overall_readiness_percent: u8,
}

/// Full readiness report: one entry per criterion plus the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub criteria: Vec<CriterionReport>,
    pub summary: ReadinessSummary,
}

impl ReadinessReport {
    /// Report for one criterion code.
    #[must_use]
    pub fn criterion(&self, code: &str) -> Option<&CriterionReport> {
        self.criteria.iter().find(|c| c.code == code)
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Integer percentage of `part` over `whole`, rounded half-up.
///
/// Returns 0 when `whole` is 0 and never exceeds 100.
#[must_use]
pub fn percent_of(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    // round(100 * part / whole) == floor((200 * part + whole) / (2 * whole))
    let rounded = (part.saturating_mul(200).saturating_add(whole)) / whole.saturating_mul(2);
    rounded.min(100) as u8
}

/// Compute readiness for every criterion, in the given order.
///
/// Pure: reads `criteria` and `documents`, mutates nothing and cannot fail.
/// Several documents for the same item count once.
#[must_use]
pub fn compute_readiness(criteria: &[Criterion], documents: &[DocumentRecord]) -> ReadinessReport {
    let evidence: BTreeSet<(&str, &str)> = documents
        .iter()
        .map(|d| (d.criterion_code.as_str(), d.checklist_title.as_str()))
        .collect();

    let mut total_required = 0usize;
    let mut total_completed = 0usize;

    let reports: Vec<CriterionReport> = criteria
        .iter()
        .map(|criterion| {
            let (completed, missing): (Vec<&String>, Vec<&String>) = criterion
                .required_items
                .iter()
                .partition(|item| evidence.contains(&(criterion.code.as_str(), item.as_str())));

            let required_count = criterion.required_items.len();
            let readiness_percent = percent_of(completed.len(), required_count);

            total_required = total_required.saturating_add(required_count);
            total_completed = total_completed.saturating_add(completed.len());

            CriterionReport {
                code: criterion.code.clone(),
                name: criterion.name.clone(),
                completed_items: completed.into_iter().cloned().collect(),
                missing_items: missing.into_iter().cloned().collect(),
                required_count,
                readiness_percent,
                status: ReadinessStatus::from_percent(readiness_percent),
            }
        })
        .collect();

    ReadinessReport {
        criteria: reports,
        summary: ReadinessSummary {
            total_documents: documents.len(),
            total_required_items: total_required,
            total_completed_items: total_completed,
            overall_readiness_percent: percent_of(total_completed, total_required),
        },
    }
}

// =============================================================================
// TESTS
// =============================================================================
