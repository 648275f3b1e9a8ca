//! # API Request/Response Types
//!
//! JSON bodies of the HTTP API. Field names are camelCase on the wire.

use accreditrack_core::{
    CriterionReport, DocumentRecord, ReadinessReport, ReadinessSummary, UserSession,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// GENERIC BODIES
// =============================================================================

/// `{ "error": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// `{ "message": ... }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Login request. Both fields are optional on the wire so that a missing
/// field yields the 400 body rather than an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub role: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSession,
}

impl LoginResponse {
    pub fn success(user: UserSession) -> Self {
        Self {
            message: "Login successful".to_string(),
            user,
        }
    }
}

// =============================================================================
// DOCUMENTS
// =============================================================================

/// `?search=` on the document listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// Successful upload (201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub document: DocumentRecord,
}

impl UploadResponse {
    pub fn uploaded(document: DocumentRecord) -> Self {
        Self {
            message: "Document uploaded".to_string(),
            document,
        }
    }
}

// =============================================================================
// READINESS
// =============================================================================

/// One criterion as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionReadiness {
    pub code: String,
    pub name: String,
    pub completed_items: Vec<String>,
    pub missing_items: Vec<String>,
    pub required_count: usize,
    pub readiness_percent: u8,
    /// "On Track", "In Progress" or "At Risk".
    pub status: String,
    /// "green", "yellow" or "red".
    pub tone: String,
    pub is_complete: bool,
}

impl From<CriterionReport> for CriterionReadiness {
    fn from(report: CriterionReport) -> Self {
        let is_complete = report.is_complete();
        Self {
            status: report.status.label().to_string(),
            tone: report.status.tone().to_string(),
            code: report.code,
            name: report.name,
            completed_items: report.completed_items,
            missing_items: report.missing_items,
            required_count: report.required_count,
            readiness_percent: report.readiness_percent,
            is_complete,
        }
    }
}

/// `GET /api/readiness` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub criteria: Vec<CriterionReadiness>,
    pub summary: ReadinessSummary,
}

impl From<ReadinessReport> for ReadinessResponse {
    fn from(report: ReadinessReport) -> Self {
        Self {
            criteria: report.criteria.into_iter().map(Into::into).collect(),
            summary: report.summary,
        }
    }
}
