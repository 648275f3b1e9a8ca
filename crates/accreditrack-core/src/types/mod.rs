//! # Core Type Definitions
//!
//! This module contains the data model shared by every AccrediTrack component:
//! - Checklist catalog entries (`Criterion`)
//! - Evidence metadata (`DocumentId`, `DocumentRecord`, `NewDocument`)
//! - Error types (`AccreditError`)
//!
//! ## Wire Names
//!
//! Records serialize with camelCase field names (`criterionCode`,
//! `checklistTitle`, `createdAt`, ...). The JSON store and the HTTP API both
//! rely on this layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// CRITERION
// =============================================================================

/// One top-level accreditation category with its required evidence items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    /// Short unique key, e.g. `C1`.
    pub code: String,
    /// Display label.
    pub name: String,
    /// Ordered checklist item names.
    pub required_items: Vec<String>,
}

impl Criterion {
    /// Create a new criterion.
    #[must_use]
    pub fn new<I, S>(code: impl Into<String>, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: code.into(),
            name: name.into(),
            required_items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `item` is one of this criterion's checklist items.
    #[must_use]
    pub fn requires(&self, item: &str) -> bool {
        self.required_items.iter().any(|i| i == item)
    }
}

// =============================================================================
// DOCUMENT IDENTIFIER
// =============================================================================

/// Unique identifier of a document record.
///
/// Rendered as the decimal string of a millisecond timestamp. Only
/// uniqueness is guaranteed; callers must not rely on ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    /// Create a document id from any string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// DOCUMENT RECORD
// =============================================================================

/// Metadata describing one piece of submitted evidence.
///
/// The file itself is never stored, only its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub title: String,
    pub criterion_code: String,
    pub checklist_title: String,
    pub year: String,
    pub file_name: String,
    pub uploaded_by: String,
    pub created_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Case-insensitive substring match on title or checklist item.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.checklist_title.to_lowercase().contains(&needle)
    }
}

// =============================================================================
// NEW DOCUMENT (create input)
// =============================================================================

/// Caller-supplied fields for a new document record.
///
/// `title`, `criterion_code` and `checklist_title` are required. The rest
/// fall back to placeholders when absent or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewDocument {
    pub title: Option<String>,
    pub criterion_code: Option<String>,
    pub checklist_title: Option<String>,
    pub year: Option<String>,
    pub file_name: Option<String>,
    pub uploaded_by: Option<String>,
}

impl NewDocument {
    /// Start a new document with the three required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        criterion_code: impl Into<String>,
        checklist_title: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            criterion_code: Some(criterion_code.into()),
            checklist_title: Some(checklist_title.into()),
            ..Self::default()
        }
    }

    /// Set the academic year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Set the original file name.
    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Set the uploader.
    #[must_use]
    pub fn with_uploaded_by(mut self, uploaded_by: impl Into<String>) -> Self {
        self.uploaded_by = Some(uploaded_by.into());
        self
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in AccrediTrack.
///
/// - No silent failures
/// - Use `Result<T, AccreditError>` for fallible operations
/// - Nothing in the core panics; every error is reported to the caller
#[derive(Debug, Error)]
pub enum AccreditError {
    /// A required field is missing, empty or malformed.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// The requested document does not exist.
    #[error("Document not found: {0}")]
    DocumentNotFound(DocumentId),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O or storage error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The checklist or application configuration is invalid.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AccreditError {
    /// Whether this error was caused by caller input rather than the system.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::DocumentNotFound(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================
