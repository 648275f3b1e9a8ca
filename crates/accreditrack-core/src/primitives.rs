//! # Fixed Primitives
//!
//! Hardcoded constants for the AccrediTrack core.
//!
//! These are compiled into the binary and are immutable at runtime.

/// Academic year recorded when an upload omits one.
pub const DEFAULT_ACADEMIC_YEAR: &str = "2025-2026";

/// File label recorded when an upload carries no file.
pub const DEFAULT_FILE_NAME: &str = "Internal Record";

/// Uploader recorded when an upload omits one.
pub const DEFAULT_UPLOADER: &str = "System";

/// Lowest readiness percent classified as "On Track".
pub const ON_TRACK_THRESHOLD: u8 = 80;

/// Lowest readiness percent classified as "In Progress".
///
/// Anything below this is "At Risk".
pub const IN_PROGRESS_THRESHOLD: u8 = 50;

// =============================================================================
// INPUT VALIDATION LIMITS
// =============================================================================

/// Maximum length in bytes of any document field.
///
/// Longer fields are rejected on create.
pub const MAX_FIELD_LENGTH: usize = 512;

/// Maximum number of criteria in a configured checklist.
pub const MAX_CRITERIA: usize = 64;

/// Maximum number of required items under one criterion.
pub const MAX_ITEMS_PER_CRITERION: usize = 64;

/// Maximum size of a JSON document store file (64 MB).
///
/// Checked before parsing so a corrupt or hostile file cannot exhaust memory.
pub const MAX_STORE_FILE_SIZE: usize = 64 * 1024 * 1024;
