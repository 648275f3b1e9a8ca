//! # Persistence Format
//!
//! Two encodings are defined here:
//! - JSON list: the file-backed store layout. A pretty-printed array of
//!   document records, newest first, with no schema version.
//! - Stored record: postcard bytes of a record plus its insertion sequence,
//!   used as redb table values.
//!
//! ## Size Limits
//!
//! JSON input is checked against `MAX_STORE_FILE_SIZE` before parsing.

use crate::primitives::MAX_STORE_FILE_SIZE;
use crate::{AccreditError, DocumentRecord};
use serde::{Deserialize, Serialize};

// =============================================================================
// JSON LIST
// =============================================================================

/// Serialize records as a pretty-printed JSON array.
///
/// This is a pure transformation - no file I/O.
pub fn documents_to_json(records: &[DocumentRecord]) -> Result<Vec<u8>, AccreditError> {
    serde_json::to_vec_pretty(records).map_err(|e| AccreditError::SerializationError(e.to_string()))
}

/// Parse a JSON array of records.
///
/// Empty or whitespace-only input is an empty list. Anything else that does
/// not parse is an error; a corrupt store is never treated as empty.
pub fn documents_from_json(bytes: &[u8]) -> Result<Vec<DocumentRecord>, AccreditError> {
    if bytes.len() > MAX_STORE_FILE_SIZE {
        return Err(AccreditError::SerializationError(format!(
            "Data size {} bytes exceeds maximum allowed {} bytes",
            bytes.len(),
            MAX_STORE_FILE_SIZE
        )));
    }

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    serde_json::from_slice(bytes).map_err(|e| {
        AccreditError::SerializationError(format!("Failed to parse document list: {}", e))
    })
}

// =============================================================================
// STORED RECORD (redb values)
// =============================================================================

/// A record with the sequence number it was inserted under.
///
/// Higher sequence means more recently created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub seq: u64,
    pub record: DocumentRecord,
}

/// Encode a stored record with postcard.
pub fn stored_to_bytes(stored: &StoredDocument) -> Result<Vec<u8>, AccreditError> {
    postcard::to_stdvec(stored).map_err(|e| AccreditError::SerializationError(e.to_string()))
}

/// Decode a stored record from postcard bytes.
pub fn stored_from_bytes(bytes: &[u8]) -> Result<StoredDocument, AccreditError> {
    postcard::from_bytes(bytes).map_err(|e| {
        AccreditError::SerializationError(format!("Failed to decode stored document: {}", e))
    })
}

// =============================================================================
// TESTS
// =============================================================================
