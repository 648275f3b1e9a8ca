//! # JSON File Store
//!
//! Keeps every record in one pretty-printed JSON array, newest first.
//!
//! The file is re-read on each call so edits made by another process show up
//! on the next listing. Writes replace the whole file.

use crate::formats::{documents_from_json, documents_to_json};
use crate::{AccreditError, DocumentId, DocumentRecord, DocumentStore};
use std::path::{Path, PathBuf};

/// File-backed document store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// list file if it does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AccreditError> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AccreditError::IoError(format!(
                        "Cannot create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            write_records(&path, &[])?;
        } else if !path.is_file() {
            return Err(AccreditError::IoError(format!(
                "Path '{}' is not a regular file",
                path.display()
            )));
        }

        Ok(Self { path })
    }

    fn read_records(&self) -> Result<Vec<DocumentRecord>, AccreditError> {
        let data = std::fs::read(&self.path).map_err(|e| {
            AccreditError::IoError(format!("Read '{}': {}", self.path.display(), e))
        })?;
        documents_from_json(&data)
    }
}

fn write_records(path: &Path, records: &[DocumentRecord]) -> Result<(), AccreditError> {
    let data = documents_to_json(records)?;
    std::fs::write(path, data)
        .map_err(|e| AccreditError::IoError(format!("Write '{}': {}", path.display(), e)))
}

impl DocumentStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<DocumentRecord>, AccreditError> {
        self.read_records()
    }

    fn insert(&mut self, record: &DocumentRecord) -> Result<(), AccreditError> {
        let mut records = self.read_records()?;
        records.insert(0, record.clone());
        write_records(&self.path, &records)
    }

    fn delete_by_id(&mut self, id: &DocumentId) -> Result<bool, AccreditError> {
        let mut records = self.read_records()?;
        let before = records.len();
        records.retain(|r| &r.id != id);

        if records.len() == before {
            // Nothing removed: leave the file untouched.
            return Ok(false);
        }
        write_records(&self.path, &records)?;
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}

// =============================================================================
// TESTS
// =============================================================================
