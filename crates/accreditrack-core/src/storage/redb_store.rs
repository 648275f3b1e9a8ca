//! # redb-backed Document Storage
//!
//! A disk-backed document store using the redb embedded database, providing:
//! - ACID transactions (a create or delete is all-or-nothing)
//! - Crash safety (copy-on-write B-trees)
//! - MVCC (concurrent readers, single writer)
//!
//! Records are keyed by id and stored as postcard-encoded
//! [`StoredDocument`] values. The insertion sequence kept alongside each
//! record restores newest-first order on listing.

use crate::formats::{StoredDocument, stored_from_bytes, stored_to_bytes};
use crate::{AccreditError, DocumentId, DocumentRecord, DocumentStore};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata, TableDefinition};
use std::path::Path;

/// Table for documents: id -> postcard(StoredDocument)
const DOCUMENTS: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// Table for metadata: key string -> value u64
const METADATA: TableDefinition<&str, u64> = TableDefinition::new("metadata");

const NEXT_SEQ_KEY: &str = "next_seq";

fn io_err(e: impl std::fmt::Display) -> AccreditError {
    AccreditError::IoError(format!("redb: {}", e))
}

/// A disk-backed document store using redb.
pub struct RedbStore {
    db: Database,
    /// Sequence number for the next insert.
    next_seq: u64,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore")
            .field("next_seq", &self.next_seq)
            .finish_non_exhaustive()
    }
}

impl RedbStore {
    /// Open or create a document database at the given path, creating
    /// parent directories as needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AccreditError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AccreditError::IoError(format!(
                    "Cannot create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let db = Database::create(path).map_err(io_err)?;

        // Initialize tables if they don't exist
        {
            let write_txn = db.begin_write().map_err(io_err)?;
            let _ = write_txn.open_table(DOCUMENTS).map_err(io_err)?;
            let _ = write_txn.open_table(METADATA).map_err(io_err)?;
            write_txn.commit().map_err(io_err)?;
        }

        let next_seq = {
            let read_txn = db.begin_read().map_err(io_err)?;
            let table = read_txn.open_table(METADATA).map_err(io_err)?;
            table
                .get(NEXT_SEQ_KEY)
                .map_err(io_err)?
                .map(|v| v.value())
                .unwrap_or(0)
        };

        Ok(Self { db, next_seq })
    }

    /// Compact the database file.
    pub fn compact(&mut self) -> Result<(), AccreditError> {
        self.db.compact().map_err(io_err)?;
        Ok(())
    }
}

impl DocumentStore for RedbStore {
    fn list_all(&self) -> Result<Vec<DocumentRecord>, AccreditError> {
        let read_txn = self.db.begin_read().map_err(io_err)?;
        let table = read_txn.open_table(DOCUMENTS).map_err(io_err)?;

        let mut stored = Vec::new();
        for entry in table.iter().map_err(io_err)? {
            let (_, value) = entry.map_err(io_err)?;
            stored.push(stored_from_bytes(value.value())?);
        }

        stored.sort_by(|a, b| b.seq.cmp(&a.seq));
        Ok(stored.into_iter().map(|s| s.record).collect())
    }

    fn insert(&mut self, record: &DocumentRecord) -> Result<(), AccreditError> {
        let seq = self.next_seq;
        let bytes = stored_to_bytes(&StoredDocument {
            seq,
            record: record.clone(),
        })?;

        let write_txn = self.db.begin_write().map_err(io_err)?;
        {
            let mut docs = write_txn.open_table(DOCUMENTS).map_err(io_err)?;
            docs.insert(record.id.as_str(), bytes.as_slice())
                .map_err(io_err)?;

            let mut meta = write_txn.open_table(METADATA).map_err(io_err)?;
            meta.insert(NEXT_SEQ_KEY, seq.saturating_add(1))
                .map_err(io_err)?;
        }
        write_txn.commit().map_err(io_err)?;

        // Only advance after the commit succeeded
        self.next_seq = seq.saturating_add(1);
        Ok(())
    }

    fn delete_by_id(&mut self, id: &DocumentId) -> Result<bool, AccreditError> {
        let write_txn = self.db.begin_write().map_err(io_err)?;
        let existed = {
            let mut docs = write_txn.open_table(DOCUMENTS).map_err(io_err)?;
            docs.remove(id.as_str()).map_err(io_err)?.is_some()
        };

        if existed {
            write_txn.commit().map_err(io_err)?;
        } else {
            write_txn.abort().map_err(io_err)?;
        }
        Ok(existed)
    }

    fn len(&self) -> Result<usize, AccreditError> {
        let read_txn = self.db.begin_read().map_err(io_err)?;
        let table = read_txn.open_table(DOCUMENTS).map_err(io_err)?;
        let count = table.len().map_err(io_err)?;
        Ok(count as usize)
    }

    fn backend_name(&self) -> &'static str {
        "redb"
    }
}

// =============================================================================
// TESTS
// =============================================================================
