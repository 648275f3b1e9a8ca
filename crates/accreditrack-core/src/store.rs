//! # Document Store
//!
//! The storage seam behind the document registry.
//!
//! A `DocumentStore` only persists complete records. Validation, defaults,
//! id assignment and not-found reporting live in
//! [`DocumentRegistry`](crate::DocumentRegistry).

use crate::{AccreditError, DocumentId, DocumentRecord};

/// Persistent or volatile storage for document records.
///
/// Implementors must return records newest first from `list_all`.
/// Stores are `Send + Sync` so the server can share one behind a lock.
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// All records, most recently inserted first.
    fn list_all(&self) -> Result<Vec<DocumentRecord>, AccreditError>;

    /// Insert a fully-formed record at the head of the list.
    fn insert(&mut self, record: &DocumentRecord) -> Result<(), AccreditError>;

    /// Remove the record with `id`. Returns whether one existed.
    fn delete_by_id(&mut self, id: &DocumentId) -> Result<bool, AccreditError>;

    /// Number of stored records.
    fn len(&self) -> Result<usize, AccreditError> {
        Ok(self.list_all()?.len())
    }

    /// Whether the store holds no records.
    fn is_empty(&self) -> Result<bool, AccreditError> {
        Ok(self.len()? == 0)
    }

    /// Short backend name for diagnostics.
    fn backend_name(&self) -> &'static str;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Volatile store kept in a vector, newest first.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<DocumentRecord>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<DocumentRecord>, AccreditError> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, record: &DocumentRecord) -> Result<(), AccreditError> {
        self.records.insert(0, record.clone());
        Ok(())
    }

    fn delete_by_id(&mut self, id: &DocumentId) -> Result<bool, AccreditError> {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        Ok(self.records.len() != before)
    }

    fn len(&self) -> Result<usize, AccreditError> {
        Ok(self.records.len())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// TESTS
// =============================================================================
