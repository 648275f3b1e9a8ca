//! # Document Registry
//!
//! The create/list/delete surface over a [`DocumentStore`].
//!
//! The registry owns every rule that turns caller fields into a stored
//! record:
//! - `title`, `criterionCode` and `checklistTitle` must be present and non-empty
//! - `year`, `fileName` and `uploadedBy` fall back to fixed placeholders
//! - every field is bounded by `MAX_FIELD_LENGTH`
//! - optional reference check against a [`Checklist`]
//! - unique id and creation timestamp assignment
//!
//! Deleting an unknown id is reported as [`AccreditError::DocumentNotFound`]
//! and leaves the store untouched.

use crate::primitives::{
    DEFAULT_ACADEMIC_YEAR, DEFAULT_FILE_NAME, DEFAULT_UPLOADER, MAX_FIELD_LENGTH,
};
use crate::readiness::{ReadinessReport, compute_readiness};
use crate::storage::{JsonFileStore, RedbStore};
use crate::{
    AccreditError, Checklist, DocumentId, DocumentRecord, DocumentStore, MemoryStore, NewDocument,
};
use chrono::{DateTime, SubsecRound, Utc};
use std::path::Path;

// =============================================================================
// ID GENERATION
// =============================================================================

/// Hands out millisecond-timestamp ids that never repeat.
///
/// Two creates in the same millisecond (or a clock that steps backwards) get
/// the previous id plus one.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Generator that continues after the highest numeric id in `existing`.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a DocumentRecord>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|r| r.id.as_str().parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Next id for a record created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> DocumentId {
        let candidate = now.timestamp_millis();
        let id = if candidate > self.last {
            candidate
        } else {
            self.last.saturating_add(1)
        };
        self.last = id;
        DocumentId(id.to_string())
    }
}

// =============================================================================
// FIELD VALIDATION
// =============================================================================

fn required_field(name: &str, value: Option<String>) -> Result<String, AccreditError> {
    match value {
        Some(v) if !v.is_empty() => bounded_field(name, v),
        _ => Err(AccreditError::ValidationError(format!(
            "Missing required field: {}",
            name
        ))),
    }
}

fn defaulted_field(
    name: &str,
    value: Option<String>,
    default: &str,
) -> Result<String, AccreditError> {
    match value {
        Some(v) if !v.is_empty() => bounded_field(name, v),
        _ => Ok(default.to_string()),
    }
}

fn bounded_field(name: &str, value: String) -> Result<String, AccreditError> {
    if value.len() > MAX_FIELD_LENGTH {
        return Err(AccreditError::ValidationError(format!(
            "Field {} length {} exceeds maximum {} bytes",
            name,
            value.len(),
            MAX_FIELD_LENGTH
        )));
    }
    Ok(value)
}

// =============================================================================
// REGISTRY
// =============================================================================

/// The document registry: validation and id assignment over a store.
#[derive(Debug)]
pub struct DocumentRegistry {
    store: Box<dyn DocumentStore>,
    ids: IdGenerator,
    /// When set, creates must reference a known criterion and item.
    reference_check: Option<Checklist>,
}

impl DocumentRegistry {
    /// Wrap an existing store, seeding id generation from its records.
    pub fn new(store: Box<dyn DocumentStore>) -> Result<Self, AccreditError> {
        let existing = store.list_all()?;
        Ok(Self {
            ids: IdGenerator::seeded(&existing),
            store,
            reference_check: None,
        })
    }

    /// Registry over a fresh volatile store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(MemoryStore::new()),
            ids: IdGenerator::default(),
            reference_check: None,
        }
    }

    /// Registry over a JSON file store at `path`.
    pub fn with_json_file(path: impl AsRef<Path>) -> Result<Self, AccreditError> {
        Self::new(Box::new(JsonFileStore::open(path)?))
    }

    /// Registry over a redb database at `path`.
    pub fn with_redb(path: impl AsRef<Path>) -> Result<Self, AccreditError> {
        Self::new(Box::new(RedbStore::open(path)?))
    }

    /// Require created records to reference `checklist` entries.
    #[must_use]
    pub fn with_reference_check(mut self, checklist: Checklist) -> Self {
        self.reference_check = Some(checklist);
        self
    }

    /// Whether creates are checked against a checklist.
    #[must_use]
    pub fn checks_references(&self) -> bool {
        self.reference_check.is_some()
    }

    /// Name of the underlying storage backend.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    /// All records, most recently created first.
    pub fn list_all(&self) -> Result<Vec<DocumentRecord>, AccreditError> {
        self.store.list_all()
    }

    /// Records whose title or checklist item contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Result<Vec<DocumentRecord>, AccreditError> {
        let mut records = self.store.list_all()?;
        records.retain(|r| r.matches_search(term));
        Ok(records)
    }

    /// Number of stored records.
    pub fn len(&self) -> Result<usize, AccreditError> {
        self.store.len()
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> Result<bool, AccreditError> {
        self.store.is_empty()
    }

    /// Create a record stamped with the current time.
    pub fn create(&mut self, fields: NewDocument) -> Result<DocumentRecord, AccreditError> {
        self.create_at(fields, Utc::now())
    }

    /// Create a record stamped with `now`, truncated to milliseconds.
    ///
    /// Validation runs before the store is touched, so a rejected create
    /// changes nothing.
    pub fn create_at(
        &mut self,
        fields: NewDocument,
        now: DateTime<Utc>,
    ) -> Result<DocumentRecord, AccreditError> {
        let title = required_field("title", fields.title)?;
        let criterion_code = required_field("criterionCode", fields.criterion_code)?;
        let checklist_title = required_field("checklistTitle", fields.checklist_title)?;
        let year = defaulted_field("year", fields.year, DEFAULT_ACADEMIC_YEAR)?;
        let file_name = defaulted_field("fileName", fields.file_name, DEFAULT_FILE_NAME)?;
        let uploaded_by = defaulted_field("uploadedBy", fields.uploaded_by, DEFAULT_UPLOADER)?;

        if let Some(checklist) = &self.reference_check {
            checklist.check_reference(&criterion_code, &checklist_title)?;
        }

        let record = DocumentRecord {
            id: self.ids.next_id(now),
            title,
            criterion_code,
            checklist_title,
            year,
            file_name,
            uploaded_by,
            created_at: now.trunc_subsecs(3),
        };

        self.store.insert(&record)?;
        Ok(record)
    }

    /// Delete the record with `id`.
    ///
    /// Returns `DocumentNotFound` when no such record exists.
    pub fn delete_by_id(&mut self, id: &DocumentId) -> Result<(), AccreditError> {
        if self.store.delete_by_id(id)? {
            Ok(())
        } else {
            Err(AccreditError::DocumentNotFound(id.clone()))
        }
    }

    /// Re-fetch every record and score it against `checklist`.
    pub fn readiness(&self, checklist: &Checklist) -> Result<ReadinessReport, AccreditError> {
        let documents = self.store.list_all()?;
        Ok(compute_readiness(checklist.list_criteria(), &documents))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).single().expect("valid timestamp")
    }

    #[test]
    fn created_at_has_millisecond_precision() {
        let now = Utc
            .timestamp_opt(1_735_787_045, 123_456_789)
            .single()
            .expect("valid timestamp");
        let mut registry = DocumentRegistry::in_memory();
        let record = registry
            .create_at(NewDocument::new("T", "C1", "Curriculum plan & syllabus"), now)
            .expect("create");

        assert_eq!(record.created_at.timestamp_subsec_nanos(), 123_000_000);
        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["createdAt"], "2025-01-02T03:04:05.123Z");
    }

    #[test]
    fn defaults_applied() {
        let mut registry = DocumentRegistry::in_memory();
        let record = registry
            .create(NewDocument::new(
                "Syllabus 2025",
                "C1",
                "Curriculum plan & syllabus",
            ))
            .expect("create");

        assert_eq!(record.year, DEFAULT_ACADEMIC_YEAR);
        assert_eq!(record.file_name, DEFAULT_FILE_NAME);
        assert_eq!(record.uploaded_by, DEFAULT_UPLOADER);
    }

    #[test]
    fn empty_optional_fields_take_defaults() {
        let mut registry = DocumentRegistry::in_memory();
        let fields = NewDocument::new("T", "C1", "Curriculum plan & syllabus")
            .with_year("")
            .with_file_name("")
            .with_uploaded_by("");

        let record = registry.create(fields).expect("create");
        assert_eq!(record.year, DEFAULT_ACADEMIC_YEAR);
        assert_eq!(record.file_name, DEFAULT_FILE_NAME);
        assert_eq!(record.uploaded_by, DEFAULT_UPLOADER);
    }

    #[test]
    fn supplied_fields_kept() {
        let mut registry = DocumentRegistry::in_memory();
        let fields = NewDocument::new("T", "C1", "Curriculum plan & syllabus")
            .with_year("2023-2024")
            .with_file_name("syllabus.pdf")
            .with_uploaded_by("jane.doe@inst.edu");

        let record = registry.create_at(fields, at(1_700_000_000_000)).expect("create");
        assert_eq!(record.year, "2023-2024");
        assert_eq!(record.file_name, "syllabus.pdf");
        assert_eq!(record.uploaded_by, "jane.doe@inst.edu");
        assert_eq!(record.id.as_str(), "1700000000000");
        assert_eq!(record.created_at, at(1_700_000_000_000));
    }

    #[test]
    fn missing_required_field_rejected_without_side_effects() {
        let mut registry = DocumentRegistry::in_memory();
        let cases = [
            NewDocument {
                title: None,
                ..NewDocument::new("T", "C1", "Curriculum plan & syllabus")
            },
            NewDocument::new("T", "", "Curriculum plan & syllabus"),
            NewDocument {
                checklist_title: None,
                ..NewDocument::new("T", "C1", "x")
            },
        ];

        for fields in cases {
            assert!(matches!(
                registry.create(fields),
                Err(AccreditError::ValidationError(_))
            ));
        }
        assert!(registry.is_empty().expect("empty"));
    }

    #[test]
    fn oversized_field_rejected() {
        let mut registry = DocumentRegistry::in_memory();
        let long = "x".repeat(MAX_FIELD_LENGTH + 1);
        let result = registry.create(NewDocument::new(long, "C1", "Curriculum plan & syllabus"));
        assert!(matches!(result, Err(AccreditError::ValidationError(_))));
    }

    #[test]
    fn ids_unique_within_same_millisecond() {
        let mut registry = DocumentRegistry::in_memory();
        let now = at(1_000);
        let a = registry
            .create_at(NewDocument::new("A", "C4", "Lab facilities photos"), now)
            .expect("create");
        let b = registry
            .create_at(NewDocument::new("B", "C4", "Lab facilities photos"), now)
            .expect("create");

        assert_ne!(a.id, b.id);
        assert_eq!(b.id.as_str(), "1001");
    }

    #[test]
    fn id_generator_seeded_past_existing() {
        let mut registry = DocumentRegistry::in_memory();
        let first = registry
            .create_at(NewDocument::new("A", "C4", "Lab facilities photos"), at(5_000))
            .expect("create");

        let records = registry.list_all().expect("list");
        let mut ids = IdGenerator::seeded(&records);
        let next = ids.next_id(at(10));
        assert_eq!(next.as_str(), "5001");
        assert_ne!(next, first.id);
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let mut registry = DocumentRegistry::in_memory();
        registry
            .create(NewDocument::new("A", "C4", "Lab facilities photos"))
            .expect("create");

        let missing = DocumentId::new("does-not-exist");
        assert!(matches!(
            registry.delete_by_id(&missing),
            Err(AccreditError::DocumentNotFound(id)) if id == missing
        ));
        assert_eq!(registry.len().expect("len"), 1);
    }

    #[test]
    fn reference_check_rejects_unknown_items() {
        let mut registry = DocumentRegistry::in_memory().with_reference_check(Checklist::naac());
        assert!(registry.checks_references());

        assert!(matches!(
            registry.create(NewDocument::new("A", "C4", "Publications list")),
            Err(AccreditError::ValidationError(_))
        ));
        assert!(
            registry
                .create(NewDocument::new("A", "C4", "Lab facilities photos"))
                .is_ok()
        );
    }

    #[test]
    fn unchecked_registry_accepts_unknown_references() {
        let mut registry = DocumentRegistry::in_memory();
        assert!(
            registry
                .create(NewDocument::new("A", "C99", "Not on any checklist"))
                .is_ok()
        );
    }

    #[test]
    fn search_filters_in_list_order() {
        let mut registry = DocumentRegistry::in_memory();
        registry
            .create_at(NewDocument::new("Lab photos", "C4", "Lab facilities photos"), at(1))
            .expect("create");
        registry
            .create_at(NewDocument::new("Placement summary", "C5", "Placement proof & summary"), at(2))
            .expect("create");
        registry
            .create_at(NewDocument::new("Annual report", "C4", "Lab facilities photos"), at(3))
            .expect("create");

        let titles: Vec<_> = registry
            .search("LAB")
            .expect("search")
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(titles, vec!["Annual report", "Lab photos"]);
        assert_eq!(registry.search("").expect("search").len(), 3);
    }

    #[test]
    fn readiness_refetches_after_changes() {
        let checklist = Checklist::naac();
        let mut registry = DocumentRegistry::in_memory();

        let doc = registry
            .create(NewDocument::new("Photos", "C4", "Lab facilities photos"))
            .expect("create");
        let before = registry.readiness(&checklist).expect("readiness");
        assert_eq!(before.criterion("C4").map(|c| c.readiness_percent), Some(100));

        registry.delete_by_id(&doc.id).expect("delete");
        let after = registry.readiness(&checklist).expect("readiness");
        assert_eq!(after.criterion("C4").map(|c| c.readiness_percent), Some(0));
    }
}
