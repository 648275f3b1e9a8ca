//! # accreditrack-core
//!
//! Accreditation readiness scoring - THE LOGIC.
//!
//! This crate maps a mutable collection of evidence records onto a fixed
//! accreditation checklist and reports, per criterion, what is done, what is
//! missing and how ready the institution is.
//!
//! ## Components
//!
//! - `checklist`: the fixed catalog of criteria and required items
//! - `readiness`: the pure scoring engine
//! - `registry`: create/list/search/delete over a pluggable store
//! - `session`: display sessions derived from an email and a role
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network dependencies (pure Rust)
//! - Integer arithmetic only for percentages
//! - The engine takes documents as an explicit argument and never caches them

// =============================================================================
// MODULES
// =============================================================================

pub mod checklist;
pub mod formats;
pub mod primitives;
pub mod readiness;
pub mod registry;
pub mod session;
pub mod storage;
pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{AccreditError, Criterion, DocumentId, DocumentRecord, NewDocument};

// =============================================================================
// RE-EXPORTS: Components
// =============================================================================

pub use checklist::Checklist;
pub use readiness::{
    CriterionReport, ReadinessReport, ReadinessStatus, ReadinessSummary, compute_readiness,
};
pub use registry::{DocumentRegistry, IdGenerator};
pub use session::{UserSession, issue_session};
pub use storage::{JsonFileStore, RedbStore};
pub use store::{DocumentStore, MemoryStore};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{documents_from_json, documents_to_json};
