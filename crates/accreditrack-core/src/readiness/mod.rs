//! # Readiness Module
//!
//! Per-criterion completion scoring and the aggregate readiness summary.
//!
//! The engine is a pure function of the checklist and the document set it is
//! handed. It never reads stored state itself, so callers re-fetch documents
//! and recompute after every change.

mod engine;

pub use engine::*;
