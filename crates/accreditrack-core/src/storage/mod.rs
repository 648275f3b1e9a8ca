//! # Storage Backends
//!
//! Durable implementations of [`DocumentStore`](crate::DocumentStore):
//! - `JsonFileStore`: a single JSON array file, re-read on every call
//! - `RedbStore`: an ACID embedded database

mod json_file;
mod redb_store;

pub use json_file::JsonFileStore;
pub use redb_store::RedbStore;
