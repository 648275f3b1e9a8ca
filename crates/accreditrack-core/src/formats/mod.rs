//! # Formats Module
//!
//! Serialization formats for document stores.
//!
//! File I/O happens in the storage backends; this module only converts
//! between records and bytes.

mod persistence;

pub use persistence::*;
