//! # AccrediTrack application library
//!
//! HTTP API, CLI and configuration around `accreditrack-core`. The binary in
//! `main.rs` is a thin entry point over this library so the integration
//! tests can drive the router directly (via `accreditrack::api::*`).

pub mod api;
pub mod cli;
pub mod config;
