//! # inquest-core
//!
//! Core types shared across all Inquest crates.
//!
//! This crate provides:
//! - Entity structs for investigation records (evidence, timeline entries,
//!   findings, causal factors, analysis sections, conclusions)
//! - Closed classification enums with their label tables
//! - Diagnostics (warnings, validation failures) aggregated across stages
//! - Render blocks and the `DocumentEmitter` seam
//! - Cross-cutting error types
//!
//! Nothing in this crate performs I/O.

pub mod diagnostics;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod render;
