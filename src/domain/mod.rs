//! Shared data model layer (structs only).
//!
//! ## Purpose
//! - Keep output/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — report/output structs and build version info.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no I/O side effects.

pub mod models;
