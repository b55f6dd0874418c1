//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `compute.rs` — usage banner, argument parsing, square-root dispatch.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate the computation to `services/*`.
//! - Keep behavior and output schema stable.

pub mod compute;

pub use compute::handle_compute;
