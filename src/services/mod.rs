//! Service layer containing the computation and output helpers.
//!
//! ## Service map
//! - `math.rs` — square-root strategies (std delegate + Newton iteration).
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Keep command handlers thin; delegate to services.

pub mod math;
pub mod output;
