use crate::cli::Method;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct SqrtReport {
    pub input: f64,
    pub root: f64,
    pub method: Method,
}

/// Version identifiers reported by the usage banner.
#[derive(Debug, Clone, Copy)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
}

impl VersionInfo {
    /// Populated from Cargo package metadata baked in at compile time.
    pub fn from_build_metadata() -> Self {
        Self {
            major: env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0),
            minor: env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0),
        }
    }
}
