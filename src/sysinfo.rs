//! Host and runtime introspection for the diagnostic endpoints.

use chrono::Utc;
use serde::Serialize;

/// Snapshot of the host and runtime, computed fresh on every call.
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub platform: String,
    pub rust_version: String,
    pub environment: String,
    pub timestamp: String,
}

impl SystemInfo {
    /// Collect a snapshot. A hostname that cannot be read or is not
    /// valid UTF-8 is reported as `"unknown"`.
    pub fn collect(environment: &str) -> Self {
        let hostname = gethostname::gethostname()
            .into_string()
            .unwrap_or_else(|_| "unknown".to_string());

        Self {
            hostname,
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
            rust_version: env!("PODLING_RUSTC_VERSION").to_string(),
            environment: environment.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
