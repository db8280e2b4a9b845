use serde::{Deserialize, Serialize};

/// Optional integrations, read from the `[features]` table of `config.toml`.
///
/// Every flag defaults to `false`, so a missing or partial file leaves all
/// of them off.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Export traces and logs over OTLP.
    #[serde(default)]
    pub telemetry: bool,
    /// Serve the interactive REST reference at `/docs`.
    #[serde(default)]
    pub api_docs: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}
