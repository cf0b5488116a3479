//! Import pipeline configuration.

use serde::{Deserialize, Serialize};

/// Signature lookup service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base URL of a 4byte.directory-compatible API
    #[serde(default = "default_four_byte_base")]
    pub four_byte_base: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_four_byte_base() -> String { "https://www.4byte.directory".into() }
fn default_timeout_secs() -> u64 { 15 }
fn default_user_agent() -> String { format!("sigscaffold/{}", env!("CARGO_PKG_VERSION")) }

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            four_byte_base: default_four_byte_base(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Top-level import configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    #[serde(default)]
    pub lookup: LookupConfig,
    /// Abort the whole import on a failed lookup (`false`) or treat it like
    /// an empty candidate list (`true`).
    #[serde(default)]
    pub skip_failed_lookups: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            lookup: LookupConfig::default(),
            skip_failed_lookups: false,
        }
    }
}
