//! CLI configuration: YAML file + environment overrides.
//!
//! ```yaml
//! log:
//!   level: info
//!   json: false
//!   components: { sigscaffold-import: debug }
//! lookup:
//!   four_byte_base: https://www.4byte.directory
//!   timeout_secs: 15
//! skip_failed_lookups: false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use sigscaffold_import::ImportConfig;
use sigscaffold_observability::LogConfig;

/// Overrides `lookup.four_byte_base`.
pub const FOURBYTE_URL_ENV: &str = "SIGSCAFFOLD_FOURBYTE_URL";

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(flatten)]
    pub import: ImportConfig,
}

/// Load the config file (if any), then apply environment overrides.
pub fn load(path: Option<&str>) -> Result<CliConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("read config file '{}'", path))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("parse config file '{}'", path))?
        }
        None => CliConfig::default(),
    };

    if let Ok(url) = std::env::var(FOURBYTE_URL_ENV) {
        config.import.lookup.four_byte_base = url;
    }
    Ok(config)
}
