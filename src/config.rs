use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level amlich configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AmlichConfig {
    /// Default time zone offset in hours. Falls back to UTC+7 (the
    /// Vietnamese reference meridian) when unset.
    #[serde(default)]
    pub timezone: Option<f64>,
}

impl AmlichConfig {
    /// Loads the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// Resolves the time zone offset: CLI flag, then config file, then the
/// Vietnamese default.
pub fn resolve_tz(flag: Option<f64>, config: &AmlichConfig) -> f64 {
    flag.or(config.timezone)
        .unwrap_or(amlich_lunisolar::TZ_VIETNAM)
}
