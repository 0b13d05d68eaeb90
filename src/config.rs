//! Configuration file support for fs-facade.
//!
//! Provides YAML-based configuration through `fs-facade.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

use crate::application::dto::OutputFormat;
use crate::domain::TextEncoding;

pub const CONFIG_FILENAME: &str = "fs-facade.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Default text encoding for `cat` and `write`.
    pub encoding: Option<String>,
    /// Output format: `text` or `json`.
    pub format: Option<String>,
    /// Log level used when `RUST_LOG` is not set.
    pub log_level: Option<String>,
    /// Wrap text streams in logging decorators.
    pub log_streams: Option<bool>,
    /// Let `cp` replace an existing destination.
    pub overwrite: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `encoding`; only meaningful after validation.
    pub fn encoding(&self) -> Option<TextEncoding> {
        self.encoding.as_deref().and_then(|e| e.parse().ok())
    }

    /// Parsed `format`; only meaningful after validation.
    pub fn format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// Warn about unknown fields in the config file.
    ///
    /// Called once logging is up, since the log level itself may come from
    /// this file.
    pub fn warn_unknown_fields(&self) {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        for key in keys {
            tracing::warn!("⚠️  Unknown config field '{}' will be ignored.", key);
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.is_file() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref encoding) = config.encoding {
        TextEncoding::from_str(encoding)?;
    }
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("{}", e);
        }
    }
    if let Some(ref level) = config.log_level {
        if LevelFilter::from_str(level).is_err() {
            bail!(
                "Invalid log_level: '{}'.\n\n\
                 💡 Hint: Use one of off, error, warn, info, debug, trace.",
                level
            );
        }
    }
    Ok(())
}
