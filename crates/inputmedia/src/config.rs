//! Encoder configuration.
//!
//! Loaded from a TOML table with every key optional:
//!
//! ```toml
//! default_parse_mode = "MarkdownV2"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::media::ParseMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Parse mode written for captioned attachments that do not set their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_parse_mode: Option<ParseMode>,
}

impl EncoderConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or has unknown values.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse media encoder config")
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}
