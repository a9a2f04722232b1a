//! TOML configuration for scanning and merging
//!
//! ```toml
//! [scanner]
//! page_size = 65536
//! terminator = "\r\n"
//! io_error_policy = "propagate"
//!
//! [merge]
//! frontier = "heap"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::error::{Error, Result};
use linemerge_kmerge::MergeConfig;
use linemerge_scan::ScannerConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default configuration shipped with the crate
const DEFAULT_CONFIG: &str = include_str!("../configs/default.toml");

/// Combined scanner and merge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Settings for every scanner opened over a run file
    pub scanner: ScannerConfig,
    /// Settings for the merge
    pub merge: MergeConfig,
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| Error::Configuration(format!("failed to parse TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// The configuration embedded in the crate
    pub fn embedded_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.scanner
            .validate()
            .map_err(|e| Error::Configuration(e.to_string()))
    }
}
