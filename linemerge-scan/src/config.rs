//! Scanner configuration

use crate::error::{Result, ScanError};
use crate::terminator::Terminator;
use serde::Deserialize;

/// Default configuration constants
pub mod defaults {
    /// Bytes fetched from the stream per page read (4KB)
    pub const PAGE_SIZE: usize = 4 * 1024;

    /// Starting capacity of the line accumulator in bytes
    pub const INITIAL_LINE_CAPACITY: usize = 1024;
}

/// What to do when a read from the underlying stream fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IoErrorPolicy {
    /// Surface the failure as [`ScanError::Io`] and stop scanning
    #[default]
    Propagate,
    /// Log the failure and report end of stream, as if the file ended there
    TreatAsEof,
}

/// Line scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Page size in bytes; the window holds two pages
    pub page_size: usize,
    /// Line terminator
    pub terminator: Terminator,
    /// Starting capacity of the line accumulator
    pub initial_line_capacity: usize,
    /// Handling of read failures
    pub io_error_policy: IoErrorPolicy,
    /// Skip a UTF-8 byte-order mark at the start of the stream
    pub strip_bom: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            terminator: Terminator::default(),
            initial_line_capacity: defaults::INITIAL_LINE_CAPACITY,
            io_error_policy: IoErrorPolicy::default(),
            strip_bom: true,
        }
    }
}

impl ScannerConfig {
    /// Create a configuration builder
    pub fn builder() -> ScannerConfigBuilder {
        ScannerConfigBuilder::default()
    }

    /// Validate the configuration
    ///
    /// The terminator must be strictly shorter than a page, so a match tested
    /// at or one past the first page's end fits inside the window. Matches
    /// starting later are tested again after the window cycles.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ScanError::Config(
                "page_size must be greater than 0".into(),
            ));
        }

        if self.terminator.len() >= self.page_size {
            return Err(ScanError::Config(format!(
                "terminator {} must be shorter than page_size ({})",
                self.terminator, self.page_size
            )));
        }

        if self.initial_line_capacity == 0 {
            return Err(ScanError::Config(
                "initial_line_capacity must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`ScannerConfig`]
#[derive(Debug, Default)]
pub struct ScannerConfigBuilder {
    page_size: Option<usize>,
    terminator: Option<Terminator>,
    initial_line_capacity: Option<usize>,
    io_error_policy: Option<IoErrorPolicy>,
    strip_bom: Option<bool>,
}

impl ScannerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size in bytes
    pub fn page_size(mut self, bytes: usize) -> Self {
        self.page_size = Some(bytes);
        self
    }

    /// Set the line terminator
    pub fn terminator(mut self, terminator: Terminator) -> Self {
        self.terminator = Some(terminator);
        self
    }

    /// Set the starting accumulator capacity
    pub fn initial_line_capacity(mut self, bytes: usize) -> Self {
        self.initial_line_capacity = Some(bytes);
        self
    }

    /// Set the I/O error policy
    pub fn io_error_policy(mut self, policy: IoErrorPolicy) -> Self {
        self.io_error_policy = Some(policy);
        self
    }

    /// Enable or disable byte-order mark stripping
    pub fn strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = Some(strip);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ScannerConfig> {
        let mut config = ScannerConfig::default();

        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(terminator) = self.terminator {
            config.terminator = terminator;
        }
        if let Some(capacity) = self.initial_line_capacity {
            config.initial_line_capacity = capacity;
        }
        if let Some(policy) = self.io_error_policy {
            config.io_error_policy = policy;
        }
        if let Some(strip) = self.strip_bom {
            config.strip_bom = strip;
        }

        config.validate()?;
        Ok(config)
    }
}
