//! File-backed line sources
//!
//! A [`FileLineSource`] remembers a path and hands out a brand-new
//! [`LineScanner`] every time a pass over the file is requested. Passes never
//! share a handle, so any number of them can run side by side.

use crate::config::ScannerConfig;
use crate::error::{Result, ScanError};
use crate::scanner::LineScanner;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Factory producing independent scanners over one file
#[derive(Debug, Clone)]
pub struct FileLineSource {
    path: PathBuf,
    config: ScannerConfig,
}

impl FileLineSource {
    /// Create a source with the default scanner configuration
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            config: ScannerConfig::default(),
        }
    }

    /// Create a source whose scanners use `config`
    pub fn with_config<P: Into<PathBuf>>(path: P, config: ScannerConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Path this source reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configuration handed to every scanner
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Open a new handle on the file and return a scanner over it
    ///
    /// The returned scanner owns its handle; the source keeps no reference
    /// to it.
    pub fn scan(&self) -> Result<LineScanner<File>> {
        let file = File::open(&self.path).map_err(|source| ScanError::Open {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("opened {} for scanning", self.path.display());

        LineScanner::with_config(file, self.config.clone())
    }
}

impl IntoIterator for &FileLineSource {
    type Item = Result<String>;
    type IntoIter = Pass;

    /// One fresh pass over the file; an open failure is yielded as the
    /// single item
    fn into_iter(self) -> Self::IntoIter {
        match self.scan() {
            Ok(scanner) => Pass::Scanning(scanner),
            Err(e) => Pass::Failed(Some(e)),
        }
    }
}

/// A single pass over a [`FileLineSource`]
#[derive(Debug)]
pub enum Pass {
    /// File opened; lines are read on demand
    Scanning(LineScanner<File>),
    /// Opening failed; the error is yielded once
    Failed(Option<ScanError>),
}

impl Iterator for Pass {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Pass::Scanning(scanner) => scanner.next(),
            Pass::Failed(error) => error.take().map(Err),
        }
    }
}
