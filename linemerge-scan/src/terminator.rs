//! Line terminator configuration
//!
//! The terminator is always an explicit value. Nothing here consults the
//! host platform, so a file produced on one system scans identically on
//! another.

use crate::error::{Result, ScanError};
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;

/// Byte sequence marking a line boundary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Terminator {
    bytes: SmallVec<[u8; 4]>,
}

impl Terminator {
    /// `"\n"`
    pub fn lf() -> Self {
        Self {
            bytes: SmallVec::from_slice(b"\n"),
        }
    }

    /// `"\r\n"`
    pub fn crlf() -> Self {
        Self {
            bytes: SmallVec::from_slice(b"\r\n"),
        }
    }

    /// Create a terminator from an arbitrary non-empty byte sequence
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Err(ScanError::Config("terminator must not be empty".into()));
        }
        Ok(Self {
            bytes: SmallVec::from_slice(bytes),
        })
    }

    /// Raw terminator bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length of the terminator in bytes
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the terminator occurs at `pos` within `valid`
    ///
    /// A terminator that would run past the end of `valid` never matches,
    /// so a sequence truncated at end of data is treated as line content.
    pub fn matches_at(&self, valid: &[u8], pos: usize) -> bool {
        match pos.checked_add(self.bytes.len()) {
            Some(end) if end <= valid.len() => valid[pos..end] == self.bytes[..],
            _ => false,
        }
    }
}

impl Default for Terminator {
    fn default() -> Self {
        Self::lf()
    }
}

impl TryFrom<String> for Terminator {
    type Error = ScanError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value.as_bytes())
    }
}

impl TryFrom<&str> for Terminator {
    type Error = ScanError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value.as_bytes())
    }
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.bytes.escape_ascii())
    }
}
