//! Merging sorted run files
//!
//! Wires one [`FileLineSource`] per run into a fallible k-way merge. Every
//! run gets its own scanner and window; the merge pulls lines on demand, so
//! memory is bounded by fan-in × window size plus the longest lines.

use crate::config::Config;
use crate::error::Result;
use linemerge_kmerge::{try_merge_with_config, AnyFrontier, MergeConfig, TryKWayMerge};
use linemerge_scan::{FileLineSource, LineScanner, ScanError};
use std::fs::File;
use std::path::PathBuf;

/// Lazy merge over the lines of several sorted files
pub type FileMerge = TryKWayMerge<LineScanner<File>, AnyFrontier<String>>;

/// Open every source and merge their lines
///
/// All files are opened before anything is read, so a missing run fails
/// here rather than partway through the output.
pub fn merge_sources(sources: &[FileLineSource], config: &MergeConfig) -> Result<FileMerge> {
    let scanners = sources
        .iter()
        .map(FileLineSource::scan)
        .collect::<std::result::Result<Vec<_>, ScanError>>()?;
    log::debug!("merging {} runs", scanners.len());

    Ok(try_merge_with_config(scanners, config))
}

/// Merge the lines of sorted files at `paths`
///
/// ```rust,no_run
/// use linemerge::{merge_files, Config};
///
/// let merged = merge_files(["run-0.txt", "run-1.txt"], &Config::default())?;
/// for line in merged {
///     println!("{}", line?);
/// }
/// # Ok::<(), linemerge::Error>(())
/// ```
pub fn merge_files<I, P>(paths: I, config: &Config) -> Result<FileMerge>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let sources: Vec<FileLineSource> = paths
        .into_iter()
        .map(|path| FileLineSource::with_config(path, config.scanner.clone()))
        .collect();
    merge_sources(&sources, &config.merge)
}
