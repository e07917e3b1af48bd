//! Batch decoding of many files, used by the command-line front end.
//!
//! Each path is decoded with its own file handle, so paths are processed in
//! parallel on a rayon pool without any shared state.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dispatch::decode_path;
use crate::types::{Dimension, ImageFormat};

/// Options for a batch scan
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Descend into subdirectories of directory inputs
    pub recursive: bool,
    /// Worker threads (0 = rayon's global pool)
    pub threads: usize,
    /// Keep entries for files whose dimensions could not be read
    pub include_unrecognized: bool,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_unrecognized(mut self, include: bool) -> Self {
        self.include_unrecognized = include;
        self
    }
}

/// Outcome for one scanned file
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub format: Option<ImageFormat>,
    #[serde(flatten)]
    pub dimension: Dimension,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanEntry {
    pub fn is_recognized(&self) -> bool {
        self.error.is_none()
    }
}

/// One tab-separated report line: path, format and dimensions, or path and
/// the failure reason.
impl fmt::Display for ScanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(format) = self.format {
            write!(f, "{}\t{:<4}\t{}", self.path.display(), format, self.dimension)
        } else {
            let error = self.error.as_deref().unwrap_or_default();
            write!(f, "{}\t-\t{}", self.path.display(), error)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSummary {
    pub total: usize,
    pub recognized: usize,
    pub failed: usize,
    pub by_format: BTreeMap<&'static str, usize>,
}

impl ScanSummary {
    pub fn from_entries(entries: &[ScanEntry]) -> Self {
        let mut summary = Self {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            match entry.format {
                Some(format) if entry.is_recognized() => {
                    summary.recognized += 1;
                    *summary.by_format.entry(format.extension()).or_insert(0) += 1;
                }
                _ => summary.failed += 1,
            }
        }

        summary
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub entries: Vec<ScanEntry>,
    pub summary: ScanSummary,
}

/// Expands directory inputs into the regular files they contain.
///
/// File inputs are kept as given. Directory listings are sorted so output is
/// stable across runs.
pub fn collect_paths(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if input.is_dir() {
            collect_dir(input, recursive, &mut paths)?;
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}

/// Symlinked directories are not followed, so a link back to an ancestor
/// cannot make the walk revisit it. Symlinked files are kept.
fn collect_dir(dir: &Path, recursive: bool, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut children = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {:?}", dir))?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to list directory {:?}", dir))?;
    children.sort_by(|a, b| a.0.cmp(&b.0));

    for (child, file_type) in children {
        if file_type.is_dir() {
            if recursive {
                collect_dir(&child, recursive, out)?;
            }
        } else if file_type.is_file() || (file_type.is_symlink() && child.is_file()) {
            out.push(child);
        }
    }
    Ok(())
}

/// Decodes one path into a report entry.
pub fn scan_path(path: &Path) -> ScanEntry {
    match decode_path(path) {
        Ok(info) => ScanEntry {
            path: path.to_path_buf(),
            format: Some(info.format),
            dimension: info.dimension,
            error: None,
        },
        Err(e) => {
            tracing::debug!(path = ?path, kind = e.kind(), "skipping: {e}");
            ScanEntry {
                path: path.to_path_buf(),
                format: None,
                dimension: Dimension::EMPTY,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Decodes every path in parallel. Output order follows input order.
///
/// The summary always counts every path, including the ones dropped from
/// `entries` when unrecognized files are not kept.
pub fn scan_paths(paths: &[PathBuf], options: &ScanOptions) -> Result<ScanReport> {
    let run = || -> Vec<ScanEntry> { paths.par_iter().map(|path| scan_path(path)).collect() };

    let mut entries = if options.threads > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()
            .context("Failed to build worker pool")?;
        pool.install(run)
    } else {
        run()
    };

    let summary = ScanSummary::from_entries(&entries);
    if !options.include_unrecognized {
        entries.retain(ScanEntry::is_recognized);
    }

    tracing::info!(
        total = summary.total,
        recognized = summary.recognized,
        "scan finished"
    );

    Ok(ScanReport { entries, summary })
}
