pub mod file;
pub mod folder;

pub use file::{FileError, process_file};
pub use folder::{DEFAULT_EXTENSIONS, has_input_extension, list_input_files, normalize_extension};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::domain::FeatureRow;

/// How a folder scan selects files and treats malformed ones
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Normalized extensions, see [`normalize_extension`]
    pub extensions: Vec<String>,
    /// Skip malformed documents with a warning instead of failing the scan.
    /// I/O errors are fatal either way.
    pub skip_invalid: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect(),
            skip_invalid: false,
        }
    }
}

impl ScanOptions {
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    pub fn with_skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }
}

/// Rows of a whole scan, in file order then document order
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub rows: Vec<FeatureRow>,
    pub files_processed: usize,
    /// Malformed files left out under `skip_invalid`
    pub files_skipped: Vec<PathBuf>,
}

/// Process the given files in order
///
/// `on_file` is called after each file, processed or skipped, so callers can
/// drive a progress display.
pub fn scan_files<F>(files: &[PathBuf], options: &ScanOptions, mut on_file: F) -> Result<ScanOutcome>
where
    F: FnMut(&Path),
{
    let mut outcome = ScanOutcome::default();

    for path in files {
        match process_file(path) {
            Ok(rows) => {
                log::debug!("{}: {} polygon(s)", path.display(), rows.len());
                outcome.rows.extend(rows);
                outcome.files_processed += 1;
            }
            Err(e) if options.skip_invalid && e.is_malformed() => {
                log::warn!("skipping {}: {:#}", path.display(), anyhow::Error::from(e));
                outcome.files_skipped.push(path.clone());
            }
            Err(e) => return Err(e.into()),
        }
        on_file(path);
    }

    Ok(outcome)
}
