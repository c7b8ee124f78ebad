use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::FeatureRow;
use crate::geojson::{DocumentError, feature_rows, parse_document};

/// Failure to turn one input file into report rows
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document {}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

impl FileError {
    /// Malformed content, as opposed to an I/O failure
    pub fn is_malformed(&self) -> bool {
        matches!(self, FileError::Document { .. })
    }
}

/// Read, parse and measure one document
///
/// Rows carry the file name only, not the folder, and are numbered from 1.
pub fn process_file(path: &Path) -> Result<Vec<FeatureRow>, FileError> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_document(&bytes)
        .and_then(|document| feature_rows(&file_name, &document))
        .map_err(|source| FileError::Document {
            path: path.to_path_buf(),
            source,
        })
}
