use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extensions picked up when no others are configured
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".json", ".geojson"];

/// Normalize a configured extension to lowercase with a leading dot
pub fn normalize_extension(extension: &str) -> String {
    let lower = extension.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}

/// Case-insensitive suffix match of a file name against the extensions
///
/// `extensions` must already be normalized.
pub fn has_input_extension(file_name: &str, extensions: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext.as_str()))
}

/// List the input documents of a folder
///
/// Non-recursive. Only regular files (following symlinks) with a matching
/// extension are returned, sorted by file name so every run processes them in
/// the same order regardless of platform directory order.
pub fn list_input_files(folder: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(folder)
        .with_context(|| format!("Failed to read input folder: {}", folder.display()))?;

    let mut files = Vec::new();

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to list input folder: {}", folder.display()))?;
        let path = entry.path();

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !has_input_extension(&name, extensions) {
            log::trace!("ignoring {}", path.display());
            continue;
        }

        // fs::metadata follows symlinks, DirEntry::file_type doesn't
        let metadata = std::fs::metadata(&path)
            .with_context(|| format!("Failed to stat input file: {}", path.display()))?;
        if !metadata.is_file() {
            log::trace!("ignoring non-file {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn defaults() -> Vec<String> {
        DEFAULT_EXTENSIONS
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect()
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension("json"), ".json");
        assert_eq!(normalize_extension(".GeoJSON"), ".geojson");
        assert_eq!(normalize_extension(" topojson "), ".topojson");
    }

    #[test]
    fn test_has_input_extension() {
        let extensions = defaults();

        assert!(has_input_extension("lakes.geojson", &extensions));
        assert!(has_input_extension("LAKES.GEOJSON", &extensions));
        assert!(has_input_extension("parcels.Json", &extensions));
        assert!(!has_input_extension("notes.txt", &extensions));
        assert!(!has_input_extension("archive.json.gz", &extensions));
        assert!(!has_input_extension("jsonfile", &extensions));
    }

    #[test]
    fn test_list_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.GEOJSON"), "{}").unwrap();
        fs::write(dir.path().join("c.txt"), "{}").unwrap();
        fs::create_dir(dir.path().join("nested.json")).unwrap();
        fs::write(dir.path().join("nested.json").join("inner.json"), "{}").unwrap();

        let files = list_input_files(dir.path(), &defaults()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.GEOJSON", "b.json"]);
    }

    #[test]
    fn test_custom_extensions() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("b.topojson"), "{}").unwrap();

        let files = list_input_files(dir.path(), &[normalize_extension("topojson")]).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.topojson"));
    }

    #[test]
    fn test_missing_folder_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = list_input_files(&missing, &defaults()).unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
