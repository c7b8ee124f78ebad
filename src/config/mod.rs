use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::scan::DEFAULT_EXTENSIONS;

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}

fn default_skip_invalid() -> bool {
    false
}

fn default_verbose() -> bool {
    false
}

/// Settings read from `holereport.toml`. Command-line flags take precedence.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// File name suffixes to scan, with or without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_skip_invalid")]
    pub skip_invalid: bool,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            output: None,
            extensions: default_extensions(),
            skip_invalid: default_skip_invalid(),
            verbose: default_verbose(),
        }
    }
}

impl FileConfig {
    /// First parseable config file from the standard locations
    ///
    /// Files that exist but fail to parse are reported and passed over.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        log::debug!("using config file {}", path.display());
                        return Some(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly requested config file. Unlike [`FileConfig::load`],
    /// a missing or invalid file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("holereport.toml"));
    paths.push(PathBuf::from(".holereport.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("holereport").join("config.toml"));
        paths.push(config_dir.join("holereport.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".holereport.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_for_empty_file() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.output.is_none());
        assert_eq!(config.extensions, vec![".json", ".geojson"]);
        assert!(!config.skip_invalid);
        assert!(!config.verbose);
    }

    #[test]
    fn test_parse_all_fields() {
        let config: FileConfig = toml::from_str(
            r#"
            output = "reports/holes.csv"
            extensions = ["geojson", ".topojson"]
            skip_invalid = true
            verbose = true
            "#,
        )
        .unwrap();

        assert_eq!(config.output, Some(PathBuf::from("reports/holes.csv")));
        assert_eq!(config.extensions, vec!["geojson", ".topojson"]);
        assert!(config.skip_invalid);
        assert!(config.verbose);
    }

    #[test]
    fn test_load_from() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holereport.toml");
        fs::write(&path, "skip_invalid = true\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert!(config.skip_invalid);
        assert_eq!(config.extensions, default_extensions());
    }

    #[test]
    fn test_load_from_missing_or_invalid() {
        let dir = tempdir().unwrap();

        let missing = FileConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(missing.to_string().contains("not found"));

        let path = dir.path().join("bad.toml");
        fs::write(&path, "skip_invalid = \"sometimes\"\n").unwrap();
        let invalid = FileConfig::load_from(&path).unwrap_err();
        assert!(invalid.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_config_paths_start_in_working_dir() {
        let paths = get_config_paths();
        assert_eq!(paths[0], PathBuf::from("holereport.toml"));
        assert_eq!(paths[1], PathBuf::from(".holereport.toml"));
    }
}
