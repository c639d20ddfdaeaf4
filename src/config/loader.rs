//! Config file loading.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

use super::schema::ReportConfig;

/// Load a report config file.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist.
/// Returns `ConfigParse` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::from_read(path, e))?;
    tracing::debug!("Loading config from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into [`ReportConfig`].
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ReportConfig> {
    if content.trim().is_empty() {
        return Ok(ReportConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn load_config_file_reads_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.yml");
        fs::write(&path, "output: out.html\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.output, Some(PathBuf::from("out.html")));
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("nope.yml"));
        assert!(matches!(result, Err(ReportError::FileNotFound { .. })));
    }

    #[test]
    fn parse_config_invalid_yaml() {
        let result = parse_config("output: [", Path::new("bad.yml"));
        match result {
            Err(ReportError::ConfigParse { path, .. }) => {
                assert_eq!(path, PathBuf::from("bad.yml"));
            }
            other => panic!("expected ConfigParse, got {:?}", other),
        }
    }

    #[test]
    fn parse_config_empty_is_default() {
        let config = parse_config("\n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, ReportConfig::default());
    }
}
