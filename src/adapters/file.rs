// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared file handling for file-backed sources.

use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Maximum allowed size for a configuration file (10MB).
pub(crate) const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Reads a configuration file as UTF-8 text.
///
/// A missing file is reported as [`ConfigError::NotFound`] so that the builder
/// can treat it as optional; every other failure is a
/// [`ConfigError::SourceLoad`].
pub(crate) fn read_config_file(source_name: &str, path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::NotFound {
                source_name: source_name.to_string(),
                path: path.to_path_buf(),
            }
        } else {
            load_error(source_name, "Failed to read file metadata", path, e)
        }
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceLoad {
            source_name: source_name.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(path)
        .map_err(|e| load_error(source_name, "Failed to read configuration file", path, e))?;

    tracing::debug!(
        source = source_name,
        path = %path.display(),
        bytes = content.len(),
        "Read configuration file"
    );

    Ok(content)
}

/// Returns `file_name` inside the OS-appropriate configuration directory.
pub(crate) fn default_location(
    source_name: &str,
    app_name: &str,
    qualifier: &str,
    file_name: &str,
) -> Result<PathBuf> {
    let proj_dirs =
        ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceLoad {
            source_name: source_name.to_string(),
            message: "Failed to determine project directories".to_string(),
            source: None,
        })?;

    Ok(proj_dirs.config_dir().join(file_name))
}

fn load_error(source_name: &str, what: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::SourceLoad {
        source_name: source_name.to_string(),
        message: format!(
            "{}: {}",
            what,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "key=value").unwrap();

        let content = read_config_file("test", file.path()).unwrap();
        assert_eq!(content, "key=value");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_config_file("test", Path::new("/nonexistent/dir/app.properties"))
            .unwrap_err();
        assert!(err.is_not_found());
        match err {
            ConfigError::NotFound { source_name, path } => {
                assert_eq!(source_name, "test");
                assert!(path.ends_with("app.properties"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_config_file("test", dir.path()).unwrap_err();
        assert!(!err.is_not_found());
        assert!(matches!(err, ConfigError::SourceLoad { source: Some(_), .. }));
    }

    #[test]
    fn test_default_location_uses_file_name() {
        if let Ok(path) = default_location("test", "layercfg-test", "org.example", "app.properties") {
            assert!(path.ends_with("app.properties"));
        }
    }
}
