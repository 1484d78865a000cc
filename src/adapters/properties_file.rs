// SPDX-License-Identifier: MIT OR Apache-2.0

//! Properties file configuration source adapter.
//!
//! The format is line based:
//!
//! ```text
//! # comment
//! ! also a comment
//! server.host = localhost
//! server.url=http://${server.host}:8080
//! ```
//!
//! Blank lines are ignored, each remaining line is split at its first `=`, and
//! both halves are trimmed. Values are kept verbatim otherwise, so placeholders
//! pass through untouched for the resolver.

use crate::adapters::file::{default_location, read_config_file};
use crate::domain::{ConfigError, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SOURCE_NAME: &str = "properties-file";

/// Parser for `key=value` properties text.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::PropertiesParser;
/// use layercfg::ports::ConfigParser;
///
/// let parser = PropertiesParser::new();
/// let result = parser.parse("# db\ndatabase.host = localhost\n").unwrap();
/// assert_eq!(result.get("database.host"), Some(&"localhost".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new properties parser.
    pub fn new() -> Self {
        PropertiesParser
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut result = HashMap::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::ParseError {
                message: format!("line {}: expected 'key=value', found '{}'", index + 1, line),
                source: None,
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::ParseError {
                    message: format!("line {}: empty key", index + 1),
                    source: None,
                });
            }

            result.insert(key.to_string(), value.trim().to_string());
        }

        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["properties"]
    }
}

/// Configuration source adapter for properties files.
///
/// The file is read when the source is loaded, not when the adapter is created,
/// so a missing file surfaces as [`ConfigError::NotFound`] during the build,
/// where it can be ignored per source.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::PropertiesFileAdapter;
///
/// // Load from a specific file
/// let adapter = PropertiesFileAdapter::from_file("/etc/myapp/app.properties");
///
/// // Load from default OS location
/// let adapter = PropertiesFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PropertiesFileAdapter {
    /// Path to the properties file
    file_path: PathBuf,
    /// Properties parser
    parser: PropertiesParser,
}

impl PropertiesFileAdapter {
    /// Creates an adapter for a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser: PropertiesParser::new(),
        }
    }

    /// Creates an adapter for `config.properties` in the OS-appropriate
    /// configuration directory.
    ///
    /// This method uses the `directories` crate to determine the appropriate
    /// configuration directory for the current operating system.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.properties")
    }

    /// Creates an adapter for a custom file name in the default location.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let path = default_location(SOURCE_NAME, app_name, qualifier, filename)?;
        Ok(Self::from_file(path))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigSource for PropertiesFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let content = read_config_file(SOURCE_NAME, &self.file_path)?;
        self.parser.parse(&content)
    }
}
