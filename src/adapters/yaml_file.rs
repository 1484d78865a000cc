// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML file configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from YAML
//! files. Documents are flattened into dotted keys; values are always strings.

use crate::adapters::file::{default_location, read_config_file};
use crate::domain::{ConfigError, Result};
use crate::ports::{ConfigParser, ConfigSource};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// This parser converts YAML documents into flat key-value maps using dot
/// notation for nested mappings and indices for sequences.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::YamlParser;
/// use layercfg::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "database:\n  host: localhost\n  port: 5432";
/// let result = parser.parse(yaml_content).unwrap();
/// assert_eq!(result.get("database.host"), Some(&"localhost".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    /// Flattens a YAML value into a flat map with dot notation keys.
    fn flatten_yaml(value: &serde_yaml::Value, prefix: &str, result: &mut HashMap<String, String>) {
        match value {
            serde_yaml::Value::Mapping(map) => {
                for (key, val) in map {
                    let key_str = match key {
                        serde_yaml::Value::String(s) => s.clone(),
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        _ => continue,
                    };
                    let new_prefix = if prefix.is_empty() {
                        key_str
                    } else {
                        format!("{}.{}", prefix, key_str)
                    };
                    Self::flatten_yaml(val, &new_prefix, result);
                }
            }
            serde_yaml::Value::Sequence(seq) => {
                for (i, val) in seq.iter().enumerate() {
                    let new_prefix = format!("{}.{}", prefix, i);
                    Self::flatten_yaml(val, &new_prefix, result);
                }
            }
            serde_yaml::Value::String(s) => {
                result.insert(prefix.to_string(), s.clone());
            }
            serde_yaml::Value::Number(n) => {
                result.insert(prefix.to_string(), n.to_string());
            }
            serde_yaml::Value::Bool(b) => {
                result.insert(prefix.to_string(), b.to_string());
            }
            serde_yaml::Value::Null => {
                result.insert(prefix.to_string(), String::new());
            }
            serde_yaml::Value::Tagged(tagged) => {
                Self::flatten_yaml(&tagged.value, prefix, result);
            }
        }
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        let mut result = HashMap::new();
        if !value.is_null() {
            Self::flatten_yaml(&value, "", &mut result);
        }
        Ok(result)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

/// Configuration source adapter for YAML files.
///
/// Like the properties adapter, the file is read on load so a missing file can be
/// ignored by the builder.
///
/// # Examples
///
/// ```rust,no_run
/// use layercfg::adapters::YamlFileAdapter;
///
/// let adapter = YamlFileAdapter::from_file("/path/to/config.yaml");
/// let adapter = YamlFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct YamlFileAdapter {
    /// Path to the YAML file
    file_path: PathBuf,
    /// YAML parser
    parser: YamlParser,
}

impl YamlFileAdapter {
    /// Creates an adapter for a specific file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file_path: path.as_ref().to_path_buf(),
            parser: YamlParser::new(),
        }
    }

    /// Creates an adapter for `config.yaml` in the OS-appropriate configuration
    /// directory.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.yaml")
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

impl ConfigSource for YamlFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let content = read_config_file(SOURCE_NAME, &self.file_path)?;
        self.parser.parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_parser_simple() {
        let result = YamlParser::new().parse("key: value").unwrap();
        assert_eq!(result.get("key"), Some(&"value".to_string()));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let yaml = r#"
app:
  database:
    connection:
      host: localhost
      port: 5432
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(
            result.get("app.database.connection.host"),
            Some(&"localhost".to_string())
        );
        assert_eq!(
            result.get("app.database.connection.port"),
            Some(&"5432".to_string())
        );
    }

    #[test]
    fn test_yaml_parser_array() {
        let yaml = r#"
servers:
  - server1
  - server2
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("servers.0"), Some(&"server1".to_string()));
        assert_eq!(result.get("servers.1"), Some(&"server2".to_string()));
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let yaml = r#"
string_value: hello
number_value: 42
bool_value: true
null_value: null
"#;
        let result = YamlParser::new().parse(yaml).unwrap();

        assert_eq!(result.get("string_value"), Some(&"hello".to_string()));
        assert_eq!(result.get("number_value"), Some(&"42".to_string()));
        assert_eq!(result.get("bool_value"), Some(&"true".to_string()));
        assert_eq!(result.get("null_value"), Some(&"".to_string()));
    }

    #[test]
    fn test_yaml_parser_keeps_placeholders() {
        let result = YamlParser::new()
            .parse("url: \"http://${host}:${port}\"")
            .unwrap();
        assert_eq!(result.get("url"), Some(&"http://${host}:${port}".to_string()));
    }

    #[test]
    fn test_yaml_parser_empty_document() {
        assert!(YamlParser::new().parse("").unwrap().is_empty());
    }

    #[test]
    fn test_yaml_parser_invalid() {
        assert!(YamlParser::new().parse("invalid: yaml: content:").is_err());
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::new();
        let extensions = parser.supported_extensions();

        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&"yaml"));
        assert!(extensions.contains(&"yml"));
    }

    #[test]
    fn test_yaml_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "database:\n  host: localhost\n  port: 5432").unwrap();

        let adapter = YamlFileAdapter::from_file(temp_file.path());
        assert_eq!(adapter.name(), "yaml-file");
        assert_eq!(adapter.file_path(), temp_file.path());

        let values = adapter.load().unwrap();
        assert_eq!(values["database.host"], "localhost");
        assert_eq!(values["database.port"], "5432");
    }

    #[test]
    fn test_yaml_adapter_nonexistent_file() {
        let adapter = YamlFileAdapter::from_file("/nonexistent/path/to/config.yaml");
        assert!(adapter.load().unwrap_err().is_not_found());
    }
}
