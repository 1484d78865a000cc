// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Errors fall into two groups. Build-time errors (source loading, delimiter
//! validation, placeholder resolution) abort construction of a
//! [`Configuration`](crate::service::Configuration) entirely. Accessor errors
//! (`KeyNotFound`, `ValueParse`) are only produced by the `_or_fail` accessors and
//! are local to the call that produced them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// This enum is marked as `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use layercfg::domain::errors::ConfigError;
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::KeyNotFound {
///         key: "database.host".to_string(),
///     })
/// }
///
/// assert!(lookup().unwrap_err().is_accessor_error());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The requested key is not present in the resolved configuration.
    #[error("Configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// The stored value could not be converted to the requested type.
    #[error("Failed to parse value '{raw_value}' of key '{key}' as {target_type}")]
    ValueParse {
        /// The key being converted
        key: String,
        /// The stored string that failed to parse
        raw_value: String,
        /// The name of the requested type
        target_type: &'static str,
    },

    /// A source could not produce its mapping.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceLoad {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A file-backed source points at a path that does not exist.
    #[error("Configuration source '{source_name}' not found: {}", path.display())]
    NotFound {
        /// The name of the source
        source_name: String,
        /// The missing path
        path: PathBuf,
    },

    /// Failed to parse the text of a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configured placeholder delimiters are unusable.
    #[error("Invalid placeholder delimiters '{open}' / '{close}': {reason}")]
    InvalidDelimiters {
        /// The opening delimiter
        open: String,
        /// The closing delimiter
        close: String,
        /// Why the pair was rejected
        reason: &'static str,
    },

    /// A value contains an opening delimiter with no matching closing delimiter.
    #[error("Malformed placeholder in value of key '{key}': {value}")]
    MalformedPlaceholder {
        /// The key whose value is malformed
        key: String,
        /// The offending value at the point the imbalance was found
        value: String,
    },

    /// A key transitively references itself.
    #[error("Cyclic placeholder reference detected at key '{key}'")]
    CyclicReference {
        /// The key found while it was still being resolved
        key: String,
    },

    /// A placeholder names a key that no source defines (strict mode only).
    #[error("Placeholder '{name}' in value of key '{key}' refers to an undefined key")]
    UnresolvedPlaceholder {
        /// The key whose value contains the placeholder
        key: String,
        /// The undefined key the placeholder names
        name: String,
    },
}

impl ConfigError {
    /// Returns `true` for errors produced by accessors rather than by the build.
    pub fn is_accessor_error(&self) -> bool {
        matches!(
            self,
            ConfigError::KeyNotFound { .. } | ConfigError::ValueParse { .. }
        )
    }

    /// Returns `true` if this error reports a missing source path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_found_error() {
        let error = ConfigError::KeyNotFound {
            key: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration key not found: test.key");
        assert!(error.is_accessor_error());
    }

    #[test]
    fn test_value_parse_error() {
        let error = ConfigError::ValueParse {
            key: "server.port".to_string(),
            raw_value: "eighty".to_string(),
            target_type: "integer",
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse value 'eighty' of key 'server.port' as integer"
        );
        assert!(error.is_accessor_error());
    }

    #[test]
    fn test_source_load_error() {
        let error = ConfigError::SourceLoad {
            source_name: "env".to_string(),
            message: "Failed to read environment".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'env' error: Failed to read environment"
        );
        assert!(!error.is_accessor_error());
    }

    #[test]
    fn test_not_found_error() {
        let error = ConfigError::NotFound {
            source_name: "properties-file".to_string(),
            path: PathBuf::from("/etc/app/app.properties"),
        };
        assert!(error.is_not_found());
        assert!(error.to_string().contains("/etc/app/app.properties"));
    }

    #[test]
    fn test_only_missing_paths_are_not_found() {
        let load = ConfigError::SourceLoad {
            source_name: "properties-file".to_string(),
            message: "Failed to read configuration file: app.properties".to_string(),
            source: Some(Box::new(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            ))),
        };
        assert!(!load.is_not_found());

        let parse = ConfigError::ParseError {
            message: "line 1: empty key".to_string(),
            source: None,
        };
        assert!(!parse.is_not_found());
    }

    #[test]
    fn test_cyclic_reference_error() {
        let error = ConfigError::CyclicReference {
            key: "a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Cyclic placeholder reference detected at key 'a'"
        );
    }

    #[test]
    fn test_malformed_placeholder_error() {
        let error = ConfigError::MalformedPlaceholder {
            key: "url".to_string(),
            value: "http://${host".to_string(),
        };
        assert!(error.to_string().contains("url"));
        assert!(error.to_string().contains("http://${host"));
    }

    #[test]
    fn test_invalid_delimiters_error() {
        let error = ConfigError::InvalidDelimiters {
            open: "".to_string(),
            close: "}".to_string(),
            reason: "delimiters must not be empty",
        };
        assert!(error.to_string().contains("must not be empty"));
    }
}
