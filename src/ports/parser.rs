// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the text of a
//! configuration file into flat key/value pairs.

use crate::domain::Result;
use std::collections::HashMap;

/// A trait for parsing configuration text.
///
/// File adapters are always constructed for one explicit format, so the parser is
/// chosen by the caller and never guessed from the file name.
/// `supported_extensions` is informational.
///
/// # Key Format
///
/// Parsers for hierarchical formats flatten nested structures using dot
/// notation. A YAML document like:
///
/// ```yaml
/// database:
///   host: localhost
///   port: 5432
/// ```
///
/// becomes `database.host = "localhost"` and `database.port = "5432"`.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigParser;
/// use layercfg::domain::Result;
/// use std::collections::HashMap;
///
/// /// One `key value` pair per line.
/// struct SpaceSeparated;
///
/// impl ConfigParser for SpaceSeparated {
///     fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once(' '))
///             .map(|(k, v)| (k.to_string(), v.to_string()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["conf"]
///     }
/// }
///
/// let parsed = SpaceSeparated.parse("port 8080").unwrap();
/// assert_eq!(parsed["port"], "8080");
/// ```
pub trait ConfigParser {
    /// Parses configuration text into a flat key/value map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`](crate::domain::ConfigError::ParseError)
    /// if the text is not valid for this format.
    fn parse(&self, content: &str) -> Result<HashMap<String, String>>;

    /// Returns the file extensions (without the leading dot) this format uses.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;

    // Accepts `key:value` lines only.
    struct ColonParser;

    impl ConfigParser for ColonParser {
        fn parse(&self, content: &str) -> Result<HashMap<String, String>> {
            content
                .lines()
                .map(|line| {
                    line.split_once(':')
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .ok_or_else(|| ConfigError::ParseError {
                            message: format!("missing ':' in '{}'", line),
                            source: None,
                        })
                })
                .collect()
        }

        fn supported_extensions(&self) -> &[&str] {
            &["colon", "col"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let result = ColonParser.parse("a:1\nb:2").unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_parser_parse_error() {
        assert!(matches!(
            ColonParser.parse("a=1"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_parser_empty_content() {
        assert!(ColonParser.parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(ColonParser.supported_extensions(), &["colon", "col"]);
    }
}
