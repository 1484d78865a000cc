// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations shared by the integration tests.

#![allow(dead_code)]

use layercfg::domain::{ConfigError, Result};
use layercfg::ports::ConfigSource;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// How a mock source behaves when loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadBehavior {
    /// Returns its values.
    Succeed,
    /// Fails as if its backing file did not exist.
    NotFound,
    /// Fails with a generic load error.
    Fail,
}

/// A mock configuration source for testing.
///
/// This allows tests to easily create a source with predefined values and
/// a chosen load outcome.
#[derive(Debug, Clone)]
pub struct MockConfigSource {
    name: String,
    values: HashMap<String, String>,
    behavior: LoadBehavior,
}

impl MockConfigSource {
    /// Creates a new mock source with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
            behavior: LoadBehavior::Succeed,
        }
    }

    /// Adds a value to the mock source.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Makes the source report a missing file on load.
    pub fn not_found(mut self) -> Self {
        self.behavior = LoadBehavior::NotFound;
        self
    }

    /// Makes the source fail on load.
    pub fn failing(mut self) -> Self {
        self.behavior = LoadBehavior::Fail;
        self
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        match self.behavior {
            LoadBehavior::Succeed => Ok(self.values.clone()),
            LoadBehavior::NotFound => Err(ConfigError::NotFound {
                source_name: self.name.clone(),
                path: PathBuf::from(format!("/mock/{}", self.name)),
            }),
            LoadBehavior::Fail => Err(ConfigError::SourceLoad {
                source_name: self.name.clone(),
                message: "Mock load failure".to_string(),
                source: None,
            }),
        }
    }
}

/// Creates a temporary file with the given content and extension.
///
/// Returns a NamedTempFile that will be automatically deleted when dropped.
pub fn create_temp_file(content: &str, extension: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// Creates a mock configuration source with common test values.
pub fn create_test_source() -> MockConfigSource {
    MockConfigSource::new("test")
        .with_value("string.value", "test")
        .with_value("int.value", "42")
        .with_value("bool.value", "true")
        .with_value("float.value", "2.5")
        .with_value("list.value", "a,b,c")
}
