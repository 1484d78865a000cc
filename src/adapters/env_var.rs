// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that reads configuration values from
//! environment variables.

use crate::domain::Result;
use crate::ports::ConfigSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration source adapter for environment variables.
///
/// This adapter reads configuration values from environment variables. It supports
/// optional prefix filtering (e.g., only read variables starting with "APP_") and
/// key transformation (lower-casing, converting underscores to dots). Key
/// normalization happens here, at the source boundary; the resolution engine
/// treats keys as case-sensitive.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::EnvVarAdapter;
///
/// // Read all environment variables
/// let adapter = EnvVarAdapter::new();
///
/// // Read only variables with a specific prefix, as lower-case dotted keys
/// let adapter = EnvVarAdapter::with_prefix("APP_").lowercase_keys(true);
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Whether to convert keys to lowercase
    lowercase_keys: bool,
    /// Whether to replace underscores with dots
    replace_underscores: bool,
    /// Fixed values used instead of the process environment
    preset: Option<HashMap<String, String>>,
}

impl EnvVarAdapter {
    /// Creates a new environment variable adapter without prefix filtering.
    ///
    /// This will read all environment variables available to the process.
    pub fn new() -> Self {
        Self {
            prefix: None,
            lowercase_keys: false,
            replace_underscores: true,
            preset: None,
        }
    }

    /// Creates a new environment variable adapter with prefix filtering.
    ///
    /// Only environment variables starting with the given prefix will be read.
    /// The prefix is stripped from the key when storing values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::adapters::EnvVarAdapter;
    ///
    /// let adapter = EnvVarAdapter::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::new()
        }
    }

    /// Sets whether to convert keys to lowercase.
    pub fn lowercase_keys(mut self, enabled: bool) -> Self {
        self.lowercase_keys = enabled;
        self
    }

    /// Sets whether to replace underscores with dots in keys.
    ///
    /// When enabled (default), `DATABASE_HOST` becomes `DATABASE.HOST`.
    pub fn replace_underscores(mut self, enabled: bool) -> Self {
        self.replace_underscores = enabled;
        self
    }

    /// Creates an adapter with pre-populated values for testing.
    ///
    /// **Note**: This method is primarily intended for testing. The values are
    /// returned as-is, without prefix filtering or key transformation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::adapters::EnvVarAdapter;
    /// use layercfg::ports::ConfigSource;
    /// use std::collections::HashMap;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("test.key".to_string(), "test_value".to_string());
    ///
    /// let adapter = EnvVarAdapter::with_values(values);
    /// assert_eq!(adapter.load().unwrap()["test.key"], "test_value");
    /// ```
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self {
            preset: Some(values),
            ..Self::new()
        }
    }

    /// Applies prefix filtering and key transformation to a variable name.
    fn transform_key(&self, key: String) -> Option<String> {
        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?.to_string(),
            None => key,
        };

        let mut transformed_key = key;
        if self.lowercase_keys {
            transformed_key = transformed_key.to_lowercase();
        }
        if self.replace_underscores {
            transformed_key = transformed_key.replace('_', ".");
        }
        Some(transformed_key)
    }

    fn collect<I>(&self, vars: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values = HashMap::new();

        for (key, value) in vars {
            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }

            if let Some(key) = self.transform_key(key) {
                values.insert(key, value);
            }
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?}, lowercase={}, replace_underscores={})",
            values.len(),
            self.prefix,
            self.lowercase_keys,
            self.replace_underscores
        );

        values
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        match &self.preset {
            Some(values) => Ok(values.clone()),
            // vars_os so that a single non-unicode variable doesn't abort the load
            None => Ok(self.collect(env::vars_os().filter_map(|(k, v)| {
                Some((k.into_string().ok()?, v.into_string().ok()?))
            }))),
        }
    }
}
