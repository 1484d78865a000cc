// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed read access to a resolved configuration.
//!
//! This module defines the `ConfigurationService` trait. Implementors only supply
//! [`ConfigurationService::get_raw`]; every typed accessor is a provided method
//! built on the generic [`ConfigurationService::get_or_fail`].
//!
//! Each supported type comes in three flavours:
//!
//! * `get_T(key)` returns the type's zero value if the key is missing or unparseable
//! * `get_T_or_default(key, default)` returns `default` under the same conditions
//! * `get_T_or_fail(key)` reports [`ConfigError::KeyNotFound`] or
//!   [`ConfigError::ValueParse`]; `unwrap_or_default()` recovers the zero value

use crate::domain::errors::{ConfigError, Result};
use crate::domain::value::{parse_value, split_list, FromConfigValue};

/// Read-only access to resolved configuration values.
///
/// # Examples
///
/// ```rust
/// use layercfg::domain::ConfigurationService;
/// use std::collections::HashMap;
///
/// struct Fixed(HashMap<String, String>);
///
/// impl ConfigurationService for Fixed {
///     fn get_raw(&self, key: &str) -> Option<&str> {
///         self.0.get(key).map(String::as_str)
///     }
/// }
///
/// let config = Fixed(HashMap::from([("server.port".to_string(), "9090".to_string())]));
/// assert_eq!(config.get_int_or_default("server.port", 8080), 9090);
/// assert_eq!(config.get_int_or_default("missing", 8080), 8080);
/// assert!(config.get_string_or_fail("missing").is_err());
/// ```
pub trait ConfigurationService {
    /// Returns the stored string for `key`, if present.
    fn get_raw(&self, key: &str) -> Option<&str>;

    /// Returns whether `key` is present, regardless of whether its value parses.
    fn exists(&self, key: &str) -> bool {
        self.get_raw(key).is_some()
    }

    /// Parses the value of `key` as `T`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::KeyNotFound`] if the key is absent
    /// * [`ConfigError::ValueParse`] if the value is not a valid `T`
    fn get_or_fail<T: FromConfigValue>(&self, key: &str) -> Result<T>
    where
        Self: Sized,
    {
        let raw = self.get_raw(key).ok_or_else(|| ConfigError::KeyNotFound {
            key: key.to_string(),
        })?;
        parse_value(key, raw)
    }

    /// Parses the value of `key` as `T`, falling back to `default`.
    fn get_or<T: FromConfigValue>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        self.get_or_fail(key).unwrap_or(default)
    }

    /// Parses the value of `key` as `T`, falling back to `T::default()`.
    fn get_or_zero<T: FromConfigValue + Default>(&self, key: &str) -> T
    where
        Self: Sized,
    {
        self.get_or_fail(key).unwrap_or_default()
    }

    /// Returns the value of `key` as a boolean, or `false`.
    fn get_bool(&self, key: &str) -> bool
    where
        Self: Sized,
    {
        self.get_or_zero(key)
    }

    /// Returns the value of `key` as a boolean, or `default`.
    fn get_bool_or_default(&self, key: &str, default: bool) -> bool
    where
        Self: Sized,
    {
        self.get_or(key, default)
    }

    /// Returns the value of `key` as a boolean.
    fn get_bool_or_fail(&self, key: &str) -> Result<bool>
    where
        Self: Sized,
    {
        self.get_or_fail(key)
    }

    /// Returns the value of `key` as an integer, or `0`.
    fn get_int(&self, key: &str) -> i64
    where
        Self: Sized,
    {
        self.get_or_zero(key)
    }

    /// Returns the value of `key` as an integer, or `default`.
    fn get_int_or_default(&self, key: &str, default: i64) -> i64
    where
        Self: Sized,
    {
        self.get_or(key, default)
    }

    /// Returns the value of `key` as an integer.
    fn get_int_or_fail(&self, key: &str) -> Result<i64>
    where
        Self: Sized,
    {
        self.get_or_fail(key)
    }

    /// Returns the value of `key` as a float, or `0.0`.
    fn get_float(&self, key: &str) -> f64
    where
        Self: Sized,
    {
        self.get_or_zero(key)
    }

    /// Returns the value of `key` as a float, or `default`.
    fn get_float_or_default(&self, key: &str, default: f64) -> f64
    where
        Self: Sized,
    {
        self.get_or(key, default)
    }

    /// Returns the value of `key` as a float.
    fn get_float_or_fail(&self, key: &str) -> Result<f64>
    where
        Self: Sized,
    {
        self.get_or_fail(key)
    }

    /// Returns the value of `key`, or the empty string.
    fn get_string(&self, key: &str) -> String
    where
        Self: Sized,
    {
        self.get_or_zero(key)
    }

    /// Returns the value of `key`, or `default`.
    fn get_string_or_default(&self, key: &str, default: &str) -> String
    where
        Self: Sized,
    {
        self.get_or(key, default.to_string())
    }

    /// Returns the value of `key`.
    fn get_string_or_fail(&self, key: &str) -> Result<String>
    where
        Self: Sized,
    {
        self.get_or_fail(key)
    }

    /// Returns the value of `key` split on `separator`, or an empty list.
    fn get_string_slice(&self, key: &str, separator: &str) -> Vec<String>
    where
        Self: Sized,
    {
        self.get_string_slice_or_fail(key, separator)
            .unwrap_or_default()
    }

    /// Returns the value of `key` split on `separator`, or `default`.
    fn get_string_slice_or_default(
        &self,
        key: &str,
        separator: &str,
        default: Vec<String>,
    ) -> Vec<String>
    where
        Self: Sized,
    {
        self.get_string_slice_or_fail(key, separator)
            .unwrap_or(default)
    }

    /// Returns the value of `key` split on `separator`.
    ///
    /// An empty value yields an empty list.
    fn get_string_slice_or_fail(&self, key: &str, separator: &str) -> Result<Vec<String>>
    where
        Self: Sized,
    {
        let raw: String = self.get_or_fail(key)?;
        Ok(split_list(&raw, separator))
    }
}
