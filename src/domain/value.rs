// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of stored strings into typed values.
//!
//! Every typed accessor funnels through [`parse_value`], which either yields the
//! converted value or a [`ConfigError::ValueParse`] describing what failed. The
//! lenient accessors simply discard that error.

use crate::domain::errors::{ConfigError, Result};

/// A type that can be read out of a resolved configuration value.
///
/// Implementations report failure with `None`; the caller attaches the key and
/// raw value when building the error.
///
/// # Examples
///
/// ```
/// use layercfg::domain::FromConfigValue;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Mode {
///     #[default]
///     Dev,
///     Prod,
/// }
///
/// impl FromConfigValue for Mode {
///     const TYPE_NAME: &'static str = "mode";
///
///     fn from_config_value(raw: &str) -> Option<Self> {
///         match raw {
///             "dev" => Some(Mode::Dev),
///             "prod" => Some(Mode::Prod),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Mode::from_config_value("prod"), Some(Mode::Prod));
/// ```
pub trait FromConfigValue: Sized {
    /// Human readable name used in parse errors.
    const TYPE_NAME: &'static str;

    /// Converts the raw string, or returns `None` if it is not a valid `Self`.
    fn from_config_value(raw: &str) -> Option<Self>;
}

/// Parses `raw` (the stored value of `key`) as `T`.
///
/// # Examples
///
/// ```
/// use layercfg::domain::value::parse_value;
///
/// let port: i64 = parse_value("server.port", "9090").unwrap();
/// assert_eq!(port, 9090);
///
/// let err = parse_value::<i64>("server.port", "ninety").unwrap_err();
/// assert!(err.to_string().contains("integer"));
/// ```
pub fn parse_value<T: FromConfigValue>(key: &str, raw: &str) -> Result<T> {
    T::from_config_value(raw).ok_or_else(|| ConfigError::ValueParse {
        key: key.to_string(),
        raw_value: raw.to_string(),
        target_type: T::TYPE_NAME,
    })
}

/// Splits a stored value on `separator`.
///
/// An empty value yields an empty list rather than a list holding one empty
/// string.
///
/// ```
/// use layercfg::domain::value::split_list;
///
/// assert_eq!(split_list("a,b,c", ","), vec!["a", "b", "c"]);
/// assert!(split_list("", ",").is_empty());
/// ```
pub fn split_list(raw: &str, separator: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![raw.to_string()];
    }
    raw.split(separator).map(str::to_string).collect()
}

impl FromConfigValue for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn from_config_value(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl FromConfigValue for String {
    const TYPE_NAME: &'static str = "string";

    fn from_config_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

macro_rules! impl_from_str_value {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl FromConfigValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_config_value(raw: &str) -> Option<Self> {
                    raw.parse::<$ty>().ok()
                }
            }
        )*
    };
}

impl_from_str_value! {
    i32 => "integer",
    i64 => "integer",
    u16 => "unsigned integer",
    u32 => "unsigned integer",
    u64 => "unsigned integer",
    usize => "unsigned integer",
    f32 => "float",
    f64 => "float",
}
