// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder delimiter pair.
//!
//! A placeholder token is written `open + name + close`. The default pair is
//! `${` / `}`, which gives the familiar `${server.port}` form.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default opening delimiter.
pub const DEFAULT_OPEN: &str = "${";

/// Default closing delimiter.
pub const DEFAULT_CLOSE: &str = "}";

/// The pair of strings that mark a placeholder token inside a value.
///
/// A pair is only usable once it has passed [`DelimiterPair::validate`]: both
/// strings must be non-empty and distinct, neither may contain the other, and
/// no tail of one may start the other (as in `<a` / `a>`).
///
/// # Examples
///
/// ```
/// use layercfg::domain::DelimiterPair;
///
/// let pair = DelimiterPair::new("%(", ")").unwrap();
/// assert_eq!(pair.open(), "%(");
/// assert_eq!(pair.close(), ")");
///
/// assert!(DelimiterPair::new("{", "{").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    open: String,
    close: String,
}

impl DelimiterPair {
    /// Creates and validates a delimiter pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self> {
        let pair = Self {
            open: open.into(),
            close: close.into(),
        };
        pair.validate()?;
        Ok(pair)
    }

    /// Stores a pair without checking it; callers validate before use.
    pub(crate) fn unchecked(open: String, close: String) -> Self {
        Self { open, close }
    }

    /// Returns the opening delimiter.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Returns the closing delimiter.
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Checks that the pair can unambiguously delimit a token.
    ///
    /// Deserialized pairs skip [`DelimiterPair::new`], so the builder validates
    /// again before resolving.
    pub fn validate(&self) -> Result<()> {
        let reject = |reason| ConfigError::InvalidDelimiters {
            open: self.open.clone(),
            close: self.close.clone(),
            reason,
        };

        if self.open.is_empty() || self.close.is_empty() {
            return Err(reject("delimiters must not be empty"));
        }
        if self.open == self.close {
            return Err(reject("opening and closing delimiters must differ"));
        }
        if self.open.contains(self.close.as_str()) || self.close.contains(self.open.as_str()) {
            return Err(reject("delimiters must not overlap"));
        }
        if tail_starts(&self.open, &self.close) || tail_starts(&self.close, &self.open) {
            return Err(reject("the end of one delimiter must not begin the other"));
        }
        Ok(())
    }

    /// Formats `name` as a placeholder token using this pair.
    ///
    /// ```
    /// use layercfg::domain::DelimiterPair;
    ///
    /// assert_eq!(DelimiterPair::default().token("app.name"), "${app.name}");
    /// ```
    pub fn token(&self, name: &str) -> String {
        format!("{}{}{}", self.open, name, self.close)
    }
}

/// Returns `true` if some non-empty suffix of `a` is a prefix of `b`.
fn tail_starts(a: &str, b: &str) -> bool {
    a.char_indices().any(|(i, _)| b.starts_with(&a[i..]))
}

impl Default for DelimiterPair {
    fn default() -> Self {
        Self {
            open: DEFAULT_OPEN.to_string(),
            close: DEFAULT_CLOSE.to_string(),
        }
    }
}

impl fmt::Display for DelimiterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}...{}", self.open, self.close)
    }
}
