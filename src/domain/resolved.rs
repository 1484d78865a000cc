// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fully resolved, read-only configuration mapping.

use serde::Serialize;
use std::collections::HashMap;

/// A flat mapping in which every placeholder has been substituted.
///
/// Instances are only produced by the
/// [`PlaceholderResolver`](crate::domain::PlaceholderResolver) and cannot be
/// modified afterwards, so any number of threads may read one concurrently.
///
/// Serializes as a plain string map, which is handy for dumping the effective
/// configuration:
///
/// ```
/// use layercfg::domain::{DelimiterPair, PlaceholderResolver};
/// use std::collections::HashMap;
///
/// let flat = HashMap::from([("greeting".to_string(), "hi".to_string())]);
/// let resolved = PlaceholderResolver::new(DelimiterPair::default())
///     .resolve(&flat)
///     .unwrap();
///
/// assert_eq!(resolved.get("greeting"), Some("hi"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: HashMap<String, String>,
}

impl ResolvedConfig {
    pub(crate) fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Returns the resolved value of `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns all keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.values.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copies the entries out into a plain map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.values.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedConfig {
        ResolvedConfig::from_map(HashMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]))
    }

    #[test]
    fn test_lookup() {
        let config = sample();
        assert_eq!(config.get("a"), Some("1"));
        assert_eq!(config.get("missing"), None);
        assert!(config.contains_key("b"));
        assert!(!config.contains_key("c"));
    }

    #[test]
    fn test_keys_sorted() {
        assert_eq!(sample().keys(), vec!["a", "b"]);
    }

    #[test]
    fn test_len_and_empty() {
        assert_eq!(sample().len(), 2);
        assert!(ResolvedConfig::default().is_empty());
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["a"], "1");
        assert_eq!(json["b"], "2");
    }
}
