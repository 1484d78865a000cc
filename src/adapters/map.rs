// SPDX-License-Identifier: MIT OR Apache-2.0

//! Programmatic key/value source.

use crate::domain::Result;
use crate::ports::ConfigSource;
use std::collections::HashMap;

/// A source backed by an in-memory map.
///
/// Useful for defaults compiled into the application and for values computed at
/// startup.
///
/// # Examples
///
/// ```rust
/// use layercfg::adapters::MapSource;
/// use layercfg::ports::ConfigSource;
///
/// let source = MapSource::new()
///     .with_value("server.host", "localhost")
///     .with_value("server.port", "8080");
///
/// assert_eq!(source.load().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MapSource {
    name: String,
    values: HashMap<String, String>,
}

impl MapSource {
    /// Creates an empty map source named "map".
    pub fn new() -> Self {
        Self::named("map")
    }

    /// Creates an empty map source with a custom name for logs and errors.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a key/value pair, replacing any previous value for the key.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Adds every pair from `values`.
    pub fn with_values<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values
            .extend(values.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl Default for MapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(values: HashMap<String, String>) -> Self {
        Self {
            name: "map".to_string(),
            values,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MapSource::new().with_values(iter)
    }
}

impl ConfigSource for MapSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        Ok(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_name() {
        assert_eq!(MapSource::new().name(), "map");
        assert_eq!(MapSource::named("defaults").name(), "defaults");
    }

    #[test]
    fn test_map_source_with_value_overwrites() {
        let source = MapSource::new()
            .with_value("key", "first")
            .with_value("key", "second");
        let values = source.load().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["key"], "second");
    }

    #[test]
    fn test_map_source_from_iterator() {
        let source: MapSource = [("a", "1"), ("b", "2")].into_iter().collect();
        let values = source.load().unwrap();
        assert_eq!(values["a"], "1");
        assert_eq!(values["b"], "2");
    }

    #[test]
    fn test_map_source_from_hashmap() {
        let map = HashMap::from([("k".to_string(), "v".to_string())]);
        let source = MapSource::from(map);
        assert_eq!(source.load().unwrap()["k"], "v");
    }

    #[test]
    fn test_map_source_empty() {
        let source = MapSource::default();
        assert_eq!(source.name(), "map");
        assert!(source.load().unwrap().is_empty());
    }
}
