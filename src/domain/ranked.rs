// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source priorities and the captured output of a single source.

use std::collections::HashMap;

/// Priority given to a source when none is specified.
pub const DEFAULT_PRIORITY: u32 = 100;

/// The highest precedence a source can have. Lower numbers win.
pub const HIGHEST_PRIORITY: u32 = 0;

/// A flat key/value mapping, either straight from a source or merged.
pub type FlatConfig = HashMap<String, String>;

/// The mapping produced by one source, tagged with its precedence.
///
/// `priority` orders sources (lower wins) and `sequence` is the position in which
/// the source was added, used only to break ties between equal priorities.
/// Keys and values are trimmed of surrounding whitespace on capture.
///
/// # Examples
///
/// ```
/// use layercfg::domain::RankedSource;
/// use std::collections::HashMap;
///
/// let mut raw = HashMap::new();
/// raw.insert(" app.name ".to_string(), "  demo ".to_string());
///
/// let ranked = RankedSource::new("inline", raw, 10, 0);
/// assert_eq!(ranked.entries().get("app.name").map(String::as_str), Some("demo"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedSource {
    name: String,
    entries: FlatConfig,
    priority: u32,
    sequence: usize,
}

impl RankedSource {
    /// Captures a source's mapping.
    pub fn new(
        name: impl Into<String>,
        entries: HashMap<String, String>,
        priority: u32,
        sequence: usize,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        Self {
            name: name.into(),
            entries,
            priority,
            sequence,
        }
    }

    /// Returns the name of the source this mapping came from.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trimmed entries.
    pub fn entries(&self) -> &FlatConfig {
        &self.entries
    }

    /// Returns the priority (lower wins).
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns the position at which the source was added.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub(crate) fn into_entries(self) -> FlatConfig {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_keys_and_values() {
        let mut raw = HashMap::new();
        raw.insert("\tkey\n".to_string(), "  value  ".to_string());
        raw.insert("empty".to_string(), "   ".to_string());

        let ranked = RankedSource::new("test", raw, DEFAULT_PRIORITY, 3);

        assert_eq!(ranked.entries().get("key"), Some(&"value".to_string()));
        assert_eq!(ranked.entries().get("empty"), Some(&String::new()));
        assert_eq!(ranked.name(), "test");
        assert_eq!(ranked.priority(), 100);
        assert_eq!(ranked.sequence(), 3);
    }

    #[test]
    fn test_priority_constants() {
        assert_eq!(DEFAULT_PRIORITY, 100);
        assert_eq!(HIGHEST_PRIORITY, 0);
        assert!(HIGHEST_PRIORITY < DEFAULT_PRIORITY);
    }
}
