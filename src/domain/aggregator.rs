// SPDX-License-Identifier: MIT OR Apache-2.0

//! Priority-ordered merging of source mappings.

use crate::domain::ranked::{FlatConfig, RankedSource};
use std::cmp::Reverse;

/// Merges ranked source mappings into one flat mapping.
///
/// Sources are applied from lowest precedence to highest, each one overwriting
/// keys written before it. Precedence is priority ascending (0 wins), and among
/// equal priorities the source added later wins.
///
/// # Examples
///
/// ```
/// use layercfg::domain::{aggregate, RankedSource};
/// use std::collections::HashMap;
///
/// let file = RankedSource::new("file", HashMap::from([
///     ("port".to_string(), "8080".to_string()),
///     ("host".to_string(), "localhost".to_string()),
/// ]), 100, 0);
/// let env = RankedSource::new("env", HashMap::from([
///     ("port".to_string(), "9090".to_string()),
/// ]), 10, 1);
///
/// let merged = aggregate(vec![env, file]);
/// assert_eq!(merged["port"], "9090");
/// assert_eq!(merged["host"], "localhost");
/// ```
pub fn aggregate(mut sources: Vec<RankedSource>) -> FlatConfig {
    sources.sort_by_key(|s| (Reverse(s.priority()), s.sequence()));

    let mut merged = FlatConfig::new();
    for source in sources {
        tracing::trace!(
            source = source.name(),
            priority = source.priority(),
            sequence = source.sequence(),
            entries = source.entries().len(),
            "Merging source"
        );
        merged.extend(source.into_entries());
    }

    merged
}
