// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the resolution engine.
//!
//! This module holds the parts of the crate with real invariants: merging ranked
//! source mappings ([`aggregate`]), substituting placeholders
//! ([`PlaceholderResolver`]), and typed reads over the result
//! ([`ConfigurationService`]). It performs no I/O.

pub mod aggregator;
pub mod delimiters;
pub mod errors;
pub mod ranked;
pub mod resolved;
pub mod resolver;
pub mod service;
pub mod value;

// Re-export commonly used types
pub use aggregator::aggregate;
pub use delimiters::DelimiterPair;
pub use errors::{ConfigError, Result};
pub use ranked::{FlatConfig, RankedSource, DEFAULT_PRIORITY, HIGHEST_PRIORITY};
pub use resolved::ResolvedConfig;
pub use resolver::PlaceholderResolver;
pub use service::ConfigurationService;
pub use value::FromConfigValue;
