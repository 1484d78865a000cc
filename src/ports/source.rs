// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which the
//! builder obtains key/value pairs. Files, environment variables, literal maps and
//! custom providers all implement it.

use crate::domain::Result;
use std::collections::HashMap;

/// A provider of flat key/value configuration.
///
/// A source is configured up front (a path, a prefix, a literal map) and is then
/// asked exactly once, during [`build`](crate::service::ConfigurationBuilder::build),
/// to produce its mapping. Precedence is not a property of the source; it is
/// attached when the source is added to the builder.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that boxed sources can be moved into
/// a builder on another thread.
///
/// # Examples
///
/// ```rust
/// use layercfg::ports::ConfigSource;
/// use layercfg::domain::Result;
/// use std::collections::HashMap;
///
/// struct Defaults;
///
/// impl ConfigSource for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn load(&self) -> Result<HashMap<String, String>> {
///         Ok(HashMap::from([("server.port".to_string(), "8080".to_string())]))
///     }
/// }
///
/// assert_eq!(Defaults.load().unwrap()["server.port"], "8080");
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and error messages. It should be a short,
    /// descriptive identifier like "env" or "properties-file".
    fn name(&self) -> &str;

    /// Produces the source's key/value pairs.
    ///
    /// # Errors
    ///
    /// File-backed sources report a missing file with
    /// [`ConfigError::NotFound`](crate::domain::ConfigError::NotFound), which the
    /// builder may be told to ignore. Any other error aborts the build.
    fn load(&self) -> Result<HashMap<String, String>>;
}
