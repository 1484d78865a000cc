// SPDX-License-Identifier: MIT OR Apache-2.0

//! The built configuration and its builder.
//!
//! [`ConfigurationBuilder`] collects sources together with their precedence,
//! then [`build`](ConfigurationBuilder::build) runs the whole pipeline once:
//! load every source, merge by priority, resolve placeholders. The resulting
//! [`Configuration`] is immutable.

use crate::adapters::MapSource;
use crate::domain::{
    aggregate, ConfigurationService, DelimiterPair, PlaceholderResolver, RankedSource,
    ResolvedConfig, Result, DEFAULT_PRIORITY,
};
use crate::ports::ConfigSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fully resolved, read-only configuration.
///
/// All typed accessors come from the [`ConfigurationService`] trait. Because the
/// configuration cannot change after it is built, it can be shared across
/// threads (for example in an `Arc`) without locking.
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = Configuration::builder()
///     .with_values([("server.port", "9090"), ("server.url", "http://localhost:${server.port}")])
///     .build()?;
///
/// assert_eq!(config.get_int("server.port"), 9090);
/// assert_eq!(config.get_string("server.url"), "http://localhost:9090");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    /// The resolved key/value pairs
    resolved: ResolvedConfig,
    /// Delimiters used during resolution
    delimiters: DelimiterPair,
}

impl Configuration {
    /// Creates a new configuration builder.
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Creates a configuration from the conventional sources.
    ///
    /// This includes an optional `config.properties` from the OS-appropriate
    /// configuration directory, followed by environment variables with lower-cased,
    /// dotted keys. Both use the default priority, so environment variables win
    /// ties by being added last.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use layercfg::service::Configuration;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let config = Configuration::with_defaults("myapp", "com.example")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_defaults(app_name: &str, qualifier: &str) -> Result<Self> {
        #[allow(unused_mut)]
        let mut builder = Self::builder();

        #[cfg(feature = "properties")]
        {
            use crate::adapters::PropertiesFileAdapter;
            let adapter = PropertiesFileAdapter::from_default_location(app_name, qualifier)?;
            builder = builder.with_source_options(
                Box::new(adapter),
                SourceOptions::default().ignore_not_found(true),
            );
        }

        #[cfg(feature = "env")]
        {
            builder = builder.with_env_vars();
        }

        #[cfg(not(feature = "properties"))]
        let _ = (app_name, qualifier);

        builder.build()
    }

    /// Returns the resolved key/value pairs.
    pub fn resolved(&self) -> &ResolvedConfig {
        &self.resolved
    }

    /// Returns the delimiters placeholders were resolved with.
    pub fn delimiters(&self) -> &DelimiterPair {
        &self.delimiters
    }

    /// Returns all keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.resolved.keys()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Returns `true` if no source contributed any key.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

impl ConfigurationService for Configuration {
    fn get_raw(&self, key: &str) -> Option<&str> {
        self.resolved.get(key)
    }
}

/// Per-source options given when a source is added to the builder.
///
/// # Examples
///
/// ```rust
/// use layercfg::service::SourceOptions;
///
/// let options = SourceOptions::with_priority(10).ignore_not_found(true);
/// assert_eq!(options.get_priority(), 10);
/// assert!(options.is_ignore_not_found());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceOptions {
    priority: u32,
    ignore_not_found: bool,
}

impl SourceOptions {
    /// Creates options with the given priority (lower wins, 0 is highest).
    pub fn with_priority(priority: u32) -> Self {
        Self {
            priority,
            ..Self::default()
        }
    }

    /// Sets the priority (lower wins, 0 is highest).
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets whether a missing file turns into an empty source instead of an error.
    pub fn ignore_not_found(mut self, enabled: bool) -> Self {
        self.ignore_not_found = enabled;
        self
    }

    /// Returns the priority.
    pub fn get_priority(&self) -> u32 {
        self.priority
    }

    /// Returns whether a missing file is ignored.
    pub fn is_ignore_not_found(&self) -> bool {
        self.ignore_not_found
    }
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            priority: DEFAULT_PRIORITY,
            ignore_not_found: false,
        }
    }
}

/// A source waiting to be loaded, with the options it was added with.
struct RegisteredSource {
    source: Box<dyn ConfigSource>,
    options: SourceOptions,
}

/// Builder for constructing a [`Configuration`].
///
/// The order in which sources are added matters: among sources with equal
/// priority, the one added later wins.
///
/// # Examples
///
/// ```rust
/// use layercfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = ConfigurationBuilder::new()
///     .with_values([("greeting", "hello")])
///     .with_source_options(
///         Box::new(MapSource::new().with_value("greeting", "hi")),
///         SourceOptions::with_priority(HIGHEST_PRIORITY),
///     )
///     .build()?;
///
/// assert_eq!(config.get_string("greeting"), "hi");
/// # Ok(())
/// # }
/// ```
pub struct ConfigurationBuilder {
    sources: Vec<RegisteredSource>,
    delimiters: DelimiterPair,
    strict: bool,
}

impl ConfigurationBuilder {
    /// Creates a new builder with default delimiters and permissive resolution.
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            delimiters: DelimiterPair::default(),
            strict: false,
        }
    }

    /// Adds a configuration source with default options.
    pub fn with_source(self, source: Box<dyn ConfigSource>) -> Self {
        self.with_source_options(source, SourceOptions::default())
    }

    /// Adds a configuration source with explicit options.
    pub fn with_source_options(
        mut self,
        source: Box<dyn ConfigSource>,
        options: SourceOptions,
    ) -> Self {
        self.sources.push(RegisteredSource { source, options });
        self
    }

    /// Adds literal key/value pairs as a source.
    pub fn with_values<I, K, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with_source(Box::new(MapSource::new().with_values(values)))
    }

    /// Adds environment variables as a configuration source.
    ///
    /// Keys are lower-cased and underscores become dots, so `SERVER_PORT` is
    /// available as `server.port`.
    #[cfg(feature = "env")]
    pub fn with_env_vars(self) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(EnvVarAdapter::new().lowercase_keys(true)))
    }

    /// Adds environment variables with a prefix as a configuration source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use layercfg::service::ConfigurationBuilder;
    ///
    /// # fn main() -> layercfg::domain::Result<()> {
    /// let config = ConfigurationBuilder::new()
    ///     .with_env_prefix("MYAPP_")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg(feature = "env")]
    pub fn with_env_prefix(self, prefix: impl Into<String>) -> Self {
        use crate::adapters::EnvVarAdapter;
        self.with_source(Box::new(
            EnvVarAdapter::with_prefix(prefix).lowercase_keys(true),
        ))
    }

    /// Adds a properties file that must exist.
    #[cfg(feature = "properties")]
    pub fn with_properties_file(self, path: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::PropertiesFileAdapter;
        self.with_source(Box::new(PropertiesFileAdapter::from_file(path)))
    }

    /// Adds a properties file that is skipped if it does not exist.
    #[cfg(feature = "properties")]
    pub fn with_optional_properties_file(self, path: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::PropertiesFileAdapter;
        self.with_source_options(
            Box::new(PropertiesFileAdapter::from_file(path)),
            SourceOptions::default().ignore_not_found(true),
        )
    }

    /// Adds a YAML file that must exist.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file(self, path: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::YamlFileAdapter;
        self.with_source(Box::new(YamlFileAdapter::from_file(path)))
    }

    /// Adds a YAML file that is skipped if it does not exist.
    #[cfg(feature = "yaml")]
    pub fn with_optional_yaml_file(self, path: impl AsRef<std::path::Path>) -> Self {
        use crate::adapters::YamlFileAdapter;
        self.with_source_options(
            Box::new(YamlFileAdapter::from_file(path)),
            SourceOptions::default().ignore_not_found(true),
        )
    }

    /// Sets the placeholder delimiters. The pair is validated by `build`.
    ///
    /// ```rust
    /// use layercfg::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let config = ConfigurationBuilder::new()
    ///     .delimiters("%(", ")")
    ///     .with_values([("host", "db"), ("url", "pg://%(host)"), ("raw", "${host}")])
    ///     .build()?;
    ///
    /// assert_eq!(config.get_string("url"), "pg://db");
    /// assert_eq!(config.get_string("raw"), "${host}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn delimiters(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.delimiters = DelimiterPair::unchecked(open.into(), close.into());
        self
    }

    /// Sets whether placeholders naming undefined keys fail the build.
    ///
    /// When disabled (default) they resolve to the empty string.
    pub fn strict_placeholders(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Loads every source, merges them by priority and resolves placeholders.
    ///
    /// # Errors
    ///
    /// Any error from a source (other than a missing file on a source added with
    /// `ignore_not_found`), invalid delimiters, a malformed placeholder, a cyclic
    /// reference, or, in strict mode, a reference to an undefined key. No
    /// configuration is produced on error.
    pub fn build(self) -> Result<Configuration> {
        self.delimiters.validate()?;

        let mut ranked = Vec::with_capacity(self.sources.len());
        for (sequence, registered) in self.sources.into_iter().enumerate() {
            let RegisteredSource { source, options } = registered;

            let entries = match source.load() {
                Ok(entries) => entries,
                Err(e) if options.ignore_not_found && e.is_not_found() => {
                    tracing::debug!(
                        "Ignoring missing configuration source '{}': {}",
                        source.name(),
                        e
                    );
                    HashMap::new()
                }
                Err(e) => {
                    tracing::warn!("Failed to load source '{}': {}", source.name(), e);
                    return Err(e);
                }
            };

            tracing::debug!(
                source = source.name(),
                priority = options.priority,
                sequence,
                entries = entries.len(),
                "Loaded configuration source"
            );
            ranked.push(RankedSource::new(
                source.name(),
                entries,
                options.priority,
                sequence,
            ));
        }

        let flat = aggregate(ranked);
        let resolved = PlaceholderResolver::new(self.delimiters.clone())
            .strict(self.strict)
            .resolve(&flat)?;

        Ok(Configuration {
            resolved,
            delimiters: self.delimiters,
        })
    }
}

impl Default for ConfigurationBuilder {
    fn default() -> Self {
        Self::new()
    }
}
