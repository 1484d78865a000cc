// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered key/value configuration with placeholder resolution.
//!
//! This crate merges string key/value pairs from several ranked sources into one
//! flat configuration, substitutes `${key}` placeholders recursively, and offers
//! typed accessors over the result.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Aggregation, placeholder resolution, typed access and errors
//! - **Ports**: Trait definitions for the outside world (`ConfigSource`, `ConfigParser`)
//! - **Adapters**: Implementations for specific sources (maps, env vars, properties, YAML)
//! - **Service**: The builder that runs the pipeline and the resulting `Configuration`
//!
//! # Features
//!
//! - **Priority merging**: Every source has a priority, lower numbers win, and
//!   the later-added source wins ties
//! - **Placeholders**: `${name}` tokens are replaced with the resolved value of
//!   `name`, recursively, including placeholders whose names are built from
//!   other placeholders (`${db.${env}.host}`)
//! - **Cycle detection**: Self-referential definitions fail the build instead of
//!   looping
//! - **Custom delimiters**: Any non-overlapping pair, such as `%(` / `)`
//! - **Typed access**: bool, integer, float, string and list readers with
//!   zero-value, default and fail variants
//!
//! # Feature Flags
//!
//! - `env`: Enable environment variable support (default)
//! - `properties`: Enable properties file support (default)
//! - `yaml`: Enable YAML file support (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use layercfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = Configuration::builder()
//!     .with_values([
//!         ("app.env", "prod"),
//!         ("db.prod.host", "db.internal"),
//!         ("db.url", "postgres://${db.${app.env}.host}:5432"),
//!         ("features", "search,export"),
//!     ])
//!     .build()?;
//!
//! assert_eq!(config.get_string("db.url"), "postgres://db.internal:5432");
//! assert_eq!(config.get_string_slice("features", ","), vec!["search", "export"]);
//! assert!(!config.get_bool("debug"));
//! # Ok(())
//! # }
//! ```
//!
//! # Examples
//!
//! Layering a file under environment overrides:
//!
//! ```rust,no_run
//! use layercfg::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let config = Configuration::builder()
//!     .with_optional_properties_file("/etc/myapp/app.properties")
//!     .with_env_prefix("MYAPP_")
//!     .build()?;
//!
//! let port = config.get_int_or_default("server.port", 8080);
//! # Ok(())
//! # }
//! ```
//!
//! Runnable demos live under `demos/` and are registered as `[[example]]` targets,
//! e.g. `cargo run --example placeholders`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigurationService, DelimiterPair, FromConfigValue, ResolvedConfig,
        Result, DEFAULT_PRIORITY, HIGHEST_PRIORITY,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::{Configuration, ConfigurationBuilder, SourceOptions};

    // Re-export adapters based on feature flags
    pub use crate::adapters::MapSource;
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "properties")]
    pub use crate::adapters::{PropertiesFileAdapter, PropertiesParser};
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlFileAdapter, YamlParser};
}
