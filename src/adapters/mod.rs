// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! Each adapter implements the [`ConfigSource`](crate::ports::ConfigSource) port
//! for one origin of key/value pairs.

#[cfg(feature = "env")]
pub mod env_var;
#[cfg(any(feature = "properties", feature = "yaml"))]
mod file;
pub mod map;
#[cfg(feature = "properties")]
pub mod properties_file;
#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
pub use map::MapSource;
#[cfg(feature = "properties")]
pub use properties_file::{PropertiesFileAdapter, PropertiesParser};
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlFileAdapter, YamlParser};
