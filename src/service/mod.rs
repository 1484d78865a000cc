// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: building and reading a configuration.
//!
//! [`ConfigurationBuilder`] wires sources into the domain pipeline and produces a
//! [`Configuration`], which answers lookups through the `ConfigurationService`
//! trait.

pub mod default_service;

// Re-export commonly used types
pub use default_service::{Configuration, ConfigurationBuilder, SourceOptions};
