// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration source precedence.

mod common;

use common::{create_temp_file, MockConfigSource};
use layercfg::prelude::*;
use std::env;

/// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

fn source(name: &str, key: &str, value: &str) -> Box<dyn ConfigSource> {
    Box::new(MockConfigSource::new(name).with_value(key, value))
}

#[test]
fn test_lowest_priority_number_wins() {
    let config = Configuration::builder()
        .with_source_options(source("low", "key1", "from_low"), SourceOptions::with_priority(300))
        .with_source_options(source("high", "key1", "from_high"), SourceOptions::with_priority(1))
        .with_source_options(
            source("medium", "key1", "from_medium"),
            SourceOptions::with_priority(50),
        )
        .build()
        .unwrap();

    assert_eq!(config.get_string("key1"), "from_high");
}

#[test]
fn test_highest_priority_constant() {
    let config = Configuration::builder()
        .with_source_options(
            source("pinned", "key", "pinned"),
            SourceOptions::with_priority(HIGHEST_PRIORITY),
        )
        .with_source_options(source("near", "key", "near"), SourceOptions::with_priority(1))
        .build()
        .unwrap();

    assert_eq!(config.get_string("key"), "pinned");
}

#[test]
fn test_equal_priority_last_added_wins() {
    let config = Configuration::builder()
        .with_source(source("first", "key", "first"))
        .with_source(source("second", "key", "second"))
        .with_source(source("third", "key", "third"))
        .build()
        .unwrap();

    assert_eq!(config.get_string("key"), "third");
}

#[test]
fn test_tie_break_only_within_priority() {
    // "late" is added last but has a worse priority than "early".
    let config = Configuration::builder()
        .with_source_options(source("early", "key", "early"), SourceOptions::with_priority(10))
        .with_source_options(source("late", "key", "late"), SourceOptions::with_priority(20))
        .build()
        .unwrap();

    assert_eq!(config.get_string("key"), "early");
}

#[test]
fn test_keys_union_across_sources() {
    let config = Configuration::builder()
        .with_source_options(
            Box::new(
                MockConfigSource::new("low")
                    .with_value("key1", "from_low")
                    .with_value("key2", "low_value"),
            ),
            SourceOptions::with_priority(200),
        )
        .with_source_options(
            Box::new(
                MockConfigSource::new("high")
                    .with_value("key1", "from_high")
                    .with_value("key3", "high_value"),
            ),
            SourceOptions::with_priority(10),
        )
        .build()
        .unwrap();

    assert_eq!(config.keys(), vec!["key1", "key2", "key3"]);
    assert_eq!(config.get_string("key1"), "from_high");
    assert_eq!(config.get_string("key2"), "low_value");
    assert_eq!(config.get_string("key3"), "high_value");
}

#[test]
fn test_ignored_missing_source_keeps_sequence() {
    // A skipped source still occupies its slot in the addition order.
    let config = Configuration::builder()
        .with_source(source("first", "key", "first"))
        .with_source_options(
            Box::new(MockConfigSource::new("gone").not_found()),
            SourceOptions::default().ignore_not_found(true),
        )
        .with_source(source("third", "key", "third"))
        .build()
        .unwrap();

    assert_eq!(config.get_string("key"), "third");
}

#[test]
#[cfg(all(feature = "env", feature = "properties"))]
fn test_precedence_env_over_properties() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("LAYERCFG_PREC_TEST_KEY", "env_value");

    let file = create_temp_file("test.key=file_value\nfile.only=file\n", "properties");

    let config = Configuration::builder()
        .with_properties_file(file.path())
        .with_env_prefix("LAYERCFG_PREC_")
        .build()
        .unwrap();

    // Same priority, env added later.
    assert_eq!(config.get_string("test.key"), "env_value");
    assert_eq!(config.get_string("file.only"), "file");
}

#[test]
#[cfg(all(feature = "env", feature = "properties"))]
fn test_precedence_file_pinned_over_env() {
    let mut env_guard = EnvGuard::new();
    env_guard.set("LAYERCFG_PIN_TEST_KEY", "env_value");

    let file = create_temp_file("test.key=file_value\n", "properties");

    let config = Configuration::builder()
        .with_source_options(
            Box::new(PropertiesFileAdapter::from_file(file.path())),
            SourceOptions::with_priority(HIGHEST_PRIORITY),
        )
        .with_env_prefix("LAYERCFG_PIN_")
        .build()
        .unwrap();

    assert_eq!(config.get_string("test.key"), "file_value");
}

#[test]
#[cfg(all(feature = "yaml", feature = "properties"))]
fn test_yaml_and_properties_layers() {
    let yaml = create_temp_file("db:\n  host: yaml-host\n  port: 5432\n", "yaml");
    let props = create_temp_file("db.host=props-host\n", "properties");

    let config = Configuration::builder()
        .with_source_options(
            Box::new(YamlFileAdapter::from_file(yaml.path())),
            SourceOptions::with_priority(200),
        )
        .with_properties_file(props.path())
        .with_values([("db.url", "${db.host}:${db.port}")])
        .build()
        .unwrap();

    assert_eq!(config.get_string("db.url"), "props-host:5432");
}

#[test]
fn test_empty_configuration() {
    let config = Configuration::builder().build().unwrap();

    assert!(config.is_empty());
    assert!(!config.exists("test.key"));
    assert_eq!(config.get_string_or_default("test.key", "fallback"), "fallback");
}
