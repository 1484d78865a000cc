// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multi-source configuration example.
//!
//! This example demonstrates:
//! - Layering a YAML file, a properties file and environment variables
//! - How priority and addition order decide which value wins
//! - Optional sources that may be missing
//!
//! To run this example:
//! ```bash
//! # Environment variables share the default priority and are added last
//! export DEMO_APP_NAME="EnvApp"
//! export DEMO_DATABASE_HOST="db.example.com"
//!
//! cargo run --example multi_source
//! ```

use layercfg::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Multi-Source Example ===\n");

    let yaml_content = r#"
app:
  name: "YamlApp"
  version: "1.0.0"
  port: 8080
database:
  host: "localhost"
  port: 5432
features:
  analytics: true
"#;
    let properties_content = "\
# Site overrides, pinned above everything else
app.port = 9000
";

    let yaml_file = tempfile::Builder::new().suffix(".yaml").tempfile()?;
    std::fs::write(yaml_file.path(), yaml_content)?;
    let properties_file = tempfile::Builder::new().suffix(".properties").tempfile()?;
    std::fs::write(properties_file.path(), properties_content)?;

    println!("Building configuration with four sources:");
    println!("  1. site properties (priority {}) - highest", HIGHEST_PRIORITY);
    println!("  2. environment, DEMO_ prefix (priority {}, added last)", DEFAULT_PRIORITY);
    println!("  3. YAML file (priority {})", DEFAULT_PRIORITY);
    println!("  4. /etc/layercfg-demo/missing.yaml (optional, skipped if absent)\n");

    let config = Configuration::builder()
        .with_optional_yaml_file("/etc/layercfg-demo/missing.yaml")
        .with_yaml_file(yaml_file.path())
        .with_source_options(
            Box::new(PropertiesFileAdapter::from_file(properties_file.path())),
            SourceOptions::with_priority(HIGHEST_PRIORITY),
        )
        .with_env_prefix("DEMO_")
        .build()?;

    println!("=== Configuration Values (showing precedence) ===\n");
    print_value(&config, "app.name", "YAML 'YamlApp', or DEMO_APP_NAME");
    print_value(&config, "app.port", "YAML 8080, pinned to 9000 by properties");
    print_value(&config, "app.version", "YAML only");
    print_value(&config, "database.host", "YAML 'localhost', or DEMO_DATABASE_HOST");
    print_bool_value(&config, "features.analytics");

    println!("\n=== Effective Configuration ===");
    for key in config.keys() {
        println!("  {} = {}", key, config.get_string(key));
    }

    println!("\n=== Precedence Summary ===");
    println!("When the same key exists in multiple sources:");
    println!("  • The lowest priority number wins");
    println!("  • On equal priority, the source added last wins");

    Ok(())
}

/// Prints a config value with a note on where it may come from
fn print_value(config: &Configuration, key: &str, note: &str) {
    println!("--- {} ---", key);
    match config.get_string_or_fail(key) {
        Ok(value) => println!("  Current value: {}", value),
        Err(_) => println!("  ✗ Not found in any source"),
    }
    println!("  Sources: {}\n", note);
}

/// Prints a boolean config value
fn print_bool_value(config: &Configuration, key: &str) {
    println!("--- {} ---", key);
    match config.get_bool_or_fail(key) {
        Ok(b) => println!("  Current value: {} (boolean)", b),
        Err(ConfigError::KeyNotFound { .. }) => println!("  ✗ Not found"),
        Err(_) => println!(
            "  Current value: {} (not a valid boolean)",
            config.get_string(key)
        ),
    }
}
