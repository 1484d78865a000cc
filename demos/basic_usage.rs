// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the layercfg crate.
//!
//! This example demonstrates:
//! - Building a configuration from in-code defaults and environment variables
//! - Typed reads (string, int, bool, float, list)
//! - The three read modes: zero value, default, and fail
//!
//! To run this example:
//! ```bash
//! # Override some defaults through the environment
//! export DEMO_APP_NAME="MyApplication"
//! export DEMO_DATABASE_PORT="6543"
//! export DEMO_ENABLE_DEBUG="true"
//!
//! # Run the example
//! cargo run --example basic_usage
//! ```

use layercfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Basic Usage ===\n");

    // Defaults first, environment second: with equal priority the later source wins.
    let config = Configuration::builder()
        .with_values([
            ("app.name", "DefaultApp"),
            ("database.port", "5432"),
            ("enable.debug", "false"),
            ("api.timeout", "30.5"),
            ("api.hosts", "a.example.com,b.example.com"),
        ])
        .with_env_prefix("DEMO_")
        .build()?;

    println!("Configuration built with {} keys.\n", config.len());

    println!("--- Example 1: String Values ---");
    println!("app.name = {}", config.get_string("app.name"));

    println!("\n--- Example 2: Integer Values ---");
    match config.get_int_or_fail("database.port") {
        Ok(port) => println!("✓ database.port = {}", port),
        Err(e) => println!("✗ database.port unusable: {}", e),
    }

    println!("\n--- Example 3: Boolean Values ---");
    println!("enable.debug = {}", config.get_bool("enable.debug"));

    println!("\n--- Example 4: Float Values ---");
    println!("api.timeout = {} seconds", config.get_float("api.timeout"));

    println!("\n--- Example 5: Lists ---");
    for host in config.get_string_slice("api.hosts", ",") {
        println!("  host: {}", host);
    }

    println!("\n--- Example 6: Checking Key Existence ---");
    if config.exists("some.random.key") {
        println!("✓ Key 'some.random.key' exists");
    } else {
        println!("✗ Key 'some.random.key' does not exist");
    }

    println!("\n--- Example 7: Optional Configuration with Defaults ---");
    let log_level = config.get_string_or_default("log.level", "info");
    println!("Log level: {} (from DEMO_LOG_LEVEL or default)", log_level);

    println!("\n=== Example Complete ===");
    println!("\nTip: Try setting different environment variables and running again!");
    println!("  export DEMO_APP_NAME='My Cool App'");
    println!("  export DEMO_DATABASE_PORT=not-a-port");

    Ok(())
}
