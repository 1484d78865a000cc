// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder resolution example.
//!
//! This example demonstrates:
//! - `${key}` references between values, across sources
//! - Placeholders nested inside placeholder names
//! - Custom delimiters
//! - Build errors for cycles and strict mode
//!
//! To run this example:
//! ```bash
//! cargo run --example placeholders
//! ```

use layercfg::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== layercfg: Placeholders ===\n");

    println!("--- Nested names ---");
    let config = Configuration::builder()
        .with_values([
            ("environment", "PROD"),
            ("DEV.server.host", "127.0.0.1"),
            ("PROD.server.host", "10.10.10.10"),
            ("server.port", "8080"),
            ("server.url", "http://${${environment}.server.host}:${server.port}"),
        ])
        .build()?;
    println!("server.url = {}", config.get_string("server.url"));

    println!("\n--- Custom delimiters ---");
    let config = Configuration::builder()
        .delimiters("%(", ")")
        .with_values([
            ("user", "admin"),
            ("dsn", "postgres://%(user)@db/app"),
            ("shell", "echo ${HOME}"),
        ])
        .build()?;
    println!("dsn   = {}", config.get_string("dsn"));
    println!("shell = {} (default delimiters are plain text now)", config.get_string("shell"));

    println!("\n--- Missing targets ---");
    let config = Configuration::builder()
        .with_values([("greeting", "hello ${user.name}!")])
        .build()?;
    println!("permissive: greeting = '{}'", config.get_string("greeting"));

    match Configuration::builder()
        .strict_placeholders(true)
        .with_values([("greeting", "hello ${user.name}!")])
        .build()
    {
        Ok(_) => println!("strict: unexpectedly succeeded"),
        Err(e) => println!("strict: {}", e),
    }

    println!("\n--- Cycles ---");
    match Configuration::builder()
        .with_values([("a", "${b}"), ("b", "${a}")])
        .build()
    {
        Ok(_) => println!("unexpectedly succeeded"),
        Err(e) => println!("build failed: {}", e),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
