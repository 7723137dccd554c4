//! Basic usage example

use envhelper::{required, EnvHelper};

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("LOG_LEVEL", "debug");
    std::env::set_var("APP_WORKERS", "4");

    // Required: fails if unset
    let database_url = required::string("DATABASE_URL")?;

    // With defaults
    let port = envhelper::int("PORT", 8080)?;
    let debug_mode = envhelper::bool("DEBUG_MODE", false)?;
    let log_level = envhelper::enum_value("LOG_LEVEL", &["debug", "info", "warn", "error"], "info")?;

    // Prefixed lookups
    let app = EnvHelper::new().with_prefix("APP_");
    let workers = app.int("WORKERS", 1)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", database_url);
    println!("  Port: {}", port);
    println!("  Debug Mode: {}", debug_mode);
    println!("  Log Level: {}", log_level);
    println!("  Workers: {}", workers);

    Ok(())
}
