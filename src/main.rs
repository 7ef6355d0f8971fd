//! Relay Front End Service
//!
//! Serves the built single-page app. Depending on configuration the plain
//! HTTP listener either serves the site or redirects every request to HTTPS;
//! an optional TLS listener serves the site with the configured certificate.

use anyhow::Result;
use tracing::info;

use relay_frontend::config::{Config, CONFIG_PATH_ENV};
use relay_frontend::web::FrontendServer;

/// Main application entry point.
///
/// This function:
/// 1. Initializes logging and tracing
/// 2. Loads configuration from the TOML file
/// 3. Starts the front end listeners and runs until shutdown
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("Relay Front End");
        println!();
        println!("Usage: relay-frontend [OPTIONS]");
        println!();
        println!("Options:");
        println!("  --config <path>   Use custom config file path");
        println!("  --help, -h        Show this help message");
        println!();
        println!("Environment variables:");
        println!("  {}    Path to config file (used when --config is absent)", CONFIG_PATH_ENV);
        return Ok(());
    }

    let config_path = args
        .iter()
        .position(|arg| arg == "--config")
        .and_then(|i| args.get(i + 1));

    let config = match config_path {
        Some(path) => {
            info!("Using custom config: {}", path);
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    info!("Configuration loaded successfully");
    info!("Index file: {}", config.build.index);

    let server = FrontendServer::new(config.build);
    server.run().await?;

    Ok(())
}
