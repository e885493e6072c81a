//! FoodPal providers: CLI server
//!
//! Headless catalogue-items service suitable for deployment as a systemd
//! service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/foodpal-providers/config.toml)
//! foodpal-providers-service
//!
//! # Custom config path
//! foodpal-providers-service --config /etc/foodpal-providers/config.toml
//!
//! # Override port
//! foodpal-providers-service --port 8081
//!
//! # Validate config without starting
//! foodpal-providers-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use foodpal_providers::config::AppConfig;
use foodpal_providers::server::{init_tracing, ServerHandle, ServerOptions};

/// FoodPal providers: catalogue (menu) items REST service.
#[derive(Parser, Debug)]
#[command(
    name = "foodpal-providers-service",
    version,
    about = "REST service for provider catalogue (menu) items",
    long_about = "FoodPal providers: REST API for listing, creating, updating \
                  and deleting the menu items of food providers.\n\n\
                  Default config: ~/.config/foodpal-providers/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FOODPAL_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(foodpal_providers::default_config_path);

    let loaded = AppConfig::load(&config_path);

    if cli.check {
        return match loaded {
            Ok(config) => {
                println!("✅ Configuration is valid");
                println!("   Config file : {}", config_path.display());
                println!("   API address : {}", config.server.address());
                println!("   Database    : {}", config.database.url);
                println!("   Log level   : {}", config.logging.level);
                println!(
                    "   Ownership   : {}",
                    if config.catalogue.enforce_item_ownership {
                        "enforced"
                    } else {
                        "not enforced"
                    }
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ Configuration is invalid: {}", e);
                Err(e.into())
            }
        };
    }

    let mut config = match loaded {
        Ok(cfg) => {
            // Init tracing first so subsequent logs are formatted properly
            let mut tracing_cfg = cfg.clone();
            if let Some(ref level) = cli.log_level {
                tracing_cfg.logging.level = level.clone();
            }
            init_tracing(&tracing_cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            // Fallback tracing init
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    cli.log_level.as_deref().unwrap_or("info"),
                ))
                .init();
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
            AppConfig::default()
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
        config.logging.level = level;
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    // Wait for shutdown signal, then clean up
    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
