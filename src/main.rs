//! MCP Server Entry Point
//!
//! This is the main entry point for the MCP server. It initializes logging,
//! loads configuration, and starts the server with the configured transport.

use anyhow::Result;
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bot_rates_mcp_server::core::{Config, McpServer, TransportService};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    if let Err(e) = run(config).await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);

    if config.credentials.resolve_api_key().is_none() {
        warn!(
            "{} is not set; tool calls will fail until it is exported",
            config.credentials.api_key_var
        );
    }

    let transport = TransportService::new(config.transport.clone());

    // Create the MCP server
    let server = McpServer::new(config)?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout is reserved for protocol frames.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
