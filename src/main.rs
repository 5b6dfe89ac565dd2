//! MCP Server Entry Point
//!
//! Initializes logging, loads configuration, and serves MCP over the
//! configured transport until the session ends or a shutdown signal arrives.
//! Exits with status 1 when configuration is missing or startup fails.

use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use informix_mcp_server::Error;
use informix_mcp_server::core::{
    Config, McpServer, ShutdownHooks, TransportService, shutdown::shutdown_requested,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Initialize logging before configuration so config errors are reported
    let level = std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    init_logging(&level);

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env().context("Cannot start without query API configuration")?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!("Query API: {}", config.api.url);
    info!(
        "API key: {}",
        if config.api.has_api_key() { "configured" } else { "missing" }
    );
    info!("Default database: {}", config.api.default_database);

    let server = McpServer::new(config.clone()).context("Failed to initialize MCP server")?;
    info!("Server initialized with tools: {}", server.tool_names().join(", "));

    let mut hooks = ShutdownHooks::new();
    let name = config.server.name.clone();
    hooks.register("announce", move |signal| {
        info!("{} stopping after {}", name, signal);
    });

    let transport = TransportService::new(config.transport.clone());

    tokio::select! {
        result = transport.run(server) => {
            result.map_err(Error::from)?;
            info!("Session ended, shutting down");
        }
        signal = shutdown_requested() => hooks.run(signal),
    }

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout carries the MCP protocol.
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
