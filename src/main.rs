//! myshoes MCP server entry point.
//!
//! Loads configuration (defaults, then `MYSHOES_*` environment variables,
//! then command-line flags), initializes logging and serves the target tools
//! on the selected transport.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use myshoes_mcp_server::core::{Config, McpServer, TransportConfig, TransportService};
use myshoes_mcp_server::domains::targets::HttpTargetClient;

#[derive(Debug, Parser)]
#[command(name = "myshoes-mcp-server", version, about = "MCP server for the myshoes target API")]
struct Cli {
    /// Base URL of the myshoes server (overrides MYSHOES_HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Log every tool request and response (overrides MYSHOES_ENABLE_COMMAND_LOGGING).
    #[arg(long, global = true)]
    enable_command_logging: bool,

    /// Log level: trace, debug, info, warn or error (overrides MYSHOES_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve a single session over stdin/stdout (default).
    #[cfg(feature = "stdio")]
    Stdio,

    /// Listen for MCP sessions on a TCP socket.
    #[cfg(feature = "tcp")]
    Tcp {
        /// Address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,

        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

impl Cli {
    /// Layer the flags over the environment-derived configuration.
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.api.host = host;
        }
        if self.enable_command_logging {
            config.logging.log_commands = true;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }

        match self.command {
            #[cfg(feature = "stdio")]
            Some(Command::Stdio) => config.transport = TransportConfig::stdio(),
            #[cfg(feature = "tcp")]
            Some(Command::Tcp { bind, port }) => config.transport = TransportConfig::tcp(port, bind),
            None => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    serve(config).await?;

    info!("Server shutting down");

    Ok(())
}

/// Validate the configuration, connect the client and serve until done.
async fn serve(config: Config) -> myshoes_mcp_server::Result<()> {
    config.validate()?;
    if config.logging.log_commands {
        info!("Command logging enabled");
    }

    let client = HttpTargetClient::new(&config.api)?;
    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, Arc::new(client));

    transport.run(server).await?;
    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr; stdout belongs to the stdio transport. `RUST_LOG`
/// directives are honored in addition to the configured level.
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
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
