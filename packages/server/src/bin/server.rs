//! Agora broadcast chat server.
//!
//! Clients connect to `/ws`, send their name as the first text frame and
//! then chat; every message is broadcast to all connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-server
//! cargo run --bin agora-server -- --host 0.0.0.0 --port 3000 --max-connections 50
//! ```

use agora_server::{
    domain::{ColorToken, DEFAULT_HISTORY_LIMIT, DEFAULT_PALETTE},
    ui::{Server, ServerConfig, config::DEFAULT_PORT},
};
use agora_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agora-server")]
#[command(about = "WebSocket broadcast chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Number of recent messages replayed to newly connected clients
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, value_parser = parse_history_limit)]
    history_limit: usize,

    /// Comma-separated identity color palette
    #[arg(
        long,
        value_delimiter = ',',
        value_parser = parse_color,
        default_values_t = default_colors()
    )]
    colors: Vec<ColorToken>,

    /// Maximum number of simultaneous connections (unlimited when omitted)
    #[arg(long)]
    max_connections: Option<usize>,
}

fn parse_history_limit(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("history limit must be at least 1".to_string()),
        Ok(limit) => Ok(limit),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_color(label: &str) -> Result<ColorToken, String> {
    ColorToken::new(label).map_err(|e| e.to_string())
}

fn default_colors() -> Vec<ColorToken> {
    DEFAULT_PALETTE
        .iter()
        .filter_map(|label| ColorToken::new(*label).ok())
        .collect()
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            history_limit: args.history_limit,
            colors: args.colors,
            max_connections: args.max_connections,
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());
    tracing::info!(
        "Starting with {} colors, history limit {}, max connections {}",
        config.colors.len(),
        config.history_limit,
        config
            .max_connections
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string())
    );

    let server = Server::with_config(&config);
    if let Err(e) = server.run(&config.bind_addr()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
