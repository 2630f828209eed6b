//! Server configuration.

use crate::domain::{ColorToken, DEFAULT_HISTORY_LIMIT, DEFAULT_PALETTE};

/// Port the original chat server listened on
pub const DEFAULT_PORT: u16 = 1337;

/// Runtime configuration of the chat server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Number of recent messages replayed to new clients
    pub history_limit: usize,
    /// Identity color palette
    pub colors: Vec<ColorToken>,
    /// Maximum number of simultaneous connections (`None`: unlimited)
    pub max_connections: Option<usize>,
}

impl ServerConfig {
    /// Address string passed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            history_limit: DEFAULT_HISTORY_LIMIT,
            colors: DEFAULT_PALETTE
                .iter()
                .filter_map(|label| ColorToken::new(*label).ok())
                .collect(),
            max_connections: None,
        }
    }
}
