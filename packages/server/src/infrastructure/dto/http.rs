//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Response of `GET /api/stats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatsDto {
    pub connected_clients: usize,
    pub history_len: usize,
    pub history_limit: usize,
    pub available_colors: usize,
    pub total_colors: usize,
    /// RFC 3339
    pub started_at: String,
}
