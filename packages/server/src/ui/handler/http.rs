//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::ServerStatsDto, ui::state::AppState};
use agora_shared::time::timestamp_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current roster, history and color pool figures
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<ServerStatsDto> {
    let stats = state.get_server_stats_usecase.execute().await;

    // Domain Model から DTO への変換
    Json(ServerStatsDto {
        connected_clients: stats.connected_clients,
        history_len: stats.history_len,
        history_limit: stats.history_limit,
        available_colors: stats.available_colors,
        total_colors: stats.total_colors,
        started_at: timestamp_to_rfc3339(stats.started_at.value()),
    })
}
