//! WebSocket envelope DTOs.
//!
//! Every server → client frame is a JSON object `{"type": ..., "data": ...}`.

use serde::{Deserialize, Serialize};

/// Server → client envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ServerMessage {
    History(Vec<MessageRecordDto>),
    Color(String),
    Message(MessageRecordDto),
    Error(ErrorDto),
}

/// Chat message record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecordDto {
    /// Unix timestamp (milliseconds)
    pub time: i64,
    pub text: String,
    pub author: String,
    pub color: String,
}

/// Error payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDto {
    pub code: String,
    pub message: String,
}
