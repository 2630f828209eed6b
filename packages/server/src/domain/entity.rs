//! Entities.

use super::value_object::{ColorToken, DisplayName, Timestamp};

/// One chat message as stored in history and broadcast to clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub time: Timestamp,
    /// Escaped message body
    pub text: String,
    pub author: DisplayName,
    pub color: ColorToken,
}

impl MessageRecord {
    pub fn new(time: Timestamp, text: String, author: DisplayName, color: ColorToken) -> Self {
        Self {
            time,
            text,
            author,
            color,
        }
    }
}
