//! Events pushed from the server to clients.

use super::{entity::MessageRecord, value_object::ColorToken};

/// Server → client event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// History snapshot replayed to a newly accepted client
    History(Vec<MessageRecord>),
    /// Color assigned to the client after its name frame
    Color(ColorToken),
    /// Chat message broadcast to every client
    Message(MessageRecord),
    /// Recoverable per-connection condition
    Notice(ServerNotice),
}

/// Per-connection condition reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerNotice {
    /// Every color is assigned; the client stays unidentified
    NoColorAvailable,
}

impl ServerNotice {
    pub fn code(&self) -> &'static str {
        match self {
            ServerNotice::NoColorAvailable => "no_color_available",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ServerNotice::NoColorAvailable => {
                "All colors are in use. Send your name again once someone leaves."
            }
        }
    }
}
