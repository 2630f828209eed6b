//! Per-connection state machine.
//!
//! ```text
//! AwaitingName --(text: name, color assigned)--> Identified
//! AwaitingName --(text: name, pool exhausted)--> AwaitingName
//! Identified   --(text: message)--------------> Identified
//! *            --(close)----------------------> Closed
//! ```

use std::sync::Arc;

use crate::domain::{ColorToken, ConnectionId, DisplayName};

use super::{
    DisconnectClientUseCase, IdentifyClientUseCase, SendMessageUseCase, error::DisconnectError,
};

/// Identity state of one connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Registered in the roster; the next text frame is the display name
    AwaitingName,
    /// Name and color assigned; text frames are chat messages
    Identified {
        name: DisplayName,
        color: ColorToken,
    },
    /// Removed from the roster; every further event is ignored
    Closed,
}

/// State machine driving one client connection
pub struct ClientSession {
    connection_id: ConnectionId,
    state: SessionState,
    identify_client_usecase: Arc<IdentifyClientUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    disconnect_client_usecase: Arc<DisconnectClientUseCase>,
}

impl ClientSession {
    /// Create a session for a connection already registered in the roster.
    pub fn new(
        connection_id: ConnectionId,
        identify_client_usecase: Arc<IdentifyClientUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    ) -> Self {
        Self {
            connection_id,
            state: SessionState::AwaitingName,
            identify_client_usecase,
            send_message_usecase,
            disconnect_client_usecase,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Handle one inbound text frame.
    pub async fn handle_text(&mut self, text: &str) {
        let identity = match &self.state {
            SessionState::AwaitingName => None,
            SessionState::Identified { name, color } => Some((name.clone(), color.clone())),
            SessionState::Closed => {
                tracing::debug!(
                    "Ignoring frame on closed connection '{}'",
                    self.connection_id
                );
                return;
            }
        };

        match identity {
            None => self.identify(text).await,
            Some((name, color)) => {
                tracing::info!("Received message from '{}': {}", name, text);
                if let Err(e) = self
                    .send_message_usecase
                    .execute(&name, &color, text)
                    .await
                {
                    tracing::warn!("Failed to send message from '{}': {}", name, e);
                }
            }
        }
    }

    async fn identify(&mut self, raw_name: &str) {
        match self
            .identify_client_usecase
            .execute(&self.connection_id, raw_name)
            .await
        {
            Ok((name, color)) => {
                tracing::info!("User is known as: '{}' with '{}' color", name, color);
                self.state = SessionState::Identified { name, color };
            }
            Err(e) => {
                tracing::warn!(
                    "Connection '{}' remains unidentified: {}",
                    self.connection_id,
                    e
                );
            }
        }
    }

    /// Close the session: leave the roster and return the color.
    ///
    /// Only the first call has an effect.
    pub async fn close(&mut self) {
        let color = match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Closed => return,
            SessionState::AwaitingName => None,
            SessionState::Identified { color, .. } => Some(color),
        };

        match self
            .disconnect_client_usecase
            .execute(&self.connection_id, color)
            .await
        {
            Ok(()) => tracing::info!("Peer '{}' disconnected", self.connection_id),
            Err(DisconnectError::NotRegistered(id)) => {
                tracing::debug!("Peer '{}' was already removed from roster", id)
            }
            Err(e) => tracing::warn!(
                "Cleanup of '{}' was incomplete: {}",
                self.connection_id,
                e
            ),
        }
    }
}
