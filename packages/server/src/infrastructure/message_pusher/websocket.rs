//! WebSocket を使った MessagePusher 実装（ロスター）
//!
//! ## 責務
//!
//! - 接続中クライアントの `UnboundedSender` を管理
//! - イベントの JSON エンコードとクライアントへの送信（push_to, broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された sender を受け取り、メッセージ送信に使用します。
//! 送信先の sender が閉じていても、ブロードキャストは残りのクライアントへの
//! 配信を続けます。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ConnectionId, MessagePushError, MessagePusher, PusherChannel, ServerEvent},
    infrastructure::dto::conversion::encode_event,
};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let pusher = WebSocketMessagePusher::new();
/// pusher.register_client(connection_id, tx).await;
/// pusher.broadcast(&ServerEvent::Message(record)).await?;
/// ```
#[derive(Default)]
pub struct WebSocketMessagePusher {
    /// 接続中のクライアントの WebSocket sender
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketMessagePusher {
    pub fn new() -> Self {
        Self::default()
    }
}

fn encode(event: &ServerEvent) -> Result<String, MessagePushError> {
    encode_event(event).map_err(|e| MessagePushError::Encode(e.to_string()))
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection_id, sender);
        tracing::debug!("Client '{}' registered to roster", connection_id);
    }

    async fn unregister_client(&self, connection_id: &ConnectionId) -> bool {
        let mut clients = self.clients.lock().await;
        let removed = clients.remove(connection_id).is_some();
        if removed {
            tracing::debug!("Client '{}' unregistered from roster", connection_id);
        }
        removed
    }

    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError> {
        let content = encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(connection_id.to_string()))?;
        sender
            .send(content)
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed event to client '{}'", connection_id);
        Ok(())
    }

    async fn broadcast(&self, event: &ServerEvent) -> Result<usize, MessagePushError> {
        let content = encode(event)?;
        let clients = self.clients.lock().await;

        let mut delivered = 0;
        for (connection_id, sender) in clients.iter() {
            // ブロードキャストでは一部の送信失敗を許容
            if let Err(e) = sender.send(content.clone()) {
                tracing::warn!(
                    "Failed to push message to client '{}': {}",
                    connection_id,
                    e
                );
            } else {
                delivered += 1;
            }
        }
        tracing::debug!(
            "Broadcasted event to {}/{} clients",
            delivered,
            clients.len()
        );

        Ok(delivered)
    }

    async fn count_clients(&self) -> usize {
        self.clients.lock().await.len()
    }
}
