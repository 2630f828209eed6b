//! MessagePusher trait 定義
//!
//! 接続中クライアント（ロスター）への通知インターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::MessagePushError, event::ServerEvent, value_object::ConnectionId};

/// Outbound channel of one connection, carrying encoded frames
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Roster of connected clients and the fan-out over it
///
/// A client is registered at accept time, before its identity is known, and
/// unregistered when the connection closes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントを登録
    async fn register_client(&self, connection_id: ConnectionId, sender: PusherChannel);

    /// クライアントを登録解除。登録されていた場合 `true`
    async fn unregister_client(&self, connection_id: &ConnectionId) -> bool;

    /// 特定のクライアントにイベントを送信
    async fn push_to(
        &self,
        connection_id: &ConnectionId,
        event: &ServerEvent,
    ) -> Result<(), MessagePushError>;

    /// 登録済みの全クライアント（送信者を含む）にイベントを送信
    ///
    /// 個々の送信失敗は許容し、配信できたクライアント数を返す。
    async fn broadcast(&self, event: &ServerEvent) -> Result<usize, MessagePushError>;

    /// 接続中のクライアント数を取得
    async fn count_clients(&self) -> usize;
}
