//! UseCase: クライアント接続処理
//!
//! ### 何をしているか
//! - 接続数の上限チェック
//! - ロスターへの登録
//! - 履歴が空でなければ `history` イベントを新規クライアントに送信
//!
//! 登録と履歴のスナップショットは履歴ロックを保持したまま行うため、
//! 新規クライアントは各メッセージを `history` か後続の `message` の
//! どちらか一方でちょうど 1 回受け取ります。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel, ServerEvent};

use super::{SharedHistory, error::ConnectError};

/// クライアント接続のユースケース
pub struct ConnectClientUseCase {
    history: SharedHistory,
    message_pusher: Arc<dyn MessagePusher>,
    /// 同時接続数の上限（`None` なら無制限）
    max_connections: Option<usize>,
}

impl ConnectClientUseCase {
    pub fn new(
        history: SharedHistory,
        message_pusher: Arc<dyn MessagePusher>,
        max_connections: Option<usize>,
    ) -> Self {
        Self {
            history,
            message_pusher,
            max_connections,
        }
    }

    /// 新しい接続を受け付けられるか確認
    pub async fn ensure_capacity(&self) -> Result<(), ConnectError> {
        if let Some(limit) = self.max_connections
            && self.message_pusher.count_clients().await >= limit
        {
            return Err(ConnectError::CapacityExceeded(limit));
        }
        Ok(())
    }

    /// クライアント接続を実行
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 新規クライアントに送信した履歴の件数
    /// * `Err(ConnectError)` - 接続数の上限に達している
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: PusherChannel,
    ) -> Result<usize, ConnectError> {
        let history = self.history.lock().await;

        // 1. 上限チェック（履歴ロックで登録処理が直列化される）
        self.ensure_capacity().await?;

        // 2. ロスターに登録
        self.message_pusher
            .register_client(connection_id, sender)
            .await;

        // 3. 履歴を送信
        let snapshot = history.snapshot();
        let replayed = snapshot.len();
        if replayed > 0
            && let Err(e) = self
                .message_pusher
                .push_to(&connection_id, &ServerEvent::History(snapshot))
                .await
        {
            tracing::warn!("Failed to send history to '{}': {}", connection_id, e);
        }

        Ok(replayed)
    }
}
