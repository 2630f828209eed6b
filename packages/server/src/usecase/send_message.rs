//! UseCase: メッセージ送信処理
//!
//! ### 何をしているか
//! - メッセージ本文のエスケープと `MessageRecord` の生成
//! - 履歴への追加
//! - 送信者を含む全クライアントへのブロードキャスト
//!
//! 履歴への追加とブロードキャストは履歴ロックを保持したまま行うため、
//! 履歴の順序とブロードキャストの順序は一致します。

use std::sync::Arc;

use agora_shared::time::Clock;

use crate::domain::{
    ColorToken, DisplayName, MessagePusher, MessageRecord, ServerEvent, Timestamp, escape_html,
};

use super::{SharedHistory, error::SendMessageError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    history: SharedHistory,
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    pub fn new(
        history: SharedHistory,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            history,
            message_pusher,
            clock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `author` - 送信者の表示名
    /// * `color` - 送信者の色
    /// * `raw_text` - クライアントが送信した生のテキスト
    ///
    /// # Returns
    ///
    /// * `Ok(MessageRecord)` - 履歴に追加され、ブロードキャストされたレコード
    /// * `Err(SendMessageError)` - ブロードキャスト失敗
    pub async fn execute(
        &self,
        author: &DisplayName,
        color: &ColorToken,
        raw_text: &str,
    ) -> Result<MessageRecord, SendMessageError> {
        let mut history = self.history.lock().await;

        let record = MessageRecord::new(
            Timestamp::new(self.clock.now_millis()),
            escape_html(raw_text),
            author.clone(),
            color.clone(),
        );
        history.append(record.clone());

        let delivered = self
            .message_pusher
            .broadcast(&ServerEvent::Message(record.clone()))
            .await
            .map_err(|e| SendMessageError::BroadcastFailed(e.to_string()))?;
        tracing::debug!("Message from '{}' delivered to {} clients", author, delivered);

        Ok(record)
    }
}
