//! UseCase: 名前登録（色の割り当て）処理
//!
//! クライアントの最初のテキストフレームを表示名として受け取り、
//! カラープールから色を 1 つ割り当てて `color` イベントで通知します。
//! プールが枯渇している場合は `error` イベントで通知し、クライアントは
//! 未識別のままになります。

use std::sync::Arc;

use crate::domain::{
    ColorToken, ConnectionId, DisplayName, MessagePusher, ServerEvent, ServerNotice,
};

use super::{SharedColorPool, error::IdentifyError};

/// 名前登録のユースケース
pub struct IdentifyClientUseCase {
    color_pool: SharedColorPool,
    message_pusher: Arc<dyn MessagePusher>,
}

impl IdentifyClientUseCase {
    pub fn new(color_pool: SharedColorPool, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            color_pool,
            message_pusher,
        }
    }

    /// 名前登録を実行
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 名前を登録するクライアント
    /// * `raw_name` - クライアントが送信した生のテキスト
    ///
    /// # Returns
    ///
    /// * `Ok((DisplayName, ColorToken))` - エスケープ済みの表示名と割り当てた色
    /// * `Err(IdentifyError)` - 色が割り当てられなかった
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        raw_name: &str,
    ) -> Result<(DisplayName, ColorToken), IdentifyError> {
        let name = DisplayName::from_raw(raw_name);
        let taken = self.color_pool.lock().await.take();

        match taken {
            Ok(color) => {
                if let Err(e) = self
                    .message_pusher
                    .push_to(connection_id, &ServerEvent::Color(color.clone()))
                    .await
                {
                    // 色は割り当て済み。切断時に返却される
                    tracing::warn!("Failed to send color to '{}': {}", connection_id, e);
                }
                Ok((name, color))
            }
            Err(e) => {
                tracing::warn!("Cannot identify '{}' as '{}': {}", connection_id, name, e);
                if let Err(e) = self
                    .message_pusher
                    .push_to(
                        connection_id,
                        &ServerEvent::Notice(ServerNotice::NoColorAvailable),
                    )
                    .await
                {
                    tracing::warn!("Failed to send notice to '{}': {}", connection_id, e);
                }
                Err(IdentifyError::NoColorAvailable)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorPool, ConnectionIdFactory, MockMessagePusher};
    use tokio::sync::Mutex;

    fn pool(labels: &[&str]) -> SharedColorPool {
        Arc::new(Mutex::new(ColorPool::ordered(
            labels.iter().map(|label| ColorToken::new(*label).unwrap()),
        )))
    }

    #[tokio::test]
    async fn test_identify_assigns_color_and_notifies_client() {
        // テスト項目: 名前登録で色が割り当てられ、color イベントが本人に送信される
        // given (前提条件):
        let color_pool = pool(&["red", "green"]);
        let alice = ConnectionIdFactory::generate();
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .times(1)
            .withf(move |id, event| {
                *id == alice && matches!(event, ServerEvent::Color(c) if c.as_str() == "red")
            })
            .returning(|_, _| Ok(()));
        let usecase = IdentifyClientUseCase::new(color_pool.clone(), Arc::new(pusher));

        // when (操作):
        let result = usecase.execute(&alice, "Alice").await;

        // then (期待する結果):
        let (name, color) = result.unwrap();
        assert_eq!(name.as_str(), "Alice");
        assert_eq!(color.as_str(), "red");
        assert_eq!(color_pool.lock().await.available(), 1);
    }

    #[tokio::test]
    async fn test_identify_escapes_name() {
        // テスト項目: 表示名はエスケープされて保存される
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push_to().returning(|_, _| Ok(()));
        let usecase = IdentifyClientUseCase::new(pool(&["red"]), Arc::new(pusher));

        // when (操作):
        let result = usecase
            .execute(&ConnectionIdFactory::generate(), "<i>Eve</i>")
            .await;

        // then (期待する結果):
        let (name, _) = result.unwrap();
        assert_eq!(name.as_str(), "&lt;i&gt;Eve&lt;/i&gt;");
    }

    #[tokio::test]
    async fn test_identify_with_exhausted_pool_sends_notice() {
        // テスト項目: プールが枯渇している場合、error 通知を送りエラーを返す
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_push_to()
            .times(1)
            .withf(|_, event| {
                matches!(event, ServerEvent::Notice(ServerNotice::NoColorAvailable))
            })
            .returning(|_, _| Ok(()));
        let usecase = IdentifyClientUseCase::new(pool(&[]), Arc::new(pusher));

        // when (操作):
        let result = usecase
            .execute(&ConnectionIdFactory::generate(), "Dave")
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(IdentifyError::NoColorAvailable));
    }

    #[tokio::test]
    async fn test_color_kept_when_push_fails() {
        // テスト項目: color の送信に失敗しても色は割り当て済みとして返される
        // given (前提条件):
        let color_pool = pool(&["red"]);
        let mut pusher = MockMessagePusher::new();
        pusher.expect_push_to().returning(|id, _| {
            Err(crate::domain::MessagePushError::ClientNotFound(
                id.to_string(),
            ))
        });
        let usecase = IdentifyClientUseCase::new(color_pool.clone(), Arc::new(pusher));

        // when (操作):
        let result = usecase
            .execute(&ConnectionIdFactory::generate(), "Frank")
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(color_pool.lock().await.available(), 0);
    }
}
