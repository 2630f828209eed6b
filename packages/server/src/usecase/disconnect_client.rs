//! UseCase: クライアント切断処理
//!
//! ロスターから登録解除し、識別済みだった場合は色をプールに返却します。

use std::sync::Arc;

use crate::domain::{ColorToken, ConnectionId, MessagePusher};

use super::{SharedColorPool, error::DisconnectError};

/// クライアント切断のユースケース
pub struct DisconnectClientUseCase {
    color_pool: SharedColorPool,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectClientUseCase {
    pub fn new(color_pool: SharedColorPool, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            color_pool,
            message_pusher,
        }
    }

    /// クライアント切断を実行
    ///
    /// 登録解除と色の返却はどちらか一方が失敗しても両方実行される。
    ///
    /// # Arguments
    ///
    /// * `connection_id` - 切断するクライアント
    /// * `color` - 識別済みの場合、割り当てられていた色
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        color: Option<ColorToken>,
    ) -> Result<(), DisconnectError> {
        let was_registered = self.message_pusher.unregister_client(connection_id).await;

        if let Some(color) = color {
            self.color_pool.lock().await.give(color)?;
        }

        if !was_registered {
            return Err(DisconnectError::NotRegistered(connection_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ColorPool, ColorPoolError, ConnectionIdFactory, MockMessagePusher},
        infrastructure::message_pusher::WebSocketMessagePusher,
    };
    use tokio::sync::{Mutex, mpsc};

    fn pool_with_red_taken() -> (SharedColorPool, ColorToken) {
        let mut pool = ColorPool::new([ColorToken::new("red").unwrap()]);
        let red = pool.take().unwrap();
        (Arc::new(Mutex::new(pool)), red)
    }

    #[tokio::test]
    async fn test_disconnect_identified_client_returns_color() {
        // テスト項目: 識別済みクライアントの切断で登録解除と色の返却が行われる
        // given (前提条件):
        let (color_pool, red) = pool_with_red_taken();
        let pusher = Arc::new(WebSocketMessagePusher::new());
        let alice = ConnectionIdFactory::generate();
        let (tx, _rx) = mpsc::unbounded_channel();
        pusher.register_client(alice, tx).await;
        let usecase = DisconnectClientUseCase::new(color_pool.clone(), pusher.clone());

        // when (操作):
        let result = usecase.execute(&alice, Some(red)).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(pusher.count_clients().await, 0);
        assert_eq!(color_pool.lock().await.available(), 1);
    }

    #[tokio::test]
    async fn test_disconnect_unidentified_client_keeps_pool() {
        // テスト項目: 未識別クライアントの切断では色の返却を行わない
        // given (前提条件):
        let (color_pool, _red) = pool_with_red_taken();
        let mut pusher = MockMessagePusher::new();
        pusher
            .expect_unregister_client()
            .times(1)
            .returning(|_| true);
        let usecase = DisconnectClientUseCase::new(color_pool.clone(), Arc::new(pusher));

        // when (操作):
        let result = usecase.execute(&ConnectionIdFactory::generate(), None).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(color_pool.lock().await.available(), 0);
    }

    #[tokio::test]
    async fn test_disconnect_unknown_client_still_returns_color() {
        // テスト項目: 未登録のクライアントでも色は返却され、NotRegistered が返る
        // given (前提条件):
        let (color_pool, red) = pool_with_red_taken();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_unregister_client().returning(|_| false);
        let usecase = DisconnectClientUseCase::new(color_pool.clone(), Arc::new(pusher));

        // when (操作):
        let result = usecase
            .execute(&ConnectionIdFactory::generate(), Some(red))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(DisconnectError::NotRegistered(_))));
        assert_eq!(color_pool.lock().await.available(), 1);
    }

    #[tokio::test]
    async fn test_double_return_is_rejected() {
        // テスト項目: 同じ色を 2 回返却しようとするとエラーになり、総数は保たれる
        // given (前提条件):
        let (color_pool, red) = pool_with_red_taken();
        let mut pusher = MockMessagePusher::new();
        pusher.expect_unregister_client().returning(|_| true);
        let usecase = DisconnectClientUseCase::new(color_pool.clone(), Arc::new(pusher));
        let id = ConnectionIdFactory::generate();
        usecase.execute(&id, Some(red.clone())).await.unwrap();

        // when (操作):
        let result = usecase.execute(&id, Some(red)).await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(DisconnectError::ColorRejected(
                ColorPoolError::AlreadyAvailable("red".to_string())
            ))
        );
        assert_eq!(color_pool.lock().await.available(), 1);
    }
}
