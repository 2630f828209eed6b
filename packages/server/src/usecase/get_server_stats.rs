//! UseCase: サーバー状態の取得

use std::sync::Arc;

use crate::domain::{MessagePusher, Timestamp};

use super::{SharedColorPool, SharedHistory};

/// Point-in-time server statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStats {
    pub connected_clients: usize,
    pub history_len: usize,
    pub history_limit: usize,
    pub available_colors: usize,
    pub total_colors: usize,
    pub started_at: Timestamp,
}

/// サーバー状態取得のユースケース
pub struct GetServerStatsUseCase {
    history: SharedHistory,
    color_pool: SharedColorPool,
    message_pusher: Arc<dyn MessagePusher>,
    started_at: Timestamp,
}

impl GetServerStatsUseCase {
    pub fn new(
        history: SharedHistory,
        color_pool: SharedColorPool,
        message_pusher: Arc<dyn MessagePusher>,
        started_at: Timestamp,
    ) -> Self {
        Self {
            history,
            color_pool,
            message_pusher,
            started_at,
        }
    }

    pub async fn execute(&self) -> ServerStats {
        let (history_len, history_limit) = {
            let history = self.history.lock().await;
            (history.len(), history.limit())
        };
        let (available_colors, total_colors) = {
            let pool = self.color_pool.lock().await;
            (pool.available(), pool.capacity())
        };

        ServerStats {
            connected_clients: self.message_pusher.count_clients().await,
            history_len,
            history_limit,
            available_colors,
            total_colors,
            started_at: self.started_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ColorPool, HistoryBuffer, MockMessagePusher};
    use tokio::sync::Mutex;

    #[tokio::test]
    async fn test_stats_reflect_shared_state() {
        // テスト項目: 接続数、履歴件数、色の残数が集計される
        // given (前提条件):
        let history = Arc::new(Mutex::new(HistoryBuffer::new(10)));
        let mut pool = ColorPool::with_default_palette();
        pool.take().unwrap();
        let color_pool = Arc::new(Mutex::new(pool));
        let mut pusher = MockMessagePusher::new();
        pusher.expect_count_clients().returning(|| 3);
        let usecase = GetServerStatsUseCase::new(
            history,
            color_pool,
            Arc::new(pusher),
            Timestamp::new(42),
        );

        // when (操作):
        let stats = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(
            stats,
            ServerStats {
                connected_clients: 3,
                history_len: 0,
                history_limit: 10,
                available_colors: 6,
                total_colors: 7,
                started_at: Timestamp::new(42),
            }
        );
    }
}
