//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::{net::TcpListener, sync::Mutex};
use tower_http::trace::TraceLayer;

use agora_shared::time::{Clock, SystemClock};

use crate::{
    domain::{ColorPool, HistoryBuffer, MessagePusher, Timestamp},
    infrastructure::message_pusher::WebSocketMessagePusher,
    usecase::{
        ConnectClientUseCase, DisconnectClientUseCase, GetServerStatsUseCase,
        IdentifyClientUseCase, SendMessageUseCase,
    },
};

use super::{
    config::ServerConfig,
    handler::{
        http::{get_stats, health_check},
        websocket::websocket_handler,
    },
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket broadcast chat server
///
/// # Example
///
/// ```ignore
/// let server = Server::with_config(&ServerConfig::default());
/// server.run("127.0.0.1:1337").await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
}

impl Server {
    /// Create a new Server instance from already wired use cases
    pub fn new(
        connect_client_usecase: Arc<ConnectClientUseCase>,
        identify_client_usecase: Arc<IdentifyClientUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        disconnect_client_usecase: Arc<DisconnectClientUseCase>,
        get_server_stats_usecase: Arc<GetServerStatsUseCase>,
    ) -> Self {
        Self {
            state: Arc::new(AppState {
                connect_client_usecase,
                identify_client_usecase,
                send_message_usecase,
                disconnect_client_usecase,
                get_server_stats_usecase,
            }),
        }
    }

    /// Wire the shared state and use cases described by `config`
    pub fn with_config(config: &ServerConfig) -> Self {
        // Initialize dependencies in order:
        // 1. Shared state (history, color pool)
        // 2. MessagePusher (roster)
        // 3. UseCases

        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        // 1. Shared state
        let history = Arc::new(Mutex::new(HistoryBuffer::new(config.history_limit)));
        let color_pool = Arc::new(Mutex::new(ColorPool::new(config.colors.iter().cloned())));

        // 2. MessagePusher (WebSocket implementation)
        let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::new());

        // 3. UseCases
        let connect_client_usecase = Arc::new(ConnectClientUseCase::new(
            history.clone(),
            message_pusher.clone(),
            config.max_connections,
        ));
        let identify_client_usecase = Arc::new(IdentifyClientUseCase::new(
            color_pool.clone(),
            message_pusher.clone(),
        ));
        let send_message_usecase = Arc::new(SendMessageUseCase::new(
            history.clone(),
            message_pusher.clone(),
            clock.clone(),
        ));
        let disconnect_client_usecase = Arc::new(DisconnectClientUseCase::new(
            color_pool.clone(),
            message_pusher.clone(),
        ));
        let get_server_stats_usecase = Arc::new(GetServerStatsUseCase::new(
            history,
            color_pool,
            message_pusher,
            Timestamp::new(clock.now_millis()),
        ));

        Self::new(
            connect_client_usecase,
            identify_client_usecase,
            send_message_usecase,
            disconnect_client_usecase,
            get_server_stats_usecase,
        )
    }

    /// Build the router serving the WebSocket and HTTP endpoints
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/stats", get(get_stats))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Run the WebSocket chat server until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(
        self,
        bind_addr: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(bind_addr).await?;

        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(
            "WebSocket chat server listening on {}",
            listener.local_addr()?
        );

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
