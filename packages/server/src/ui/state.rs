//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    ConnectClientUseCase, DisconnectClientUseCase, GetServerStatsUseCase, IdentifyClientUseCase,
    SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub identify_client_usecase: Arc<IdentifyClientUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub get_server_stats_usecase: Arc<GetServerStatsUseCase>,
}
