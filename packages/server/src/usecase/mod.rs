//! UseCase 層
//!
//! 接続のライフサイクル（接続、名前の登録、メッセージ送信、切断）を
//! ドメインの型と `MessagePusher` を組み合わせて実装します。

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{ColorPool, HistoryBuffer};

pub mod connect_client;
pub mod disconnect_client;
pub mod error;
pub mod get_server_stats;
pub mod identify_client;
pub mod send_message;
pub mod session;

pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use error::{ConnectError, DisconnectError, IdentifyError, SendMessageError};
pub use get_server_stats::{GetServerStatsUseCase, ServerStats};
pub use identify_client::IdentifyClientUseCase;
pub use send_message::SendMessageUseCase;
pub use session::{ClientSession, SessionState};

/// History shared by every connection
///
/// Lock order: the history lock is taken before any roster operation.
pub type SharedHistory = Arc<Mutex<HistoryBuffer>>;

/// Color pool shared by every connection
pub type SharedColorPool = Arc<Mutex<ColorPool>>;
