//! ドメイン層
//!
//! チャットサーバーのビジネスルールを表現する型とロジックを定義します。
//! 外部（WebSocket、HTTP、シリアライズ形式）には依存しません。

pub mod color_pool;
pub mod entity;
pub mod error;
pub mod event;
pub mod history;
pub mod pusher;
pub mod sanitizer;
pub mod value_object;

pub use color_pool::{ColorPool, DEFAULT_PALETTE};
pub use entity::MessageRecord;
pub use error::{ColorPoolError, MessagePushError, ValueObjectError};
pub use event::{ServerEvent, ServerNotice};
pub use history::{DEFAULT_HISTORY_LIMIT, HistoryBuffer};
pub use pusher::{MessagePusher, PusherChannel};
pub use sanitizer::escape_html;
pub use value_object::{ColorToken, ConnectionId, ConnectionIdFactory, DisplayName, Timestamp};

#[cfg(test)]
pub use pusher::MockMessagePusher;
