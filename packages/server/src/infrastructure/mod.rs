//! Infrastructure 層
//!
//! - `dto`: ワイヤーフォーマット（JSON）
//! - `message_pusher`: WebSocket クライアントへの送信（ロスター）

pub mod dto;
pub mod message_pusher;
