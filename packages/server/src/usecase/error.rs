//! UseCase layer errors.

use thiserror::Error;

use crate::domain::ColorPoolError;

/// 接続時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// The configured connection limit is reached
    #[error("Connection limit of {0} reached")]
    CapacityExceeded(usize),
}

/// 名前登録（色の割り当て）時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifyError {
    /// Every color is assigned to another client
    #[error("No identity color available")]
    NoColorAvailable,
}

/// メッセージ送信時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    #[error("Failed to broadcast message: {0}")]
    BroadcastFailed(String),
}

/// 切断時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisconnectError {
    /// The connection was not in the roster
    #[error("Client '{0}' was not registered")]
    NotRegistered(String),

    /// The pool refused the returned color
    #[error("Color could not be returned: {0}")]
    ColorRejected(#[from] ColorPoolError),
}
