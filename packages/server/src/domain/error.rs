//! Domain layer errors.

use thiserror::Error;

/// Value object construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Color label is empty or whitespace only
    #[error("Color token must not be empty")]
    EmptyColorToken,
}

/// Color pool errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorPoolError {
    /// Every color in the palette is assigned to a connected client
    #[error("No color available: all {0} colors are assigned")]
    Exhausted(usize),

    /// The returned token is not part of the palette
    #[error("Color '{0}' does not belong to the palette")]
    UnknownToken(String),

    /// The returned token is already in the pool
    #[error("Color '{0}' is already available")]
    AlreadyAvailable(String),
}

/// Message push errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// The client is not registered
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// The client's outbound channel is closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),

    /// The event could not be serialized
    #[error("Failed to encode event: {0}")]
    Encode(String),
}
