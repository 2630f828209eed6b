//! Shared utilities for the Agora chat server.

pub mod logger;
pub mod time;
