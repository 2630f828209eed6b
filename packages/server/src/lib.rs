//! Agora: WebSocket broadcast chat server library.
//!
//! Clients connect, declare a display name with their first text frame and
//! then exchange messages that are broadcast to every connected participant.
//! A bounded recent-history buffer is replayed to newly joined clients.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
