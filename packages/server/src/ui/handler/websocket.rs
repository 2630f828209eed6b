//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionIdFactory,
    ui::state::AppState,
    usecase::ClientSession,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    tracing::info!("Connection from origin {}", origin);

    if let Err(e) = state.connect_client_usecase.ensure_capacity().await {
        tracing::warn!("Rejecting connection from origin {}: {}", origin, e);
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state)))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound message flow: events addressed to this client
/// (history, color, broadcasts) are written to its WebSocket connection.
///
/// # Returns
///
/// A `JoinHandle` for the spawned task. It finishes when the channel closes or
/// the socket refuses a write.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = ConnectionIdFactory::generate();

    match state
        .connect_client_usecase
        .execute(connection_id, tx)
        .await
    {
        Ok(replayed) => tracing::info!(
            "Connection '{}' accepted ({} history messages replayed)",
            connection_id,
            replayed
        ),
        Err(e) => {
            // Capacity was checked before the upgrade; another client won the race
            tracing::warn!("Dropping connection '{}': {}", connection_id, e);
            return;
        }
    }

    let mut session = ClientSession::new(
        connection_id,
        state.identify_client_usecase.clone(),
        state.send_message_usecase.clone(),
        state.disconnect_client_usecase.clone(),
    );

    let mut send_task = pusher_loop(rx, sender);

    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => session.handle_text(text.as_str()).await,
                Some(Ok(Message::Binary(_))) => {
                    tracing::debug!("Ignoring binary frame from '{}'", connection_id);
                }
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Client '{}' requested close", connection_id);
                    break;
                }
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection_id, e);
                    break;
                }
                None => break,
            },
            _ = &mut send_task => {
                tracing::debug!("Outbound stream of '{}' closed", connection_id);
                break;
            }
        }
    }

    send_task.abort();
    session.close().await;
}
