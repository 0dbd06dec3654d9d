//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionId,
    ui::{session::ConnectionSession, state::AppState},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Broadcasts only enqueue into `rx`, so a client that stops reading
/// stalls this task and nothing else.
///
/// # Arguments
///
/// * `rx` - Channel receiver for broadcasts addressed to this connection
/// * `sender` - WebSocket sink to send messages to this client
///
/// # Returns
///
/// A `JoinHandle` for the spawned task
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.into())).await {
                tracing::debug!("Stopping writer: {}", e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();
    tracing::info!("Connection {} opened", connection);

    // Register the outbound channel before reading anything so that the
    // broadcast triggered by our own presence-connect reaches us.
    let (tx, rx) = mpsc::unbounded_channel();
    state.open_connection_usecase.execute(connection, tx).await;
    let mut send_task = pusher_loop(rx, sender);

    let mut session = ConnectionSession::new(connection, state);

    loop {
        tokio::select! {
            msg = receiver.next() => {
                let msg = match msg {
                    Some(Ok(msg)) => msg,
                    Some(Err(e)) => {
                        tracing::error!("WebSocket error on {}: {}", connection, e);
                        break;
                    }
                    None => break,
                };

                match msg {
                    Message::Text(text) => {
                        tracing::debug!("Received text on {}: {}", connection, text.as_str());
                        session.handle_text(text.as_str()).await;
                    }
                    Message::Binary(data) => {
                        tracing::debug!(
                            "Ignoring binary message ({} bytes) on {}",
                            data.len(),
                            connection
                        );
                    }
                    Message::Ping(_) => {
                        tracing::debug!("Received ping");
                        // Ping/pong is handled automatically by the WebSocket protocol
                    }
                    Message::Close(_) => {
                        tracing::info!("Connection {} requested close", connection);
                        break;
                    }
                    _ => {}
                }
            }
            _ = &mut send_task => {
                tracing::info!("Writer for {} stopped, closing", connection);
                break;
            }
        }
    }

    send_task.abort();

    session.close().await;
    tracing::info!("Connection {} closed", connection);
}
