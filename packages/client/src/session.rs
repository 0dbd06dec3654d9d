//! WebSocket client session.

use std::time::Duration;

use cursorsync_shared::protocol::{ClientMessage, ServerMessage};
use futures_util::{SinkExt, StreamExt};
use rand::{SeedableRng, rngs::StdRng};
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{error::ClientError, formatter::format_presence_update, walk::RandomWalk};

/// Connect as `user`, then keep sending random moves every `interval` and
/// print every presence-update received until the server closes the
/// connection.
pub async fn run_client(url: &str, user: &str, interval: Duration) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    tracing::info!("Connected to presence server at {} as '{}'", url, user);

    let (mut write, mut read) = ws_stream.split();

    let connect = ClientMessage::PresenceConnect {
        user: user.to_string(),
    }
    .encode()?;
    write
        .send(Message::Text(connect.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    // Spawn a task that moves the pointer
    let user_for_move = user.to_string();
    let mut move_task = tokio::spawn(async move {
        let mut walk = RandomWalk::new(StdRng::from_entropy());
        loop {
            let message = ClientMessage::PresenceMove {
                user: user_for_move.clone(),
                position: walk.position(),
            };
            let text = match message.encode() {
                Ok(text) => text,
                Err(e) => {
                    tracing::error!("Failed to encode presence-move: {}", e);
                    break;
                }
            };
            if let Err(e) = write.send(Message::Text(text.into())).await {
                tracing::warn!("Failed to send presence-move: {}", e);
                break;
            }

            tokio::time::sleep(interval).await;
            walk.advance();
        }
    });

    let result = loop {
        tokio::select! {
            message = read.next() => match message {
                Some(Ok(Message::Text(text))) => match ServerMessage::decode(text.as_str()) {
                    Ok(ServerMessage::PresenceUpdate { users }) => {
                        println!("Received: {}", format_presence_update(&users));
                    }
                    Err(_) => println!("Received: {}", text.as_str()),
                },
                Some(Ok(Message::Close(_))) | None => {
                    tracing::info!("Server closed the connection");
                    break Ok(());
                }
                Some(Err(e)) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break Err(ClientError::ConnectionError(e.to_string()));
                }
                Some(Ok(_)) => {}
            },
            _ = &mut move_task => {
                break Err(ClientError::ConnectionError(
                    "stopped sending moves".to_string(),
                ));
            }
        }
    };

    move_task.abort();
    result
}
