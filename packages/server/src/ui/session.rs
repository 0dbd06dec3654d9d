//! Per-connection event dispatch.
//!
//! A `ConnectionSession` is driven by exactly one receive loop, so events
//! from the same connection are applied in order. Sessions of different
//! connections run concurrently and only meet in the registry.
//!
//! ```text
//! AwaitingFirstMessage ──(any message)──▶ Active ──(close)──▶ Closed
//!          └────────────────────(close)──────────────────────▶ Closed
//! ```

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, RegistryError, UserId},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

/// Lifecycle of one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    AwaitingFirstMessage,
    Active,
    /// Terminal. Cleanup has run.
    Closed,
}

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// presence-connect applied and broadcast. `claimed` is the user named
    /// in the message. On a re-connect (`newly_registered` is `false`) the
    /// registry keeps the first user and `claimed` is not stored.
    Connected {
        claimed: UserId,
        newly_registered: bool,
    },
    /// presence-move applied and broadcast.
    Moved { user: UserId },
    /// presence-move dropped; no broadcast.
    MoveRejected(RegistryError),
    /// Unknown kind, undecodable payload, or event after close.
    Ignored,
    /// Cleanup ran. `departed` is `None` when the connection never sent
    /// presence-connect, in which case no departure was broadcast.
    Closed { departed: Option<UserId> },
}

pub struct ConnectionSession {
    connection: ConnectionId,
    state: ConnectionState,
    app_state: Arc<AppState>,
}

impl ConnectionSession {
    pub fn new(connection: ConnectionId, app_state: Arc<AppState>) -> Self {
        Self {
            connection,
            state: ConnectionState::AwaitingFirstMessage,
            app_state,
        }
    }

    pub fn connection(&self) -> ConnectionId {
        self.connection
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Decode and dispatch one text frame.
    ///
    /// Undecodable payloads are treated like unknown message kinds.
    pub async fn handle_text(&mut self, text: &str) -> DispatchOutcome {
        match ClientMessage::decode(text) {
            Ok(message) => self.handle_message(message).await,
            Err(e) => {
                if self.state != ConnectionState::Closed {
                    self.state = ConnectionState::Active;
                }
                tracing::warn!(
                    "Ignoring undecodable message on {}: {} ({})",
                    self.connection,
                    text,
                    e
                );
                DispatchOutcome::Ignored
            }
        }
    }

    pub async fn handle_message(&mut self, message: ClientMessage) -> DispatchOutcome {
        if self.state == ConnectionState::Closed {
            tracing::warn!(
                "Ignoring {:?} received after {} closed",
                message,
                self.connection
            );
            return DispatchOutcome::Ignored;
        }
        self.state = ConnectionState::Active;

        match message {
            ClientMessage::PresenceConnect { user } => {
                let claimed = UserId::new(user);
                let newly_registered = self
                    .app_state
                    .connect_presence_usecase
                    .execute(self.connection, claimed.clone())
                    .await;
                DispatchOutcome::Connected {
                    claimed,
                    newly_registered,
                }
            }
            ClientMessage::PresenceMove { user, position } => {
                let user = UserId::new(user);
                match self
                    .app_state
                    .move_presence_usecase
                    .execute(self.connection, user.clone(), position.into())
                    .await
                {
                    Ok(()) => DispatchOutcome::Moved { user },
                    Err(e) => {
                        tracing::warn!("Dropping presence-move: {}", e);
                        DispatchOutcome::MoveRejected(e)
                    }
                }
            }
            ClientMessage::Unknown => {
                tracing::debug!("Ignoring unrecognized message kind on {}", self.connection);
                DispatchOutcome::Ignored
            }
        }
    }

    /// Run disconnect cleanup. Only the first call has any effect.
    pub async fn close(&mut self) -> DispatchOutcome {
        if self.state == ConnectionState::Closed {
            return DispatchOutcome::Ignored;
        }
        self.state = ConnectionState::Closed;

        match self
            .app_state
            .disconnect_presence_usecase
            .execute(self.connection)
            .await
        {
            Ok(presence) => DispatchOutcome::Closed {
                departed: Some(presence.user),
            },
            Err(e) => {
                tracing::debug!("Skipping departure broadcast: {}", e);
                DispatchOutcome::Closed { departed: None }
            }
        }
    }
}
