//! Conversion logic between DTOs and domain entities.

use crate::domain::{Position, UserPresence};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::PositionDto> for Position {
    fn from(dto: dto::PositionDto) -> Self {
        Position::new(dto.x, dto.y)
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Position> for dto::PositionDto {
    fn from(model: Position) -> Self {
        Self {
            x: model.x,
            y: model.y,
        }
    }
}

impl From<UserPresence> for dto::PresenceEntry {
    fn from(model: UserPresence) -> Self {
        Self {
            user: model.user.into_string(),
            position: model.position.map(Into::into),
        }
    }
}

/// Build the `presence-update` message for a snapshot.
pub fn presence_update_message(presences: Vec<UserPresence>) -> dto::ServerMessage {
    dto::ServerMessage::PresenceUpdate {
        users: presences.into_iter().map(Into::into).collect(),
    }
}

/// Encode a snapshot as a `presence-update` text frame.
pub fn encode_presence_update(presences: Vec<UserPresence>) -> Result<String, serde_json::Error> {
    presence_update_message(presences).encode()
}
