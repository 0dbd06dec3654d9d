//! WebSocket message DTOs.
//!
//! Every message is a JSON object tagged by its `type` field:
//!
//! | type               | direction       | fields                      |
//! |--------------------|-----------------|-----------------------------|
//! | `presence-connect` | client → server | `user`                      |
//! | `presence-move`    | client → server | `user`, `position: {x, y}`  |
//! | `presence-update`  | server → client | `users: [{user, position}]` |

use serde::{Deserialize, Serialize};

/// A 2D pointer position on the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionDto {
    pub x: f64,
    pub y: f64,
}

/// One user's presence inside a `presence-update` payload.
///
/// `position` is serialized as `null` until the user has moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceEntry {
    pub user: String,
    pub position: Option<PositionDto>,
}

/// Messages sent from a client to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    PresenceConnect {
        user: String,
    },
    PresenceMove {
        user: String,
        position: PositionDto,
    },
    /// Any other `type`. Accepted and ignored by the server.
    #[serde(other)]
    Unknown,
}

/// Messages sent from the server to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    PresenceUpdate { users: Vec<PresenceEntry> },
}

impl ClientMessage {
    /// Decode a text frame received from a client.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Encode this message as a text frame.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ServerMessage {
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_presence_connect() {
        // テスト項目: presence-connect メッセージをデコードできる
        // given (前提条件):
        let text = r#"{"type":"presence-connect","user":"u1"}"#;

        // when (操作):
        let result = ClientMessage::decode(text);

        // then (期待する結果):
        assert_eq!(
            result.unwrap(),
            ClientMessage::PresenceConnect {
                user: "u1".to_string()
            }
        );
    }

    #[test]
    fn test_decode_presence_move_with_integer_coordinates() {
        // テスト項目: 整数座標の presence-move メッセージをデコードできる
        // given (前提条件): ブラウザは整数値をそのまま送ってくる
        let text = r#"{"type":"presence-move","user":"u1","position":{"x":10,"y":20}}"#;

        // when (操作):
        let result = ClientMessage::decode(text);

        // then (期待する結果):
        assert_eq!(
            result.unwrap(),
            ClientMessage::PresenceMove {
                user: "u1".to_string(),
                position: PositionDto { x: 10.0, y: 20.0 },
            }
        );
    }

    #[test]
    fn test_decode_unrecognized_type_as_unknown() {
        // テスト項目: 未知の type は Unknown としてデコードされる（エラーにならない）
        // given (前提条件):
        let text = r#"{"type":"diagram-edit","boxes":[1,2,3]}"#;

        // when (操作):
        let result = ClientMessage::decode(text);

        // then (期待する結果):
        assert_eq!(result.unwrap(), ClientMessage::Unknown);
    }

    #[test]
    fn test_decode_move_without_position_fails() {
        // テスト項目: position が欠けた presence-move はデコードに失敗する
        // given (前提条件):
        let text = r#"{"type":"presence-move","user":"u1"}"#;

        // when (操作):
        let result = ClientMessage::decode(text);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_encode_presence_update_with_absent_position() {
        // テスト項目: 位置が未設定のユーザーは position: null としてエンコードされる
        // given (前提条件):
        let message = ServerMessage::PresenceUpdate {
            users: vec![
                PresenceEntry {
                    user: "u1".to_string(),
                    position: Some(PositionDto { x: 10.0, y: 20.0 }),
                },
                PresenceEntry {
                    user: "u2".to_string(),
                    position: None,
                },
            ],
        };

        // when (操作):
        let json = message.encode().unwrap();

        // then (期待する結果):
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "presence-update");
        assert_eq!(value["users"][0]["user"], "u1");
        assert_eq!(value["users"][0]["position"]["x"], 10.0);
        assert!(value["users"][1]["position"].is_null());
    }
}
