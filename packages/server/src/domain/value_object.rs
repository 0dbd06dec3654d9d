//! Value objects.

use std::fmt;

use uuid::Uuid;

/// Opaque identity of one live WebSocket connection.
///
/// Generated by the server when the socket is upgraded. Two connections
/// never share an id, even when they claim the same user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// 新しい ConnectionId を生成
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// User identifier claimed by a client.
///
/// Supplied by the client and not validated: the same user may be claimed
/// by several connections at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last known pointer position on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_connection_ids_are_distinct() {
        // テスト項目: 生成される ConnectionId は毎回異なる
        // given (前提条件):

        // when (操作):
        let first = ConnectionId::generate();
        let second = ConnectionId::generate();

        // then (期待する結果):
        assert_ne!(first, second);
    }

    #[test]
    fn test_user_id_accepts_any_string() {
        // テスト項目: UserId はクライアントが送った文字列をそのまま保持する
        // given (前提条件):
        let raw = "ABCDEFGHIJK".to_string();

        // when (操作):
        let user = UserId::from(raw.clone());

        // then (期待する結果):
        assert_eq!(user.as_str(), raw);
        assert_eq!(user.to_string(), raw);
        assert_eq!(user.into_string(), raw);
    }

    #[test]
    fn test_user_ids_order_lexicographically() {
        // テスト項目: UserId は文字列の辞書順で比較される
        // given (前提条件):
        let alice = UserId::from("alice");
        let bob = UserId::from("bob");

        // when (操作):

        // then (期待する結果):
        assert!(alice < bob);
    }
}
