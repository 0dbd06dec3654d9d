//! Entities.

use super::value_object::{Position, UserId};

/// The presence tracked for one registered connection.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPresence {
    /// User claimed by the first `presence-connect` on the connection
    pub user: UserId,
    /// `None` until the first accepted move
    pub position: Option<Position>,
}

impl UserPresence {
    /// 位置未設定の UserPresence を作成
    pub fn new(user: UserId) -> Self {
        Self {
            user,
            position: None,
        }
    }

    /// Whether `user` matches the identity this presence was registered with.
    pub fn is_claimed_by(&self, user: &UserId) -> bool {
        &self.user == user
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = Some(position);
    }
}
