//! InMemory PresenceRegistry 実装
//!
//! ドメイン層が定義する PresenceRegistry trait の具体的な実装。
//! プレゼンスは一時的なキャッシュなので永続化は行わず、再起動時は空から始まります。
//!
//! 全ての操作は一つの `Mutex` で直列化されます。各操作は高々
//! O(登録数) なので、より細かいロックは必要ありません。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    ConnectionId, Position, PresenceRegistry, RegistryError, UserId, UserPresence,
};

/// インメモリ PresenceRegistry 実装
#[derive(Default)]
pub struct InMemoryPresenceRegistry {
    /// Key: ConnectionId, Value: UserPresence
    entries: Arc<Mutex<HashMap<ConnectionId, UserPresence>>>,
}

impl InMemoryPresenceRegistry {
    /// 新しい InMemoryPresenceRegistry を作成
    pub fn new(entries: Arc<Mutex<HashMap<ConnectionId, UserPresence>>>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl PresenceRegistry for InMemoryPresenceRegistry {
    async fn register(&self, connection: ConnectionId, user: UserId) -> bool {
        let mut entries = self.entries.lock().await;
        if entries.contains_key(&connection) {
            tracing::debug!(
                "Connection {} already registered, ignoring re-connect as '{}'",
                connection,
                user
            );
            return false;
        }

        entries.insert(connection, UserPresence::new(user));
        true
    }

    async fn update_position(
        &self,
        connection: ConnectionId,
        user: &UserId,
        position: Position,
    ) -> Result<(), RegistryError> {
        let mut entries = self.entries.lock().await;
        match entries.get_mut(&connection) {
            Some(presence) if presence.is_claimed_by(user) => {
                presence.move_to(position);
                Ok(())
            }
            Some(presence) => Err(RegistryError::IdentityMismatch {
                connection,
                expected: Some(presence.user.clone()),
                actual: user.clone(),
            }),
            None => Err(RegistryError::IdentityMismatch {
                connection,
                expected: None,
                actual: user.clone(),
            }),
        }
    }

    async fn unregister(&self, connection: ConnectionId) -> Result<UserPresence, RegistryError> {
        let mut entries = self.entries.lock().await;
        entries
            .remove(&connection)
            .ok_or(RegistryError::UnknownConnection(connection))
    }

    async fn snapshot(&self) -> Vec<UserPresence> {
        let entries = self.entries.lock().await;
        entries.values().cloned().collect()
    }

    async fn connection_ids(&self) -> Vec<ConnectionId> {
        let entries = self.entries.lock().await;
        entries.keys().copied().collect()
    }
}
