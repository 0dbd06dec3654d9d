//! UseCase: 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPresenceUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断したコネクションが以後のブロードキャストに現れないことを保証
//! - presence-connect 前に切断したコネクションでもエラーにならないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みコネクションの切断（残りの参加者にブロードキャスト）
//! - エッジケース：未登録コネクションの切断（ブロードキャストしない）

use std::sync::Arc;

use crate::domain::{
    ConnectionId, MessagePusher, PresenceBroadcaster, PresenceRegistry, RegistryError,
    UserPresence,
};

/// 切断のユースケース
pub struct DisconnectPresenceUseCase {
    /// Registry（プレゼンス管理の抽象化）
    registry: Arc<dyn PresenceRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// Broadcaster（プレゼンス配信の抽象化）
    broadcaster: Arc<dyn PresenceBroadcaster>,
}

impl DisconnectPresenceUseCase {
    /// 新しい DisconnectPresenceUseCase を作成
    pub fn new(
        registry: Arc<dyn PresenceRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
        broadcaster: Arc<dyn PresenceBroadcaster>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            broadcaster,
        }
    }

    /// 切断を実行
    ///
    /// 送信チャンネルは登録の有無に関わらず解除する。
    ///
    /// # Returns
    ///
    /// * `Ok(UserPresence)` - 削除したエントリ（残りのコネクションにブロードキャスト済み）
    /// * `Err(RegistryError::UnknownConnection)` - presence-connect 前に切断した。
    ///   ブロードキャストは行わない
    pub async fn execute(&self, connection: ConnectionId) -> Result<UserPresence, RegistryError> {
        let removed = self.registry.unregister(connection).await;
        self.message_pusher.unregister_client(connection).await;

        let presence = removed?;
        tracing::info!("User '{}' disconnected from {}", presence.user, connection);

        self.broadcaster.broadcast().await;

        Ok(presence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{UserId, broadcaster::MockPresenceBroadcaster},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryPresenceRegistry,
        },
    };
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    fn create_test_message_pusher() -> Arc<WebSocketMessagePusher> {
        Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
            HashMap::new(),
        ))))
    }

    fn create_test_broadcaster(times: usize) -> Arc<MockPresenceBroadcaster> {
        let mut broadcaster = MockPresenceBroadcaster::new();
        broadcaster.expect_broadcast().times(times).return_const(1usize);
        Arc::new(broadcaster)
    }

    #[tokio::test]
    async fn test_disconnect_removes_entry_and_broadcasts() {
        // テスト項目: 登録済みコネクションの切断でエントリが削除され、ブロードキャストされる
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let message_pusher = create_test_message_pusher();
        let connection = ConnectionId::generate();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        message_pusher.register_client(connection, tx).await;
        registry.register(connection, UserId::from("u1")).await;
        let usecase = DisconnectPresenceUseCase::new(
            registry.clone(),
            message_pusher.clone(),
            create_test_broadcaster(1),
        );

        // when (操作):
        let result = usecase.execute(connection).await;

        // then (期待する結果):
        assert_eq!(result, Ok(UserPresence::new(UserId::from("u1"))));
        assert_eq!(registry.snapshot().await.len(), 0);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_disconnect_before_connect_skips_broadcast() {
        // テスト項目: presence-connect 前に切断してもエラーで落ちず、ブロードキャストしない
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let message_pusher = create_test_message_pusher();
        let connection = ConnectionId::generate();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        message_pusher.register_client(connection, tx).await;
        let usecase = DisconnectPresenceUseCase::new(
            registry.clone(),
            message_pusher.clone(),
            create_test_broadcaster(0),
        );

        // when (操作):
        let result = usecase.execute(connection).await;

        // then (期待する結果): 送信チャンネルは解除される
        assert_eq!(result, Err(RegistryError::UnknownConnection(connection)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_disconnect_twice_broadcasts_once() {
        // テスト項目: 同じコネクションの二回目の切断はブロードキャストしない
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let connection = ConnectionId::generate();
        let other = ConnectionId::generate();
        registry.register(connection, UserId::from("u1")).await;
        registry.register(other, UserId::from("u2")).await;
        let usecase = DisconnectPresenceUseCase::new(
            registry.clone(),
            create_test_message_pusher(),
            create_test_broadcaster(1),
        );
        usecase.execute(connection).await.unwrap();

        // when (操作):
        let result = usecase.execute(connection).await;

        // then (期待する結果): 他のコネクションは残っている
        assert!(result.is_err());
        assert_eq!(registry.connection_ids().await, vec![other]);
    }
}
