//! UseCase: presence-move 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MovePresenceUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 他人を名乗る move が位置を書き換えないことを保証
//! - 失敗した move がブロードキャストを起こさないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録時と同じ user の move
//! - 異常系：別の user を名乗る move、未登録コネクションからの move

use std::sync::Arc;

use crate::domain::{
    ConnectionId, Position, PresenceBroadcaster, PresenceRegistry, RegistryError, UserId,
};

/// presence-move のユースケース
pub struct MovePresenceUseCase {
    /// Registry（プレゼンス管理の抽象化）
    registry: Arc<dyn PresenceRegistry>,
    /// Broadcaster（プレゼンス配信の抽象化）
    broadcaster: Arc<dyn PresenceBroadcaster>,
}

impl MovePresenceUseCase {
    /// 新しい MovePresenceUseCase を作成
    pub fn new(
        registry: Arc<dyn PresenceRegistry>,
        broadcaster: Arc<dyn PresenceBroadcaster>,
    ) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// presence-move を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 位置を更新し、ブロードキャストした
    /// * `Err(RegistryError::IdentityMismatch)` - Registry は変更されず、ブロードキャストもしない
    pub async fn execute(
        &self,
        connection: ConnectionId,
        user: UserId,
        position: Position,
    ) -> Result<(), RegistryError> {
        self.registry
            .update_position(connection, &user, position)
            .await?;
        tracing::debug!(
            "User '{}' moved to ({}, {}) on {}",
            user,
            position.x,
            position.y,
            connection
        );

        self.broadcaster.broadcast().await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::broadcaster::MockPresenceBroadcaster,
        infrastructure::repository::InMemoryPresenceRegistry,
    };

    fn create_test_broadcaster(times: usize) -> Arc<MockPresenceBroadcaster> {
        let mut broadcaster = MockPresenceBroadcaster::new();
        broadcaster.expect_broadcast().times(times).return_const(1usize);
        Arc::new(broadcaster)
    }

    #[tokio::test]
    async fn test_move_updates_position_and_broadcasts() {
        // テスト項目: 登録時と同じ user の move は位置を更新し、ブロードキャストする
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let connection = ConnectionId::generate();
        registry.register(connection, UserId::from("A")).await;
        let usecase = MovePresenceUseCase::new(registry.clone(), create_test_broadcaster(1));

        // when (操作):
        let result = usecase
            .execute(connection, UserId::from("A"), Position::new(10.0, 20.0))
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(
            registry.snapshot().await[0].position,
            Some(Position::new(10.0, 20.0))
        );
    }

    #[tokio::test]
    async fn test_move_with_other_user_is_dropped_without_broadcast() {
        // テスト項目: 別の user を名乗る move は位置を変えず、ブロードキャストしない
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let connection = ConnectionId::generate();
        registry.register(connection, UserId::from("A")).await;
        let usecase = MovePresenceUseCase::new(registry.clone(), create_test_broadcaster(0));

        // when (操作):
        let result = usecase
            .execute(connection, UserId::from("B"), Position::new(10.0, 20.0))
            .await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(RegistryError::IdentityMismatch { .. })
        ));
        assert_eq!(registry.snapshot().await[0].position, None);
    }

    #[tokio::test]
    async fn test_move_before_connect_is_dropped_without_broadcast() {
        // テスト項目: presence-connect 前の move は失敗し、Registry にエントリは作られない
        // given (前提条件):
        let registry = Arc::new(InMemoryPresenceRegistry::default());
        let usecase = MovePresenceUseCase::new(registry.clone(), create_test_broadcaster(0));

        // when (操作):
        let result = usecase
            .execute(
                ConnectionId::generate(),
                UserId::from("A"),
                Position::new(1.0, 1.0),
            )
            .await;

        // then (期待する結果):
        assert!(result.is_err());
        assert_eq!(registry.snapshot().await.len(), 0);
    }
}
