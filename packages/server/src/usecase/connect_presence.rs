//! UseCase: presence-connect 処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPresenceUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 再接続（同じコネクションからの二回目の presence-connect）が冪等であることを保証
//! - connect のたびにブロードキャストされることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規コネクションの登録
//! - エッジケース：同じコネクションで別の user を名乗る再接続

use std::sync::Arc;

use crate::domain::{ConnectionId, PresenceBroadcaster, PresenceRegistry, UserId};

/// presence-connect のユースケース
pub struct ConnectPresenceUseCase {
    /// Registry（プレゼンス管理の抽象化）
    registry: Arc<dyn PresenceRegistry>,
    /// Broadcaster（プレゼンス配信の抽象化）
    broadcaster: Arc<dyn PresenceBroadcaster>,
}

impl ConnectPresenceUseCase {
    /// 新しい ConnectPresenceUseCase を作成
    pub fn new(
        registry: Arc<dyn PresenceRegistry>,
        broadcaster: Arc<dyn PresenceBroadcaster>,
    ) -> Self {
        Self {
            registry,
            broadcaster,
        }
    }

    /// presence-connect を実行
    ///
    /// 既に登録済みのコネクションでも拒否せず、ブロードキャストは行う。
    ///
    /// # Returns
    ///
    /// 新規に登録した場合は `true`
    pub async fn execute(&self, connection: ConnectionId, user: UserId) -> bool {
        let created = self.registry.register(connection, user.clone()).await;
        if created {
            tracing::info!("User '{}' connected on {}", user, connection);
        }

        self.broadcaster.broadcast().await;

        created
    }
}
