//! UseCase: プレゼンスのブロードキャスト
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastPresenceUseCase::broadcast() メソッド
//! - スナップショットの構築（user でソート）と全コネクションへの送信
//!
//! ### なぜこのテストが必要か
//! - 全ての状態変化はこのブロードキャストでクライアントに伝わる
//! - 一部のコネクションへの送信失敗が他のコネクションに影響しないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：登録済みの全コネクションに同じメッセージが届く
//! - エッジケース：登録前のコネクションには届かない
//! - 異常系：一部のコネクションが閉じている
//! - 並行系：複数コネクションの move が同時に走っても、古いスナップショットが後から届かない

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{MessagePusher, PresenceBroadcaster, PresenceRegistry, UserPresence},
    infrastructure::dto::encode_presence_update,
};

/// 変化のたびに全プレゼンスをブロードキャストするユースケース
///
/// 変更一回につき一回、登録済みの全コネクションに送信します
/// （同時に動くコネクションが多いと O(接続数²) のメッセージ量になる）。
pub struct BroadcastPresenceUseCase {
    /// Registry（プレゼンス管理の抽象化）
    registry: Arc<dyn PresenceRegistry>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    /// スナップショット取得から enqueue までを直列化する。
    /// 古いスナップショットが新しいものの後に届くことはない
    sequencer: Mutex<()>,
}

impl BroadcastPresenceUseCase {
    /// 新しい BroadcastPresenceUseCase を作成
    pub fn new(
        registry: Arc<dyn PresenceRegistry>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            registry,
            message_pusher,
            sequencer: Mutex::new(()),
        }
    }

    /// プレゼンスリストを構築
    ///
    /// # Returns
    ///
    /// 登録中の全プレゼンス（Domain Model、user でソート済み）
    pub async fn build_presence_list(&self) -> Vec<UserPresence> {
        let mut presences = self.registry.snapshot().await;

        // Sort by user for consistent ordering
        presences.sort_by(|a, b| a.user.cmp(&b.user));

        presences
    }
}

#[async_trait]
impl PresenceBroadcaster for BroadcastPresenceUseCase {
    async fn broadcast(&self) -> usize {
        let _sequence = self.sequencer.lock().await;

        let presences = self.build_presence_list().await;
        let user_count = presences.len();
        let payload = match encode_presence_update(presences) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to encode presence-update: {}", e);
                return 0;
            }
        };

        let targets = self.registry.connection_ids().await;
        let target_count = targets.len();
        let delivered = self.message_pusher.broadcast(targets, &payload).await;

        tracing::info!(
            "Broadcasted presence of {} user(s) to {}/{} connection(s)",
            user_count,
            delivered,
            target_count
        );
        tracing::debug!("presence-update payload: {}", payload);

        delivered
    }
}
