//! MessagePusher trait 定義
//!
//! クライアントへのメッセージ送信（通知）を抽象化します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::ConnectionId;

/// コネクションごとの送信チャンネル
///
/// 受信側はコネクション専用の writer タスクが保持します。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// Message pusher trait
///
/// 送信はチャンネルへの enqueue だけで完了するため、遅いクライアントが
/// 他のクライアントへの送信をブロックすることはありません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// コネクションの送信チャンネルを登録
    async fn register_client(&self, connection: ConnectionId, sender: PusherChannel);

    /// コネクションの送信チャンネルを登録解除
    async fn unregister_client(&self, connection: ConnectionId);

    /// 複数のコネクションにメッセージを送信
    ///
    /// 一部の送信失敗は許容し、呼び出し側にエラーを返さない。
    /// 実際に送信できたコネクション数を返す。
    async fn broadcast(&self, targets: Vec<ConnectionId>, content: &str) -> usize;
}
