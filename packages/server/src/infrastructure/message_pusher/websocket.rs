//! WebSocket を使った MessagePusher 実装
//!
//! ## 責務
//!
//! - コネクションごとの `UnboundedSender` を管理
//! - クライアントへのメッセージ送信（broadcast）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`src/ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `UnboundedSender` を受け取り、メッセージ送信に使用します。
//! 実際のソケットへの書き込みはコネクション専用の writer タスクが行うので、
//! ここでの送信はチャンネルへの enqueue だけです。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// WebSocket を使った MessagePusher 実装
///
/// ## 使用例
///
/// ```ignore
/// let clients = Arc::new(Mutex::new(HashMap::new()));
/// let pusher = WebSocketMessagePusher::new(clients.clone());
///
/// pusher.register_client(connection, tx).await;
/// let delivered = pusher.broadcast(vec![connection], "{\"type\":\"presence-update\",\"users\":[]}").await;
/// ```
pub struct WebSocketMessagePusher {
    /// 接続中のコネクションの送信チャンネル
    ///
    /// Key: ConnectionId
    /// Value: PusherChannel
    clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    /// 新しい WebSocketMessagePusher を作成
    pub fn new(clients: Arc<Mutex<HashMap<ConnectionId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, connection: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection, sender);
        tracing::debug!("Connection {} registered to MessagePusher", connection);
    }

    async fn unregister_client(&self, connection: ConnectionId) {
        let mut clients = self.clients.lock().await;
        clients.remove(&connection);
        tracing::debug!("Connection {} unregistered from MessagePusher", connection);
    }

    async fn broadcast(&self, targets: Vec<ConnectionId>, content: &str) -> usize {
        let clients = self.clients.lock().await;
        let mut delivered = 0;

        for target in targets {
            let Some(sender) = clients.get(&target) else {
                tracing::warn!(
                    "Connection {} not found during broadcast, skipping",
                    target
                );
                continue;
            };

            // 送信失敗はコネクションが閉じかけていることを意味する。
            // 切断処理は受信ループ側で行われるので、ここではスキップするだけ
            if let Err(e) = sender.send(content.to_string()) {
                tracing::warn!("Failed to push message to connection {}: {}", target, e);
            } else {
                delivered += 1;
                tracing::debug!("Broadcasted message to connection {}", target);
            }
        }

        delivered
    }
}
