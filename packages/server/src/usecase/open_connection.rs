//! UseCase: コネクション開始処理
//!
//! WebSocket が確立した時点で送信チャンネルを登録します。
//! Registry への登録は presence-connect を受信するまで行いません。

use std::sync::Arc;

use crate::domain::{ConnectionId, MessagePusher, PusherChannel};

/// コネクション開始のユースケース
pub struct OpenConnectionUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl OpenConnectionUseCase {
    /// 新しい OpenConnectionUseCase を作成
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// コネクションの送信チャンネルを登録
    pub async fn execute(&self, connection: ConnectionId, sender: PusherChannel) {
        self.message_pusher.register_client(connection, sender).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message_pusher::MockMessagePusher;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_open_connection_registers_channel() {
        // テスト項目: コネクション開始時に送信チャンネルが MessagePusher に登録される
        // given (前提条件):
        let connection = ConnectionId::generate();
        let mut message_pusher = MockMessagePusher::new();
        message_pusher
            .expect_register_client()
            .with(eq(connection), mockall::predicate::always())
            .times(1)
            .return_const(());
        let usecase = OpenConnectionUseCase::new(Arc::new(message_pusher));

        // when (操作):
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        usecase.execute(connection, tx).await;

        // then (期待する結果): モックの期待値（times(1)）で検証される
    }
}
