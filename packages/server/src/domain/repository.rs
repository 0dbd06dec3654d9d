//! PresenceRegistry trait 定義
//!
//! ドメイン層が必要とするプレゼンス管理のインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ConnectionId, Position, RegistryError, UserId, UserPresence};

/// Connection registry: ConnectionId → UserPresence
///
/// プロセス全体で一つだけ存在し、全ての操作は互いに直列化されます。
/// Registry 自身はブロードキャストを行いません。ブロードキャストの判断は
/// 呼び出し側（UseCase 層）の責務です。
///
/// ## 不変条件
///
/// - 登録されているキーは presence-connect を処理済みで、まだ切断処理が
///   行われていないコネクションだけ
/// - 一つのコネクションは高々一度しか登録されない
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceRegistry: Send + Sync {
    /// コネクションを登録
    ///
    /// 既に登録済みの場合は何もしない（最初の user が保持される）。
    /// 新規に登録した場合は `true` を返す。
    async fn register(&self, connection: ConnectionId, user: UserId) -> bool;

    /// 位置を更新
    ///
    /// コネクションが登録済みで、かつ登録時の user と一致する場合のみ成功する。
    /// 失敗時は Registry を変更しない。
    async fn update_position(
        &self,
        connection: ConnectionId,
        user: &UserId,
        position: Position,
    ) -> Result<(), RegistryError>;

    /// コネクションを削除し、削除したエントリを返す
    async fn unregister(&self, connection: ConnectionId) -> Result<UserPresence, RegistryError>;

    /// 全エントリのコピーを取得（以後の変更は反映されない）
    async fn snapshot(&self) -> Vec<UserPresence>;

    /// 登録済みの全コネクション ID を取得
    async fn connection_ids(&self) -> Vec<ConnectionId>;
}
