//! PresenceBroadcaster trait 定義

use async_trait::async_trait;

/// Republishes the current presence set to every registered connection.
///
/// Called by the usecases after each successful registry mutation. The
/// default implementation broadcasts on every call; a batching variant can
/// be swapped in here without touching the registry or the dispatch logic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PresenceBroadcaster: Send + Sync {
    /// Broadcast a `presence-update` and return how many connections it
    /// was delivered to. Never fails.
    async fn broadcast(&self) -> usize;
}
