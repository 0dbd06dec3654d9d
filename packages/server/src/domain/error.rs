//! Domain errors.

use thiserror::Error;

use super::value_object::{ConnectionId, UserId};

/// Errors returned by `PresenceRegistry` mutations.
///
/// Both variants are recovered locally by the caller and never reach the
/// remote peer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A move claimed a user other than the one the connection registered
    /// as, or the connection has not registered at all (`expected` is `None`).
    #[error("connection {connection} claimed user '{actual}' but is registered as {}", describe_expected(.expected))]
    IdentityMismatch {
        connection: ConnectionId,
        expected: Option<UserId>,
        actual: UserId,
    },

    /// Cleanup was attempted for a connection without a presence entry.
    #[error("connection {0} has no presence entry")]
    UnknownConnection(ConnectionId),
}

fn describe_expected(expected: &Option<UserId>) -> String {
    match expected {
        Some(user) => format!("'{}'", user),
        None => "nobody".to_string(),
    }
}
