//! UseCase layer.
//!
//! Each registry mutation is its own usecase. A usecase applies the
//! mutation through `PresenceRegistry` and, depending on the result,
//! decides whether to ask the `PresenceBroadcaster` to republish.

mod broadcast_presence;
mod connect_presence;
mod disconnect_presence;
mod move_presence;
mod open_connection;

pub use broadcast_presence::BroadcastPresenceUseCase;
pub use connect_presence::ConnectPresenceUseCase;
pub use disconnect_presence::DisconnectPresenceUseCase;
pub use move_presence::MovePresenceUseCase;
pub use open_connection::OpenConnectionUseCase;
