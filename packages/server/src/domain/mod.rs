//! Domain layer: presence model and the interfaces the usecases depend on.

pub mod broadcaster;
pub mod entity;
pub mod error;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use broadcaster::PresenceBroadcaster;
pub use entity::UserPresence;
pub use error::RegistryError;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::PresenceRegistry;
pub use value_object::{ConnectionId, Position, UserId};
