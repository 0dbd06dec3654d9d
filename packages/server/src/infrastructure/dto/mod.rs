//! Data Transfer Objects (DTOs) for the presence server.
//!
//! - `websocket`: WebSocket message DTOs (shared with the client crate)
//! - `conversion`: conversion between DTOs and domain entities

pub mod conversion;

pub use conversion::encode_presence_update;
pub use cursorsync_shared::protocol as websocket;
