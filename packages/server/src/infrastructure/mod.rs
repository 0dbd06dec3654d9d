//! Infrastructure layer: concrete implementations of the domain traits.

pub mod dto;
pub mod message_pusher;
pub mod repository;
