//! Presence synchronization server library.
//!
//! Tracks which user sits behind each WebSocket connection and where their
//! pointer is, and rebroadcasts the full presence set to every registered
//! connection whenever it changes.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
