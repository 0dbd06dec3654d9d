//! Code shared between the Cursorsync server and client.
//!
//! - `protocol`: WebSocket message DTOs exchanged on the wire
//! - `logger`: tracing subscriber setup for the binaries

pub mod logger;
pub mod protocol;
