//! Synthetic movement client for the Cursorsync presence server.
//!
//! Connects as one user and keeps moving its pointer around the canvas,
//! which is handy for watching presence updates without a browser.

pub mod error;
pub mod formatter;
pub mod session;
pub mod walk;

pub use session::run_client;
