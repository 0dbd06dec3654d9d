//! WebSocket presence server for multiplayer cursors.
//!
//! Tracks each client's user and pointer position and broadcasts the full
//! presence set to every connected client whenever it changes.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin cursorsync-server
//! cargo run --bin cursorsync-server -- --host 0.0.0.0 --port 3000
//! ```

use std::{collections::HashMap, sync::Arc};

use clap::Parser;
use cursorsync_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher, repository::InMemoryPresenceRegistry,
    },
    ui::{Server, state::AppState},
};
use cursorsync_shared::logger::setup_logger;
use tokio::sync::Mutex;

#[derive(Parser, Debug)]
#[command(name = "cursorsync-server")]
#[command(about = "WebSocket presence server with broadcast support", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Registry
    // 2. MessagePusher
    // 3. UseCases (AppState)
    // 4. Server

    // 1. Create Registry (in-memory, rebuilt from empty on every start)
    let registry = Arc::new(InMemoryPresenceRegistry::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 2. Create MessagePusher (WebSocket implementation)
    let message_pusher = Arc::new(WebSocketMessagePusher::new(Arc::new(Mutex::new(
        HashMap::new(),
    ))));

    // 3. Wire UseCases
    let app_state = AppState::new(registry, message_pusher);

    // 4. Create and run the server
    let server = Server::new(app_state);
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
