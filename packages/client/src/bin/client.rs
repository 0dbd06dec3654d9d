//! Synthetic presence client.
//!
//! Connects to a presence server, announces itself with presence-connect
//! and then moves its pointer randomly every interval, printing every
//! presence-update it receives.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin cursorsync-client
//! cargo run --bin cursorsync-client -- --user alice --interval-ms 500
//! ```

use std::time::Duration;

use clap::Parser;

use cursorsync_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "cursorsync-client")]
#[command(about = "Synthetic client that sends random pointer moves", long_about = None)]
struct Args {
    /// User to connect as
    #[arg(short = 'U', long, default_value = "ABCDEFGHIJK")]
    user: String,

    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:3000")]
    url: String,

    /// Milliseconds between two moves
    #[arg(short = 'i', long, default_value = "3000")]
    interval_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = cursorsync_client::run_client(
        &args.url,
        &args.user,
        Duration::from_millis(args.interval_ms),
    )
    .await
    {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
