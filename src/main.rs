//! Taka Core server binary
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --port 8080
//! PORT=8080 cargo run
//! ```
//!
//! Starts the HTTP server over an in-memory store. The store and hasher
//! are created once here and injected into the services; they live for
//! the whole process and are dropped at shutdown.
//!
//! # Exit Codes
//!
//! - 0: clean shutdown (ctrl-c)
//! - 1: the listener could not be bound or the serve loop failed

use std::process;
use std::sync::Arc;
use taka_core::{cli, ApiServer, AppState, Argon2Hasher, MemoryStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = cli::parse_args();

    let store = Arc::new(MemoryStore::new());
    let hasher = Arc::new(Argon2Hasher::new());
    let state = AppState::new(store, hasher);

    let server = ApiServer::new(state, args.bind_addr());
    if let Err(e) = server.run().await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
