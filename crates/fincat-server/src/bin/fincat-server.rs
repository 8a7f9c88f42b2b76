//! Fincat demo backend
//!
//! Serves the stock list, the chat bot, and the embedded frontend.
//!
//! # Usage
//!
//! ```bash
//! # Defaults to 127.0.0.1:8000; FINCAT_HOST / FINCAT_PORT also work
//! cargo run --bin fincat-server -p fincat-server -- --port 8000
//! ```

use clap::Parser;
use fincat_server::{AppState, ServerConfig, router};
use std::env;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fincat-server")]
#[command(about = "Backend for the fincat stock watchlist demo", long_about = None)]
struct Args {
    /// Interface to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            env::var("RUST_LOG").unwrap_or_else(|_| "info,fincat_server=debug".to_string()),
        )
        .init();

    let args = Args::parse();

    let mut config = ServerConfig::default().with_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let state = AppState::new();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    info!("fincat listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
