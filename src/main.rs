//! Reaction Tetris server (default binary).
//!
//! Starts the session hub behind the TCP reaction adapter. Configuration comes
//! from the environment; see the engine and adapter crate docs.

use std::str::FromStr;

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use reaction_tetris::adapter::{run_server, ServerConfig};
use reaction_tetris::engine::EngineConfig;

fn init_logging() {
    let level = std::env::var("TETRIS_LOG")
        .ok()
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let engine = EngineConfig::from_env();
    info!(
        tick_ms = engine.tick.as_millis() as u64,
        order = engine.move_order.as_str(),
        seed = ?engine.seed,
        "Starting reaction-tetris"
    );

    run_server(ServerConfig::from_env(), engine, None).await
}
