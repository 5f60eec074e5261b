//! Session engine - the async game loop
//!
//! Each game runs as its own tokio task that owns its board and piece. Player
//! input reaches it through a per-session queue and rendered views leave it
//! through an event channel; nothing else is shared between sessions.
//!
//! # Tick
//!
//! 1. Take at most one queued move (newest first by default) and apply it
//! 2. Move the piece down one row, or lock it and spawn the next one
//! 3. Clear full rows and add 10 points per row
//! 4. Publish the new view
//! 5. Sleep for the tick interval
//!
//! The loop ends on the quit move or when a new piece cannot spawn.
//!
//! # Environment Variables
//!
//! - `TETRIS_TICK_MS`: tick interval in milliseconds (default: 1000)
//! - `TETRIS_MOVE_ORDER`: `lifo` (default) or `fifo`
//! - `TETRIS_SEED`: fixed base seed for piece draws
//!
//! # Example
//!
//! ```no_run
//! use reaction_tetris_engine::{EngineConfig, SessionEvent, SessionHub};
//! use tokio::sync::mpsc;
//!
//! # async fn demo() {
//! let (events_tx, mut events_rx) = mpsc::unbounded_channel();
//! let hub = SessionHub::new(EngineConfig::from_env(), events_tx);
//!
//! let game = hub.start_session().await;
//! hub.route_reaction(game.id, "⬅️", false).await;
//!
//! while let Some(event) = events_rx.recv().await {
//!     if let SessionEvent::GameOver { score, .. } = event {
//!         println!("final score {score}");
//!         break;
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hub;
pub mod queue;
pub mod session;

pub use reaction_tetris_core as core;
pub use reaction_tetris_input as input;
pub use reaction_tetris_term as term;
pub use reaction_tetris_types as types;

pub use config::{EngineConfig, MoveOrder};
pub use error::SessionError;
pub use hub::{RouteOutcome, SessionHandle, SessionHub};
pub use queue::{
    move_channel, shutdown_signal, MoveQueue, MoveSender, ShutdownListener, ShutdownTrigger,
};
pub use session::{EventSender, Session, SessionEvent, SessionId, SessionReport};
