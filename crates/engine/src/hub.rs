//! Session hub: starts sessions and routes reactions to them.
//!
//! The hub is an ordinary value handed to whatever receives reactions. It
//! keeps one `MoveSender` and one shutdown trigger per live session; the game
//! state itself never leaves the session task.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;
use crate::core::GameState;
use crate::error::SessionError;
use crate::input::symbol_to_move;
use crate::queue::{move_channel, shutdown_signal, MoveSender, ShutdownTrigger};
use crate::session::{EventSender, Session, SessionId, SessionReport};
use crate::types::PlayerMove;

/// A started session
pub struct SessionHandle {
    pub id: SessionId,
    pub moves: MoveSender,
    pub task: JoinHandle<Result<SessionReport, SessionError>>,
}

/// What happened to a routed reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Delivered to the session's queue
    Queued(PlayerMove),
    /// Reactions added by bots never count
    IgnoredBot,
    /// Not one of the five control symbols
    Unrecognized,
    /// No live session with that id
    UnknownSession,
}

/// What the hub keeps for one live session
struct SessionSlot {
    moves: MoveSender,
    shutdown: ShutdownTrigger,
}

#[derive(Clone)]
pub struct SessionHub {
    config: EngineConfig,
    sessions: Arc<RwLock<HashMap<SessionId, SessionSlot>>>,
    next_id: Arc<AtomicU64>,
    events: EventSender,
}

impl SessionHub {
    pub fn new(config: EngineConfig, events: EventSender) -> Self {
        Self {
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            events,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new game on its own task
    pub async fn start_session(&self) -> SessionHandle {
        let id = self.allocate_id();
        self.spawn_session(id).await
    }

    /// Reserve an id without starting anything yet.
    ///
    /// Lets a caller wire up delivery for the id before the first view is published.
    pub fn allocate_id(&self) -> SessionId {
        SessionId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Start a game under an id from [`SessionHub::allocate_id`]
    pub async fn spawn_session(&self, id: SessionId) -> SessionHandle {
        let seed = self.config.session_seed(id);
        let (moves, queue) = move_channel(self.config.move_order);
        let (shutdown, listener) = shutdown_signal();

        self.sessions.write().await.insert(
            id,
            SessionSlot {
                moves: moves.clone(),
                shutdown,
            },
        );

        let session = Session::new(
            id,
            GameState::new(seed),
            queue,
            self.events.clone(),
            self.config.tick,
        )
        .with_shutdown(listener);

        let sessions = Arc::clone(&self.sessions);
        let task = tokio::spawn(async move {
            let result = session.run().await;
            sessions.write().await.remove(&id);
            match &result {
                Ok(report) => info!(
                    session = %id,
                    score = report.score,
                    lines = report.lines,
                    ticks = report.ticks,
                    "[Hub] session finished"
                ),
                Err(e) => warn!(session = %id, error = %e, "[Hub] session aborted"),
            }
            result
        });

        SessionHandle { id, moves, task }
    }

    /// Deliver a reaction symbol to a session
    pub async fn route_reaction(
        &self,
        id: SessionId,
        symbol: &str,
        from_bot: bool,
    ) -> RouteOutcome {
        if from_bot {
            return RouteOutcome::IgnoredBot;
        }

        let Some(mv) = symbol_to_move(symbol) else {
            debug!(session = %id, symbol, "[Hub] ignoring unrecognized reaction");
            return RouteOutcome::Unrecognized;
        };

        let sessions = self.sessions.read().await;
        match sessions.get(&id) {
            Some(slot) if slot.moves.send(mv) => RouteOutcome::Queued(mv),
            _ => RouteOutcome::UnknownSession,
        }
    }

    /// Make a session quit on its next tick, ahead of any queued reactions.
    ///
    /// Returns false if it is not running.
    pub async fn end_session(&self, id: SessionId) -> bool {
        let sessions = self.sessions.read().await;
        sessions
            .get(&id)
            .map(|slot| slot.shutdown.trigger())
            .unwrap_or(false)
    }

    pub async fn is_active(&self, id: SessionId) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }
}
