//! Engine configuration, read from the environment.

use std::time::Duration;

use crate::session::SessionId;
use crate::types::TICK_MS;

/// Which queued move a session consumes on each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    /// Most recent reaction wins; older ones wait for later ticks
    Lifo,
    /// Oldest reaction first
    Fifo,
}

impl MoveOrder {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lifo" => Some(MoveOrder::Lifo),
            "fifo" => Some(MoveOrder::Fifo),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveOrder::Lifo => "lifo",
            MoveOrder::Fifo => "fifo",
        }
    }
}

/// Settings shared by every session a hub starts
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Sleep between ticks
    pub tick: Duration,
    pub move_order: MoveOrder,
    /// Fixed base seed; each session offsets it by its id. Random when `None`.
    pub seed: Option<u32>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS),
            move_order: MoveOrder::Lifo,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_TICK_MS`: tick interval (default 1000)
    /// - `TETRIS_MOVE_ORDER`: `lifo` (default) or `fifo`
    /// - `TETRIS_SEED`: base seed for piece draws (random when unset)
    pub fn from_env() -> Self {
        use std::env;

        let tick_ms = env::var("TETRIS_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let move_order = env::var("TETRIS_MOVE_ORDER")
            .ok()
            .and_then(|s| MoveOrder::from_str(&s))
            .unwrap_or(MoveOrder::Lifo);

        let seed = env::var("TETRIS_SEED")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok());

        Self {
            tick: Duration::from_millis(tick_ms),
            move_order,
            seed,
        }
    }

    /// Seed for one session's piece draws
    pub fn session_seed(&self, session: SessionId) -> u32 {
        match self.seed {
            Some(base) => base.wrapping_add(session.0 as u32),
            None => rand::random(),
        }
    }
}
