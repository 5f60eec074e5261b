//! Protocol module - JSON message types for the reaction adapter
//!
//! One JSON object per line, discriminated by `type`.

use serde::{Deserialize, Serialize};

use crate::engine::{SessionEvent, SessionId};
use crate::input::control_symbols;

// ============== Client -> Server Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Start a new game
    Play,
    /// Add a reaction to a game message
    React {
        session: u64,
        symbol: String,
        /// Reactions added by bots are ignored
        #[serde(default)]
        bot: bool,
    },
}

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A game was created; `controls` are the reaction buttons to offer
    Started { session: u64, controls: Vec<String> },
    /// Replace the game message with this content
    View {
        session: u64,
        title: String,
        body: String,
    },
    GameOver {
        session: u64,
        score: u32,
        reason: String,
    },
    Error { code: ErrorCode, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidMessage,
    UnknownSession,
}

impl ServerMessage {
    pub fn started(session: SessionId) -> Self {
        ServerMessage::Started {
            session: session.0,
            controls: control_symbols().iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        ServerMessage::Error {
            code,
            message: message.into(),
        }
    }
}

impl From<SessionEvent> for ServerMessage {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::View { session, view } => ServerMessage::View {
                session: session.0,
                title: view.title,
                body: view.body,
            },
            SessionEvent::GameOver {
                session,
                score,
                reason,
            } => ServerMessage::GameOver {
                session: session.0,
                score,
                reason: reason.as_str().to_string(),
            },
        }
    }
}

/// Parse one inbound line
pub fn parse_client_message(line: &str) -> Result<ClientMessage, serde_json::Error> {
    serde_json::from_str(line)
}
