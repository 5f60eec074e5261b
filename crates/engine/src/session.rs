//! Session: one game played on one message.
//!
//! A session owns its `GameState` and `MoveQueue` outright and runs as a
//! single task: publish the opening view, then tick, publish, sleep until
//! the player quits or the stack reaches the spawn area.

use std::fmt;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::core::{GameState, TickOutcome};
use crate::error::SessionError;
use crate::queue::{MoveQueue, ShutdownListener};
use crate::term::{render_view, RenderedView};
use crate::types::{GameOverReason, PlayerMove};

/// Identity of a session (the game message it is played on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Something the player-facing surface must show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Replace the session's message with this view
    View {
        session: SessionId,
        view: RenderedView,
    },
    /// The session ended; no more views follow
    GameOver {
        session: SessionId,
        score: u32,
        reason: GameOverReason,
    },
}

impl SessionEvent {
    pub fn session(&self) -> SessionId {
        match self {
            SessionEvent::View { session, .. } => *session,
            SessionEvent::GameOver { session, .. } => *session,
        }
    }
}

pub type EventSender = mpsc::UnboundedSender<SessionEvent>;

/// Summary returned when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub session: SessionId,
    pub score: u32,
    pub lines: u32,
    pub ticks: u64,
    pub reason: GameOverReason,
}

pub struct Session {
    id: SessionId,
    state: GameState,
    moves: MoveQueue,
    events: EventSender,
    tick: Duration,
    shutdown: Option<ShutdownListener>,
}

impl Session {
    pub fn new(
        id: SessionId,
        state: GameState,
        moves: MoveQueue,
        events: EventSender,
        tick: Duration,
    ) -> Self {
        Self {
            id,
            state,
            moves,
            events,
            tick,
            shutdown: None,
        }
    }

    /// End the game as soon as `shutdown` fires, ahead of any queued moves
    pub fn with_shutdown(mut self, shutdown: ShutdownListener) -> Self {
        self.shutdown = Some(shutdown);
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current view of the game
    pub fn view(&self) -> RenderedView {
        render_view(self.state.board(), self.state.active(), self.state.score())
    }

    fn publish(&self, event: SessionEvent) -> Result<(), SessionError> {
        self.events
            .send(event)
            .map_err(|_| SessionError::ChannelClosed(self.id))
    }

    /// Send the current view
    pub fn publish_view(&self) -> Result<(), SessionError> {
        self.publish(SessionEvent::View {
            session: self.id,
            view: self.view(),
        })
    }

    /// Run one tick without sleeping.
    ///
    /// Returns the final report once the game is over.
    pub fn step(&mut self) -> Result<Option<SessionReport>, SessionError> {
        let shutdown = self.shutdown.as_ref().is_some_and(|s| s.is_triggered());
        let mv = if shutdown {
            debug!(session = %self.id, "[Session] shutdown requested");
            Some(PlayerMove::Quit)
        } else {
            self.moves.next_move()
        };
        if let Some(mv) = mv {
            debug!(session = %self.id, mv = mv.as_str(), "[Session] applying move");
        }

        match self.state.tick(mv) {
            TickOutcome::GameOver(reason) => {
                self.publish(SessionEvent::GameOver {
                    session: self.id,
                    score: self.state.score(),
                    reason,
                })?;
                info!(
                    session = %self.id,
                    score = self.state.score(),
                    reason = reason.as_str(),
                    "[Session] game over"
                );
                Ok(Some(self.report(reason)))
            }
            TickOutcome::Running { locked, cleared } => {
                if locked {
                    debug!(
                        session = %self.id,
                        cleared,
                        score = self.state.score(),
                        "[Session] piece locked"
                    );
                }
                self.publish_view()?;
                Ok(None)
            }
        }
    }

    /// Play until quit or stack-out
    pub async fn run(mut self) -> Result<SessionReport, SessionError> {
        info!(session = %self.id, seed = self.state.seed(), "[Session] started");
        self.publish_view()?;

        loop {
            if let Some(report) = self.step()? {
                return Ok(report);
            }
            tokio::time::sleep(self.tick).await;
        }
    }

    fn report(&self, reason: GameOverReason) -> SessionReport {
        SessionReport {
            session: self.id,
            score: self.state.score(),
            lines: self.state.lines(),
            ticks: self.state.ticks(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MoveOrder;
    use crate::core::{Board, Piece, PieceRng};
    use crate::queue::{move_channel, shutdown_signal, MoveSender};
    use crate::types::PieceKind;

    fn session_with(
        state: GameState,
        order: MoveOrder,
    ) -> (Session, MoveSender, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, queue) = move_channel(order);
        let (ev_tx, ev_rx) = mpsc::unbounded_channel();
        let session = Session::new(SessionId(7), state, queue, ev_tx, Duration::from_millis(1));
        (session, tx, ev_rx)
    }

    #[test]
    fn step_publishes_view_each_tick() {
        let (mut session, _tx, mut events) = session_with(GameState::new(1), MoveOrder::Lifo);
        assert_eq!(session.step().unwrap(), None);
        match events.try_recv().unwrap() {
            SessionEvent::View { session: id, view } => {
                assert_eq!(id, SessionId(7));
                assert_eq!(view.title, "TETRIS. Score: 0");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn quit_publishes_game_over_and_reports() {
        let (mut session, tx, mut events) = session_with(GameState::new(1), MoveOrder::Lifo);
        tx.send(PlayerMove::Quit);
        let report = session.step().unwrap().expect("session should end");
        assert_eq!(report.reason, GameOverReason::Quit);
        assert_eq!(
            events.try_recv().unwrap(),
            SessionEvent::GameOver {
                session: SessionId(7),
                score: 0,
                reason: GameOverReason::Quit
            }
        );
    }

    #[test]
    fn lifo_applies_latest_move_first() {
        let start = Piece::at(PieceKind::O, 0, 5, 3);
        let state = GameState::with_setup(Board::new(), start, PieceRng::new(1));
        let (mut session, tx, _events) = session_with(state, MoveOrder::Lifo);
        tx.send(PlayerMove::ShiftLeft);
        tx.send(PlayerMove::ShiftRight);

        session.step().unwrap();
        assert_eq!(session.state().active().col, 4);
        session.step().unwrap();
        assert_eq!(session.state().active().col, 3);
    }

    #[test]
    fn shutdown_beats_queued_moves() {
        let (session, tx, mut events) = session_with(GameState::new(2), MoveOrder::Lifo);
        let (trigger, listener) = shutdown_signal();
        let mut session = session.with_shutdown(listener);

        for _ in 0..5 {
            tx.send(PlayerMove::ShiftLeft);
        }
        trigger.trigger();

        let report = session.step().unwrap().expect("shutdown should end the game");
        assert_eq!(report.reason, GameOverReason::Quit);
        assert!(matches!(events.try_recv(), Ok(SessionEvent::GameOver { .. })));
    }

    #[test]
    fn closed_publisher_is_an_error() {
        let (mut session, _tx, events) = session_with(GameState::new(1), MoveOrder::Lifo);
        drop(events);
        assert!(matches!(
            session.step(),
            Err(SessionError::ChannelClosed(SessionId(7)))
        ));
    }

    #[tokio::test]
    async fn run_ends_on_quit() {
        let (session, tx, mut events) = session_with(GameState::new(4), MoveOrder::Lifo);
        tx.send(PlayerMove::Quit);
        let report = session.run().await.unwrap();
        assert_eq!(report.reason, GameOverReason::Quit);

        // Opening view, then game over
        assert!(matches!(events.recv().await, Some(SessionEvent::View { .. })));
        assert!(matches!(events.recv().await, Some(SessionEvent::GameOver { .. })));
    }
}
