//! Game state module - one session's board, active piece and score
//!
//! `GameState::tick` is the whole per-tick rule set with no timing or I/O:
//! apply at most one player move, apply gravity, lock and respawn when the
//! piece cannot fall, clear full rows, score. The async session loop calls
//! it once per interval.

use crate::board::Board;
use crate::movement::{apply_move, fits, try_descend};
use crate::piece::Piece;
use crate::rng::PieceRng;
use crate::scoring::line_clear_score;
use crate::types::{GameOverReason, PlayerMove};

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Over(GameOverReason),
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Play continues. `locked` is set when a piece locked and a new one spawned.
    Running { locked: bool, cleared: usize },
    /// The game ended on this tick (or had already ended)
    GameOver(GameOverReason),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Piece,
    rng: PieceRng,
    score: u32,
    lines: u32,
    pieces_locked: u32,
    ticks: u64,
    status: GameStatus,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u32) -> Self {
        let mut rng = PieceRng::new(seed);
        let active = Piece::spawn(rng.draw());
        Self::with_setup(Board::new(), active, rng)
    }

    /// Start from an arbitrary board and active piece.
    ///
    /// Later spawns still come from `rng`.
    pub fn with_setup(board: Board, active: Piece, rng: PieceRng) -> Self {
        Self {
            board,
            active,
            rng,
            score: 0,
            lines: 0,
            pieces_locked: 0,
            ticks: 0,
            status: GameStatus::Running,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        matches!(self.status, GameStatus::Over(_))
    }

    /// Apply a player move to the active piece.
    ///
    /// Returns whether the piece changed. `Quit` ends the game.
    pub fn apply_move(&mut self, mv: PlayerMove) -> bool {
        if self.game_over() {
            return false;
        }
        if mv == PlayerMove::Quit {
            self.status = GameStatus::Over(GameOverReason::Quit);
            return false;
        }
        apply_move(&mut self.active, mv, &self.board)
    }

    /// Advance the game by one tick.
    pub fn tick(&mut self, mv: Option<PlayerMove>) -> TickOutcome {
        if let GameStatus::Over(reason) = self.status {
            return TickOutcome::GameOver(reason);
        }
        self.ticks += 1;

        if let Some(mv) = mv {
            self.apply_move(mv);
            if let GameStatus::Over(reason) = self.status {
                return TickOutcome::GameOver(reason);
            }
        }

        let mut locked = false;
        if !try_descend(&mut self.active, &self.board) {
            self.lock_and_respawn();
            locked = true;
            if let GameStatus::Over(reason) = self.status {
                return TickOutcome::GameOver(reason);
            }
        }

        let cleared = self.board.clear_full_rows();
        self.lines += cleared as u32;
        self.score += line_clear_score(cleared);

        TickOutcome::Running { locked, cleared }
    }

    fn lock_and_respawn(&mut self) {
        self.board.lock_piece(&self.active);
        self.pieces_locked += 1;

        let next = Piece::spawn(self.rng.draw());
        if !fits(&next, &self.board) {
            self.status = GameStatus::Over(GameOverReason::StackOut);
        }
        self.active = next;
    }
}
