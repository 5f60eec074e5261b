//! Per-session move queue.
//!
//! The input side holds a cloneable [`MoveSender`]; the session loop owns the
//! matching [`MoveQueue`]. Sending never blocks. Each tick the loop drains
//! whatever arrived into a local backlog and takes exactly one move from it.
//!
//! Ending a session from outside (client gone, Ctrl-C) goes through a
//! separate [`shutdown_signal`] so it never waits behind player moves.

use std::collections::VecDeque;

use tokio::sync::{mpsc, watch};

use crate::config::MoveOrder;
use crate::types::PlayerMove;

/// Create a connected sender/queue pair
pub fn move_channel(order: MoveOrder) -> (MoveSender, MoveQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        MoveSender { tx },
        MoveQueue {
            rx,
            backlog: VecDeque::new(),
            order,
        },
    )
}

/// Producer half, held by whoever receives reactions
#[derive(Debug, Clone)]
pub struct MoveSender {
    tx: mpsc::UnboundedSender<PlayerMove>,
}

impl MoveSender {
    /// Queue a move. Returns false once the session has ended.
    pub fn send(&self, mv: PlayerMove) -> bool {
        self.tx.send(mv).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half, owned by the session loop
#[derive(Debug)]
pub struct MoveQueue {
    rx: mpsc::UnboundedReceiver<PlayerMove>,
    backlog: VecDeque<PlayerMove>,
    order: MoveOrder,
}

impl MoveQueue {
    /// Take at most one move without waiting.
    pub fn next_move(&mut self) -> Option<PlayerMove> {
        while let Ok(mv) = self.rx.try_recv() {
            self.backlog.push_back(mv);
        }
        match self.order {
            MoveOrder::Lifo => self.backlog.pop_back(),
            MoveOrder::Fifo => self.backlog.pop_front(),
        }
    }

    /// Moves received but not yet consumed
    pub fn pending(&self) -> usize {
        self.backlog.len()
    }
}

/// Create a connected shutdown trigger/listener pair
pub fn shutdown_signal() -> (ShutdownTrigger, ShutdownListener) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, ShutdownListener { rx })
}

/// Held next to the session's `MoveSender`
#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Ask the session to end on its next tick. Returns false once it has ended.
    pub fn trigger(&self) -> bool {
        self.tx.send(true).is_ok()
    }
}

/// Checked by the session loop before it takes a move
#[derive(Debug)]
pub struct ShutdownListener {
    rx: watch::Receiver<bool>,
}

impl ShutdownListener {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }
}
