//! Play one reaction session in the terminal.
//!
//! Key presses are turned into the same reaction symbols a chat client would
//! send and routed through the hub, so the game runs exactly as it does
//! behind the adapter. No logging subscriber is installed; the terminal is
//! in raw mode for the whole game.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use reaction_tetris::engine::{EngineConfig, SessionEvent, SessionHub, SessionId};
use reaction_tetris::input::{key_to_symbol, should_abort};
use reaction_tetris::term::TerminalRenderer;
use reaction_tetris::types::GameOverReason;

enum KeyInput {
    Symbol(&'static str),
    Abort,
    Other,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term).await;

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Ok(Some((score, reason))) = &result {
        let why = match reason {
            GameOverReason::Quit => "quit",
            GameOverReason::StackOut => "stack reached the top",
        };
        println!("Game over ({}). Final score: {}", why, score);
    }
    result.map(|_| ())
}

async fn run(term: &mut TerminalRenderer) -> Result<Option<(u32, GameOverReason)>> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let hub = SessionHub::new(EngineConfig::from_env(), events_tx);

    let (keys_tx, mut keys_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || read_keys(keys_tx));

    let game = hub.start_session().await;
    let id: SessionId = game.id;

    let mut keys_open = true;
    let finished = loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(SessionEvent::View { view, .. }) => term.draw(&view)?,
                Some(SessionEvent::GameOver { score, reason, .. }) => break Some((score, reason)),
                None => break None,
            },
            key = keys_rx.recv(), if keys_open => match key {
                Some(KeyInput::Symbol(symbol)) => {
                    hub.route_reaction(id, symbol, false).await;
                }
                Some(KeyInput::Abort) => {
                    hub.end_session(id).await;
                }
                None => {
                    keys_open = false;
                    hub.end_session(id).await;
                }
                Some(KeyInput::Other) => {}
            },
        }
    };

    if let Some((score, _)) = finished {
        term.notice(&format!("GAME OVER. Score: {} (press any key)", score))?;
        let _ = keys_rx.recv().await;
    }
    Ok(finished)
}

fn read_keys(tx: mpsc::UnboundedSender<KeyInput>) {
    while !tx.is_closed() {
        match event::poll(Duration::from_millis(100)) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(_) => break,
        }
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break,
        };

        let input = if should_abort(key) {
            KeyInput::Abort
        } else if let Some(symbol) = key_to_symbol(key) {
            KeyInput::Symbol(symbol)
        } else {
            KeyInput::Other
        };
        if tx.send(input).is_err() {
            break;
        }
    }
}
