//! Adapter module - reaction play over a TCP socket with a JSON protocol
//!
//! This module stands in for the chat platform: a client posts "messages"
//! (games) and "reactions" (moves), and receives each game's rendered view
//! whenever it changes.
//!
//! # Protocol Overview
//!
//! The adapter implements a **line-delimited JSON protocol** over TCP:
//!
//! 1. **Connection**: Client connects to TCP socket (default: 127.0.0.1:7788)
//! 2. **Play**: Client sends `play`, server answers `started` with the session id
//! 3. **Views**: Server sends a `view` for every tick of that session
//! 4. **Reactions**: Client sends `react` with one of the control symbols
//! 5. **End**: Server sends `game_over` once; no views follow it
//!
//! # Message Types
//!
//! ## Client → Server
//!
//! - **play**: Start a new game
//! - **react**: Add a reaction (`session`, `symbol`, optional `bot`)
//!
//! ## Server → Client
//!
//! - **started**: New session id and the reaction buttons to show
//! - **view**: Title and board body to replace the game message with
//! - **game_over**: Final score and reason (`quit` or `stack_out`)
//! - **error**: Error response with code and message
//!
//! Views go only to the client that started the session. Any client may
//! react to any running session. Reactions flagged `bot` and symbols outside
//! the control set are dropped without a reply.
//!
//! # Environment Variables
//!
//! - `TETRIS_ADAPTER_HOST`: Bind address (default: "127.0.0.1")
//! - `TETRIS_ADAPTER_PORT`: Port number (default: 7788)
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Server: {"type":"play"}
//! Server -> Client: {"type":"started","session":1,"controls":["⬆️","⬇️","⬅️","➡️","❌"]}
//! Server -> Client: {"type":"view","session":1,"title":"TETRIS. Score: 0","body":"⬛⬛⬛⬛🟫🟫⬛⬛⬛⬛\n..."}
//! Client -> Server: {"type":"react","session":1,"symbol":"⬅️"}
//! Client -> Server: {"type":"react","session":1,"symbol":"❌"}
//! Server -> Client: {"type":"game_over","session":1,"score":0,"reason":"quit"}
//! ```
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7788
//! {"type":"play"}
//! ```

pub mod protocol;
pub mod server;

pub use reaction_tetris_engine as engine;
pub use reaction_tetris_input as input;
pub use reaction_tetris_types as types;

pub use protocol::{parse_client_message, ClientMessage, ErrorCode, ServerMessage};
pub use server::{run_server, ServerConfig};
