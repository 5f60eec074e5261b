//! TCP server for the reaction adapter
//!
//! Accepts connections, starts sessions on `play`, forwards reactions to the
//! hub and streams each session's views back to the client that started it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, info, warn};

use crate::engine::{EngineConfig, RouteOutcome, SessionEvent, SessionHub, SessionId};
use crate::protocol::*;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7788,
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("TETRIS_ADAPTER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("TETRIS_ADAPTER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7788);

        Self { host, port }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid adapter address {}:{}", self.host, self.port))
    }
}

type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// Shared server state
struct ServerState {
    hub: SessionHub,
    /// Session -> the client that started it
    owners: RwLock<HashMap<SessionId, Outbox>>,
}

/// Run the adapter until the listener fails.
///
/// `ready_tx` receives the bound address once the listener is up.
pub async fn run_server(
    config: ServerConfig,
    engine: EngineConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<SessionEvent>();
    let hub = SessionHub::new(engine, events_tx);

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let bound = listener.local_addr()?;
    info!(addr = %bound, "[Adapter] TCP server listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let state = Arc::new(ServerState {
        hub,
        owners: RwLock::new(HashMap::new()),
    });

    // Session event dispatcher.
    {
        let state = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                let session = event.session();
                let finished = matches!(event, SessionEvent::GameOver { .. });

                if let Some(outbox) = state.owners.read().await.get(&session) {
                    let _ = outbox.send(ServerMessage::from(event));
                }
                if finished {
                    state.owners.write().await.remove(&session);
                }
            }
        });
    }

    let mut client_id_counter = 0usize;

    // Accept incoming connections
    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        info!(client = client_id, %addr, "[Adapter] client connected");

        let state = Arc::clone(&state);
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, state).await {
                warn!(client = client_id, error = %e, "[Adapter] client error");
            }
            info!(client = client_id, "[Adapter] client disconnected");
        });
    }
}

/// Handle a single client connection
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    state: Arc<ServerState>,
) -> anyhow::Result<()> {
    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();

    // Channel to send messages to this client
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    let write_task = tokio::spawn(async move {
        let mut buf: Vec<u8> = Vec::with_capacity(4096);
        while let Some(msg) = rx.recv().await {
            buf.clear();
            if serde_json::to_writer(&mut buf, &msg).is_err() {
                continue;
            }
            buf.push(b'\n');
            if writer.write_all(&buf).await.is_err() {
                break;
            }
        }
    });

    let mut started: Vec<SessionId> = Vec::new();

    let result = read_loop(&mut lines, client_id, &state, &tx, &mut started).await;

    // A client that goes away quits every game it started.
    for id in started {
        state.hub.end_session(id).await;
        state.owners.write().await.remove(&id);
    }
    drop(tx);
    write_task.abort();

    result
}

async fn read_loop(
    lines: &mut tokio::io::Lines<BufReader<tokio::net::tcp::OwnedReadHalf>>,
    client_id: usize,
    state: &ServerState,
    tx: &Outbox,
    started: &mut Vec<SessionId>,
) -> anyhow::Result<()> {
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_client_message(line) {
            Ok(ClientMessage::Play) => {
                let id = state.hub.allocate_id();
                state.owners.write().await.insert(id, tx.clone());
                let _ = tx.send(ServerMessage::started(id));
                state.hub.spawn_session(id).await;
                started.push(id);
                info!(client = client_id, session = %id, "[Adapter] game started");
            }
            Ok(ClientMessage::React {
                session,
                symbol,
                bot,
            }) => match state.hub.route_reaction(SessionId(session), &symbol, bot).await {
                RouteOutcome::UnknownSession => {
                    let _ = tx.send(ServerMessage::error(
                        ErrorCode::UnknownSession,
                        format!("no running game {}", session),
                    ));
                }
                outcome => {
                    debug!(client = client_id, session, ?outcome, "[Adapter] reaction routed");
                }
            },
            Err(e) => {
                let _ = tx.send(ServerMessage::error(ErrorCode::InvalidMessage, e.to_string()));
            }
        }
    }
    Ok(())
}
