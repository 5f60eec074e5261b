use thiserror::Error;

use crate::session::SessionId;

/// Failures that end a session loop early.
///
/// Invalid moves and unknown symbols are not errors; they are dropped.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Nobody is listening for rendered views any more
    #[error("session {0}: publish channel closed")]
    ChannelClosed(SessionId),
}
