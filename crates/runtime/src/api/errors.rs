//! Unified error types surfaced by the runtime API.
//!
//! Infrastructure failures (closed channels, worker join) sit next to
//! [`RuntimeError::Rejected`], which wraps an input guard from the session.
//! Frontends treat rejections as silent no-ops.
use thiserror::Error;
use tokio::sync::oneshot;

use crate::session::SessionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("command rejected: {0}")]
    Rejected(#[from] SessionError),
}

impl RuntimeError {
    /// True when the session refused the input and nothing changed.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// The guard that refused the input, if any.
    pub fn as_rejection(&self) -> Option<&SessionError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}
