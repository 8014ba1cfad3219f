//! # Session Errors
//!
//! Storefront intents never fail: rejected intents are no-ops. The only errors a caller
//! sees come from the runtime boundary around the session.

/// Errors that can occur while talking to a session actor.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session actor closed")]
    ActorClosed,
    #[error("Session actor dropped response channel")]
    ActorDropped,
    #[error("Session task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
