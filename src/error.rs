//! Error handling for the modding layer.
//!
//! Failures here are deliberately soft: a bad registration reports `false`
//! or a logged error, and a failing handler or subscriber is caught at the
//! dispatch boundary. Nothing in this layer is allowed to take the host's
//! chat (or the host itself) down.

use thiserror::Error;

/// Errors a chat-command handler may return.
///
/// These never propagate past the registry: [`dispatch`] catches them, logs
/// them with the offending command name, and reports the line as handled.
///
/// [`dispatch`]: crate::commands::CommandRegistry::dispatch
#[derive(Debug, Error)]
pub enum CommandError {
    /// An argument was present but could not be understood.
    #[error("bad argument: {0}")]
    BadArgument(String),

    /// A required argument was missing.
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),

    /// Any other failure inside the handler.
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl CommandError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadArgument(_) => "bad_argument",
            Self::MissingArgument(_) => "missing_argument",
            Self::Failed(_) => "failed",
        }
    }
}

/// Result type for command handlers.
pub type CommandResult = Result<(), CommandError>;
