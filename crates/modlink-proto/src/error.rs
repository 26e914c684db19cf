//! Error types for the chat-command protocol.

use thiserror::Error;

/// Errors for an unusable command prefix.
///
/// An empty prefix would classify every chat line as a command, and a prefix
/// containing whitespace can never match the leading token of a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefixError {
    /// The prefix is the empty string.
    #[error("command prefix must not be empty")]
    Empty,
    /// The prefix contains whitespace.
    #[error("command prefix must not contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Validate a command prefix.
///
/// Called by embedders at configuration time; [`CommandLine::parse`] treats
/// an invalid prefix as "nothing matches" rather than panicking.
///
/// [`CommandLine::parse`]: crate::CommandLine::parse
pub fn validate_prefix(prefix: &str) -> Result<(), PrefixError> {
    if prefix.is_empty() {
        return Err(PrefixError::Empty);
    }
    if prefix.contains(char::is_whitespace) {
        return Err(PrefixError::Whitespace(prefix.to_string()));
    }
    Ok(())
}
