//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::types::Config;
use modlink_proto::error::PrefixError;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The configured command prefix can never match a chat line.
    #[error("chat.prefix is unusable: {0}")]
    BadPrefix(#[from] PrefixError),
}

/// Validate a configuration.
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    modlink_proto::error::validate_prefix(&config.chat.prefix)?;
    Ok(())
}
