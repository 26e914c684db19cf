//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Default chat-command prefix.
pub fn default_prefix() -> String {
    "/".to_string()
}
