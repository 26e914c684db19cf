//! Command name utilities.
//!
//! A command name (or alias) is a single chat token: it must survive
//! single-space tokenization intact, so it can never contain whitespace.

/// Extension trait for checking if a string is a valid command name.
pub trait CommandNameExt {
    /// Check if this string is a valid command name or alias.
    ///
    /// Valid names:
    /// - Are non-empty
    /// - Contain no whitespace (space, tab, or any Unicode whitespace)
    fn is_command_name(&self) -> bool;
}

impl CommandNameExt for &str {
    fn is_command_name(&self) -> bool {
        !self.is_empty() && !self.contains(char::is_whitespace)
    }
}

impl CommandNameExt for String {
    fn is_command_name(&self) -> bool {
        self.as_str().is_command_name()
    }
}
