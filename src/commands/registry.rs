//! Registry of chat commands.
//!
//! Maps command names (and alias groups) to handlers, resolves submitted
//! tokens alias-aware, and dispatches lines without letting one handler's
//! failure break the chat box.

use std::collections::HashMap;

use modlink_proto::{CommandLine, CommandNameExt};
use tracing::{debug, error};

use super::{ChatCommand, CommandContext};

/// Registry mapping command names and aliases to handlers.
pub struct CommandRegistry {
    prefix: String,
    handlers: HashMap<String, Box<dyn ChatCommand>>,
    /// Primary name -> alias group. An alias never appears as a key in
    /// `handlers`; resolution falls back to scanning these groups.
    aliases: HashMap<String, Vec<String>>,
}

impl CommandRegistry {
    /// Create an empty registry for the given command prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            handlers: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// The configured command prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Register a command with no aliases.
    ///
    /// Returns `false` (and registers nothing) if the name is empty,
    /// contains whitespace, or is already taken by any command's name or
    /// alias.
    pub fn register(&mut self, name: &str, handler: impl ChatCommand + 'static) -> bool {
        self.register_aliased(name, &[], handler)
    }

    /// Register a command with aliases.
    ///
    /// The name and every alias must be valid command names and unused
    /// across all existing names and aliases. Validation happens before any
    /// mapping is inserted, so a rejected registration leaves no trace and
    /// a successful one becomes visible in full.
    pub fn register_aliased(
        &mut self,
        name: &str,
        aliases: &[&str],
        handler: impl ChatCommand + 'static,
    ) -> bool {
        self.insert(name, aliases, Box::new(handler))
    }

    /// Shared registration path for the imperative and declarative APIs.
    pub(crate) fn insert(
        &mut self,
        name: &str,
        aliases: &[&str],
        handler: Box<dyn ChatCommand>,
    ) -> bool {
        if !name.is_command_name() || self.resolve(name).is_some() {
            return false;
        }
        for alias in aliases {
            if !alias.is_command_name() || self.resolve(alias).is_some() {
                return false;
            }
        }

        self.handlers.insert(name.to_string(), handler);
        if !aliases.is_empty() {
            self.aliases.insert(
                name.to_string(),
                aliases.iter().map(|a| a.to_string()).collect(),
            );
        }
        true
    }

    /// Unregister a command and its alias group.
    ///
    /// Returns whether the command previously existed. The name and its
    /// aliases immediately become available for re-registration.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.aliases.remove(name);
        self.handlers.remove(name).is_some()
    }

    /// Resolve a token to its owning handler, by primary name or alias.
    ///
    /// Exact name lookup first, then a linear scan of alias groups. Linear
    /// is fine at the tens of registrations a modded game sees; a registry
    /// holding thousands of commands would want a direct token -> owner
    /// index instead.
    pub fn resolve(&self, token: &str) -> Option<&dyn ChatCommand> {
        if let Some(handler) = self.handlers.get(token) {
            return Some(handler.as_ref());
        }

        for (owner, aliases) in &self.aliases {
            if aliases.iter().any(|a| a == token) {
                return self.handlers.get(owner).map(|h| h.as_ref());
            }
        }

        None
    }

    /// Dispatch a submitted chat line.
    ///
    /// Returns whether the line was consumed as a command. Text without the
    /// prefix and unresolvable names are normal not-handled outcomes. A
    /// handler failure is caught and logged with the offending command name;
    /// once a command resolved, the line counts as handled regardless.
    ///
    /// The registry performs no chat-UI side effects; those belong to the
    /// caller.
    pub fn dispatch(&self, raw: &str, ctx: &mut CommandContext<'_>) -> bool {
        let Some(line) = CommandLine::parse(raw, &self.prefix) else {
            return false;
        };

        let Some(handler) = self.resolve(line.name) else {
            debug!(command = %line.name, "Unknown chat command ignored");
            return false;
        };

        if let Err(e) = handler.run(ctx, &line.args) {
            error!(
                command = %line.name,
                code = e.error_code(),
                error = %e,
                "Error handling command"
            );
        }

        true
    }
}
