//! Declarative batch registration of commands.
//!
//! A mod's initialization hands the registry a [`CommandSet`] describing
//! every command it provides. Entries that fail to register (malformed or
//! colliding names) are logged and skipped; one bad entry never aborts the
//! rest of the batch.

use tracing::error;

use super::{ChatCommand, CommandRegistry};

/// One declaratively described command.
pub struct CommandSpec {
    /// Primary command name.
    pub name: String,
    /// Alternate names resolving to the same handler.
    pub aliases: Vec<String>,
    /// The handler.
    pub handler: Box<dyn ChatCommand>,
}

impl CommandSpec {
    /// Describe a command with no aliases.
    pub fn new(name: impl Into<String>, handler: impl ChatCommand + 'static) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// Add aliases.
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }
}

/// A unit (typically one mod) contributing a batch of commands.
pub trait CommandSet {
    /// The commands this set contributes.
    fn commands(self) -> Vec<CommandSpec>;
}

/// A bare spec list is itself a set.
impl CommandSet for Vec<CommandSpec> {
    fn commands(self) -> Vec<CommandSpec> {
        self
    }
}

impl CommandRegistry {
    /// Register every command of a set.
    ///
    /// Returns the number of commands registered. Rejected entries are
    /// logged with the offending name and skipped.
    pub fn register_set(&mut self, set: impl CommandSet) -> usize {
        let mut registered = 0;
        for spec in set.commands() {
            let aliases: Vec<&str> = spec.aliases.iter().map(String::as_str).collect();
            if self.insert(&spec.name, &aliases, spec.handler) {
                registered += 1;
            } else {
                error!(command = %spec.name, "Rejected command registration (malformed or duplicate name/alias)");
            }
        }
        registered
    }
}
