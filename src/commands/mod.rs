//! Chat command handling.
//!
//! This module contains the [`ChatCommand`] trait and the [`CommandRegistry`]
//! for dispatching submitted chat lines to registered handlers.
//!
//! Handlers receive the argument tokens as `&str` slices borrowed from the
//! submitted line, plus a [`CommandContext`] giving scoped access to the
//! host and the player tracker.

mod registry;
mod set;

pub use registry::CommandRegistry;
pub use set::{CommandSet, CommandSpec};

use crate::error::CommandResult;
use crate::events::PlayerTracker;
use crate::host::Host;

/// Handler context passed to each command invocation.
pub struct CommandContext<'a> {
    /// The embedding host.
    pub host: &'a mut dyn Host,
    /// Connectivity state and the joined/left hooks.
    pub players: &'a mut PlayerTracker,
}

/// Trait implemented by all chat-command handlers.
///
/// `args` are the space-separated tokens after the command name, in order,
/// with no quoting applied; a handler wanting one free-text argument rejoins
/// them with `args.join(" ")`.
pub trait ChatCommand {
    /// Handle one invocation of the command.
    fn run(&self, ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult;
}

/// Plain closures are commands too, so mods can register inline.
impl<F> ChatCommand for F
where
    F: Fn(&mut CommandContext<'_>, &[&str]) -> CommandResult,
{
    fn run(&self, ctx: &mut CommandContext<'_>, args: &[&str]) -> CommandResult {
        self(ctx, args)
    }
}
