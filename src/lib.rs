//! # modlink
//!
//! An in-process modding layer for a closed-source multiplayer game: a chat
//! command router plus a synchronous gameplay-event dispatcher, so that
//! third-party mods register commands and subscribe to events in one place
//! instead of each patching the game on its own.
//!
//! The layer never rewrites the host. The embedding process implements the
//! [`host::Host`] contract and calls the [`Modlink`] entry points at the
//! matching lifecycle moments:
//!
//! - [`Modlink::on_chat_submitted`] for every submitted chat line (the
//!   return value tells the host whether to suppress normal chat
//!   processing),
//! - [`Modlink::on_player_joined`] / [`Modlink::on_remote_disconnect`] once
//!   per remote player slot transition,
//! - [`Modlink::on_local_disconnect`] when the local session drops.
//!
//! Everything runs synchronously on the host's simulation thread; subscriber
//! and handler invocation order is part of the contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use modlink::{Config, Modlink};
//!
//! let mut layer = Modlink::new(Config::default());
//!
//! layer.commands.register_aliased("give", &["g"], |_ctx: &mut modlink::commands::CommandContext<'_>, args: &[&str]| {
//!     println!("give {args:?}");
//!     Ok(())
//! });
//!
//! layer.players.left.subscribe("my-mod", |event| {
//!     println!("{} left", event.player.name);
//!     Ok(())
//! });
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod telemetry;

pub use commands::{CommandRegistry, CommandSet, CommandSpec};
pub use config::Config;
pub use error::{CommandError, CommandResult};
pub use events::player::{
    ConnectionId, PlayerId, PlayerJoinedEvent, PlayerLeftEvent, PlayerSlot, PlayerSnapshot,
};
pub use events::PlayerTracker;
pub use host::Host;

use commands::CommandContext;

/// The layer's root context: configuration, the command registry, and the
/// player tracker, owned in one place and handed to collaborators
/// explicitly. Lives for the host process's modding lifetime.
pub struct Modlink {
    config: Config,
    /// Chat command registry.
    pub commands: CommandRegistry,
    /// Connectivity state and the joined/left hooks.
    pub players: PlayerTracker,
}

impl Modlink {
    /// Build the layer from a configuration.
    pub fn new(config: Config) -> Self {
        let commands = CommandRegistry::new(config.chat.prefix.clone());
        Self {
            config,
            commands,
            players: PlayerTracker::new(),
        }
    }

    /// The configuration the layer was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Host entry point: a chat line was submitted.
    ///
    /// Returns whether the line was consumed as a command; when it was, the
    /// host's chat input is reset here and the host should suppress its
    /// normal chat processing for the line.
    pub fn on_chat_submitted(&mut self, host: &mut dyn Host, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let mut ctx = CommandContext {
            host: &mut *host,
            players: &mut self.players,
        };
        let handled = self.commands.dispatch(text, &mut ctx);

        if handled {
            host.reset_chat_input();
        }
        handled
    }

    /// Host entry point: a player landed in a slot.
    pub fn on_player_joined(&mut self, host: &dyn Host, slot: PlayerSlot) {
        self.players.on_player_joined(host, slot);
    }

    /// Host entry point: a remote player's session dropped.
    pub fn on_remote_disconnect(
        &mut self,
        host: &dyn Host,
        slot: PlayerSlot,
        connection: ConnectionId,
    ) {
        self.players.on_remote_disconnect(host, slot, connection);
    }

    /// Host entry point: the local session dropped.
    pub fn on_local_disconnect(&mut self, host: &dyn Host) {
        self.players.on_local_disconnect(host);
    }
}
