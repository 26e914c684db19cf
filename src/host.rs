//! The cooperative host contract.
//!
//! Instead of splicing itself into the game binary, this layer assumes the
//! embedding process implements [`Host`] and calls the [`Modlink`] entry
//! points at the matching lifecycle moments: once per remote-player
//! disconnect (with the slot and session handle), once on local-session
//! disconnect, and once per submitted chat line (suppressing normal chat
//! processing when the call reports the line as handled).
//!
//! [`Modlink`]: crate::Modlink

use crate::events::player::{ConnectionId, PlayerSlot, PlayerSnapshot};

/// Interface the embedding game process provides to the layer.
pub trait Host {
    /// Whether the host still tracks this session handle.
    ///
    /// The host may invoke the disconnect lifecycle call speculatively,
    /// before (or after) full session teardown; the layer double-checks
    /// here before firing a "left" event.
    fn is_connection_tracked(&self, connection: ConnectionId) -> bool;

    /// Snapshot of the player occupying a slot, if any.
    fn player_in_slot(&self, slot: PlayerSlot) -> Option<PlayerSnapshot>;

    /// Snapshot of the local player.
    fn local_player(&self) -> PlayerSnapshot;

    /// Clear the chat input field and drop typing focus.
    ///
    /// Invoked after a chat line was consumed as a command so the text never
    /// reaches normal chat processing half-typed.
    fn reset_chat_input(&mut self);
}
