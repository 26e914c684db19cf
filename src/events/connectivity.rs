//! Player connectivity tracking.
//!
//! Converts host lifecycle calls into joined/left events that fire at most
//! once per real transition, and keeps the connected-player set consistent
//! with dispatch order. The set is mutated here and nowhere else.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::events::player::{
    ConnectionId, PlayerId, PlayerJoinedEvent, PlayerLeftEvent, PlayerSlot, PlayerSnapshot,
};
use crate::events::Hook;
use crate::host::Host;

/// Connectivity state of a player known to the layer.
///
/// Absent from the map means Unknown. `Disconnected` is terminal for a
/// session; a re-join moves the player back to `Connected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// The player is currently reachable.
    Connected,
    /// The player disconnected and the "left" event already fired.
    Disconnected,
}

/// Tracks which players are connected and owns the joined/left hooks.
pub struct PlayerTracker {
    /// Fired when a player becomes connected.
    pub joined: Hook<PlayerJoinedEvent>,
    /// Fired at most once per real disconnect.
    pub left: Hook<PlayerLeftEvent>,
    states: HashMap<PlayerId, PlayerState>,
}

impl PlayerTracker {
    /// Create a tracker with no known players and no subscribers.
    pub fn new() -> Self {
        Self {
            joined: Hook::new(),
            left: Hook::new(),
            states: HashMap::new(),
        }
    }

    /// Whether a player is currently marked connected.
    pub fn is_connected(&self, id: PlayerId) -> bool {
        self.states.get(&id) == Some(&PlayerState::Connected)
    }

    /// Ids of currently connected players, in ascending order.
    pub fn connected_players(&self) -> Vec<PlayerId> {
        let mut ids: Vec<PlayerId> = self
            .states
            .iter()
            .filter(|(_, state)| **state == PlayerState::Connected)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Host lifecycle call: a player landed in a slot.
    ///
    /// Marks the player connected and fires [`joined`](Self::joined), unless
    /// the player is already marked connected (re-entrant host calls are
    /// no-ops).
    pub fn on_player_joined(&mut self, host: &dyn Host, slot: PlayerSlot) {
        let Some(player) = host.player_in_slot(slot) else {
            debug!(slot = slot.0, "Join for unoccupied slot ignored");
            return;
        };

        if self.is_connected(player.id) {
            debug!(player = %player.name, "Duplicate join suppressed");
            return;
        }

        info!(player = %player.name, id = player.id.0, "Player joined");
        self.states.insert(player.id, PlayerState::Connected);
        self.joined.emit(&PlayerJoinedEvent { player });
    }

    /// Host lifecycle call: a remote player's session dropped.
    ///
    /// Fires [`left`](Self::left) and removes the player from the connected
    /// set only if the host still tracks the session handle *and* the player
    /// is currently marked connected. The double-check suppresses duplicate
    /// and speculative disconnect notifications.
    pub fn on_remote_disconnect(
        &mut self,
        host: &dyn Host,
        slot: PlayerSlot,
        connection: ConnectionId,
    ) {
        let Some(player) = host.player_in_slot(slot) else {
            debug!(slot = slot.0, "Disconnect for unoccupied slot ignored");
            return;
        };

        if !host.is_connection_tracked(connection) {
            debug!(
                player = %player.name,
                connection = connection.0,
                "Stale disconnect suppressed: connection no longer tracked"
            );
            return;
        }

        if !self.is_connected(player.id) {
            debug!(player = %player.name, "Duplicate disconnect suppressed");
            return;
        }

        info!(player = %player.name, id = player.id.0, "Player left");
        self.states.insert(player.id, PlayerState::Disconnected);
        self.left.emit(&PlayerLeftEvent { player });
    }

    /// Host lifecycle call: the local session dropped.
    ///
    /// Always fires [`left`](Self::left) exactly once, for the local player,
    /// and clears the entire connected set: with the local session gone,
    /// every remote player became unreachable at the same instant.
    pub fn on_local_disconnect(&mut self, host: &dyn Host) {
        let player = host.local_player();

        info!(player = %player.name, "Local player disconnected, forgetting all players");
        self.left.emit(&PlayerLeftEvent { player });
        self.states.clear();
    }
}

impl Default for PlayerTracker {
    fn default() -> Self {
        Self::new()
    }
}
