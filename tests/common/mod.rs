//! Integration test common infrastructure.
//!
//! Provides an in-memory [`Host`] implementation with a scriptable slot
//! table and connection set, so tests can drive the layer's entry points
//! exactly the way a game host would.

use std::collections::{HashMap, HashSet};

use modlink::{ConnectionId, Host, PlayerId, PlayerSlot, PlayerSnapshot};

/// Scriptable in-memory host.
pub struct TestHost {
    slots: HashMap<usize, PlayerSnapshot>,
    tracked: HashSet<u64>,
    local: PlayerSnapshot,
    /// Number of times the layer asked for the chat input to be reset.
    #[allow(dead_code)]
    pub chat_resets: usize,
}

impl TestHost {
    /// Host with a local player in slot 0 and nothing else.
    pub fn new() -> Self {
        let local = PlayerSnapshot {
            id: PlayerId(1),
            slot: PlayerSlot(0),
            name: "local".to_string(),
            is_local: true,
        };
        let mut slots = HashMap::new();
        slots.insert(0, local.clone());
        Self {
            slots,
            tracked: HashSet::new(),
            local,
            chat_resets: 0,
        }
    }

    /// Place a remote player in a slot and track their connection.
    pub fn seat(&mut self, slot: usize, id: u64, name: &str, connection: u64) -> PlayerSlot {
        self.slots.insert(
            slot,
            PlayerSnapshot {
                id: PlayerId(id),
                slot: PlayerSlot(slot),
                name: name.to_string(),
                is_local: false,
            },
        );
        self.tracked.insert(connection);
        PlayerSlot(slot)
    }

    /// Forget a connection, as the host does after full session teardown.
    #[allow(dead_code)]
    pub fn untrack(&mut self, connection: u64) {
        self.tracked.remove(&connection);
    }
}

impl Default for TestHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestHost {
    fn is_connection_tracked(&self, connection: ConnectionId) -> bool {
        self.tracked.contains(&connection.0)
    }

    fn player_in_slot(&self, slot: PlayerSlot) -> Option<PlayerSnapshot> {
        self.slots.get(&slot.0).cloned()
    }

    fn local_player(&self) -> PlayerSnapshot {
        self.local.clone()
    }

    fn reset_chat_input(&mut self) {
        self.chat_resets += 1;
    }
}
