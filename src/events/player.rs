//! Player identity and event payloads.

/// Stable player identifier, persistent across sessions (platform account
/// id). This is what the connected-set is keyed on, never the transient
/// session handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

/// Index into the host's player slot table for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerSlot(pub usize);

/// Transient per-connection session handle assigned by the host's netcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub u64);

/// Point-in-time view of a player, as handed to event subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    /// Stable identity.
    pub id: PlayerId,
    /// Slot the player occupies (or occupied) this session.
    pub slot: PlayerSlot,
    /// Display name.
    pub name: String,
    /// Whether this is the local player.
    pub is_local: bool,
}

/// Fired once when a player becomes connected.
#[derive(Debug, Clone)]
pub struct PlayerJoinedEvent {
    /// The player that joined.
    pub player: PlayerSnapshot,
}

/// Fired at most once per real disconnect.
///
/// On local-session disconnect this fires for the local player and every
/// remote player is silently forgotten (their individual "left" moments are
/// unobservable once the local session is gone).
#[derive(Debug, Clone)]
pub struct PlayerLeftEvent {
    /// The player that left.
    pub player: PlayerSnapshot,
}
