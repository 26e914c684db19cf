//! Host simulator for the modlink layer.
//!
//! Stands in for the game process: implements the [`Host`] contract over an
//! in-memory slot table and drives the layer through a scripted session of
//! joins, chat lines, and disconnects. Useful for eyeballing the log output
//! and as a worked example of the cooperative wiring.

use std::collections::{HashMap, HashSet};

use modlink::commands::CommandContext;
use modlink::{
    Config, ConnectionId, Host, Modlink, PlayerId, PlayerSlot, PlayerSnapshot,
};
use tracing::info;

/// In-memory host: a slot table, the set of tracked connections, and a
/// counter of chat-input resets.
struct SimHost {
    slots: HashMap<usize, PlayerSnapshot>,
    tracked: HashSet<u64>,
    local: PlayerSnapshot,
    chat_resets: usize,
}

impl SimHost {
    fn new() -> Self {
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

    fn seat(&mut self, slot: usize, id: u64, name: &str, connection: u64) -> PlayerSlot {
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
}

impl Host for SimHost {
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
        info!("Chat input cleared");
    }
}

fn main() -> anyhow::Result<()> {
    modlink::telemetry::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::default(),
    };
    info!(prefix = %config.chat.prefix, "Starting hostsim");

    let mut layer = Modlink::new(config);

    layer.players.joined.subscribe("hostsim", |event| {
        info!(player = %event.player.name, "Subscriber saw join");
        Ok(())
    });
    layer.players.left.subscribe("hostsim", |event| {
        info!(player = %event.player.name, "Subscriber saw leave");
        Ok(())
    });

    layer.commands.register_aliased("say", &["s"], |_ctx: &mut CommandContext<'_>, args: &[&str]| {
        info!(text = %args.join(" "), "say command");
        Ok(())
    });
    layer.commands.register("players", |ctx: &mut CommandContext<'_>, _args: &[&str]| {
        let ids = ctx.players.connected_players();
        info!(count = ids.len(), ?ids, "Connected players");
        Ok(())
    });
    layer.commands.register("fail", |_ctx: &mut CommandContext<'_>, _args: &[&str]| {
        Err(anyhow::anyhow!("this command always fails").into())
    });

    let mut host = SimHost::new();
    let alice = host.seat(1, 7001, "alice", 31);
    let bob = host.seat(2, 7002, "bob", 32);

    layer.on_player_joined(&host, alice);
    layer.on_player_joined(&host, bob);
    layer.on_player_joined(&host, bob); // duplicate, suppressed

    for line in [
        "/s hello from the sim",
        "/players",
        "/fail",
        "/unknown",
        "plain chat stays chat",
    ] {
        let handled = layer.on_chat_submitted(&mut host, line);
        info!(line, handled, "Chat submitted");
    }

    layer.on_remote_disconnect(&host, alice, ConnectionId(31));
    layer.on_remote_disconnect(&host, alice, ConnectionId(31)); // duplicate, suppressed
    layer.on_local_disconnect(&host);

    info!(chat_resets = host.chat_resets, "Session over");
    Ok(())
}
