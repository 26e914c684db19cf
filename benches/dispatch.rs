//! Dispatch throughput bench: resolve + invoke across a populated registry.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modlink::commands::{CommandContext, CommandRegistry};
use modlink::{ConnectionId, Host, PlayerSlot, PlayerSnapshot, PlayerTracker};

/// Minimal no-op host for benching.
struct BenchHost;

impl Host for BenchHost {
    fn is_connection_tracked(&self, _connection: ConnectionId) -> bool {
        false
    }

    fn player_in_slot(&self, _slot: PlayerSlot) -> Option<PlayerSnapshot> {
        None
    }

    fn local_player(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            id: modlink::PlayerId(1),
            slot: PlayerSlot(0),
            name: "local".to_string(),
            is_local: true,
        }
    }

    fn reset_chat_input(&mut self) {}
}

fn populated_registry(commands: usize) -> CommandRegistry {
    let mut reg = CommandRegistry::new("/");
    for i in 0..commands {
        let name = format!("cmd{i}");
        let alias = format!("c{i}");
        assert!(reg.register_aliased(
            &name,
            &[alias.as_str()],
            |_ctx: &mut CommandContext<'_>, args: &[&str]| {
                black_box(args.len());
                Ok(())
            },
        ));
    }
    reg
}

fn bench_dispatch(c: &mut Criterion) {
    let reg = populated_registry(50);
    let mut host = BenchHost;
    let mut players = PlayerTracker::new();

    c.bench_function("dispatch_by_name", |b| {
        b.iter(|| {
            let mut ctx = CommandContext {
                host: &mut host,
                players: &mut players,
            };
            reg.dispatch(black_box("/cmd25 10 apples"), &mut ctx)
        })
    });

    c.bench_function("dispatch_by_alias", |b| {
        b.iter(|| {
            let mut ctx = CommandContext {
                host: &mut host,
                players: &mut players,
            };
            reg.dispatch(black_box("/c25 10 apples"), &mut ctx)
        })
    });

    c.bench_function("dispatch_non_command", |b| {
        b.iter(|| {
            let mut ctx = CommandContext {
                host: &mut host,
                players: &mut players,
            };
            reg.dispatch(black_box("just chatting over here"), &mut ctx)
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
