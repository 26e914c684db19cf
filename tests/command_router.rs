//! Integration tests for the chat-command router: registration, alias
//! resolution, dispatch, and failure isolation, driven through the host
//! entry points.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::TestHost;
use modlink::commands::CommandContext;
use modlink::{CommandError, Config, Modlink};

fn layer() -> Modlink {
    Modlink::new(Config::default())
}

/// Register a command that records every argument list it receives.
fn recording(
    layer: &mut Modlink,
    name: &str,
    aliases: &[&str],
) -> Rc<RefCell<Vec<Vec<String>>>> {
    let calls: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let registered = layer.commands.register_aliased(
        name,
        aliases,
        move |_ctx: &mut CommandContext<'_>, args: &[&str]| {
            sink.borrow_mut()
                .push(args.iter().map(|a| a.to_string()).collect());
            Ok(())
        },
    );
    assert!(registered);
    calls
}

#[test]
fn test_alias_dispatch_scenario() {
    // Prefix "/", register "give" with alias "g"; "/g 10 apples" must reach
    // give's handler with ["10", "apples"].
    let mut layer = layer();
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "give", &["g"]);

    assert!(layer.on_chat_submitted(&mut host, "/g 10 apples"));
    assert_eq!(*calls.borrow(), vec![vec!["10".to_string(), "apples".to_string()]]);
    assert_eq!(host.chat_resets, 1);
}

#[test]
fn test_space_after_prefix_is_not_a_command() {
    let mut layer = layer();
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "give", &[]);

    assert!(!layer.on_chat_submitted(&mut host, "/ give 10"));
    assert!(calls.borrow().is_empty());
    assert_eq!(host.chat_resets, 0);
}

#[test]
fn test_non_prefixed_text_is_never_handled() {
    let mut layer = layer();
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "give", &[]);

    assert!(!layer.on_chat_submitted(&mut host, "give 10 apples"));
    assert!(!layer.on_chat_submitted(&mut host, "hello there"));
    assert!(calls.borrow().is_empty());
    assert_eq!(host.chat_resets, 0);
}

#[test]
fn test_blank_text_is_never_handled() {
    let mut layer = layer();
    let mut host = TestHost::new();

    assert!(!layer.on_chat_submitted(&mut host, ""));
    assert!(!layer.on_chat_submitted(&mut host, "   "));
}

#[test]
fn test_bare_command_gets_empty_args() {
    let mut layer = layer();
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "heal", &[]);

    assert!(layer.on_chat_submitted(&mut host, "/heal"));
    assert_eq!(*calls.borrow(), vec![Vec::<String>::new()]);
}

#[test]
fn test_unknown_command_is_not_handled() {
    let mut layer = layer();
    let mut host = TestHost::new();

    assert!(!layer.on_chat_submitted(&mut host, "/nosuch"));
    assert_eq!(host.chat_resets, 0);
}

#[test]
fn test_failing_handler_still_counts_as_handled() {
    let mut layer = layer();
    let mut host = TestHost::new();

    assert!(layer
        .commands
        .register("explode", |_ctx: &mut CommandContext<'_>, _args: &[&str]| {
            Err(CommandError::BadArgument("kaboom".into()))
        }));
    let calls = recording(&mut layer, "ok", &[]);

    // The failure is swallowed; the line was still consumed as a command.
    assert!(layer.on_chat_submitted(&mut host, "/explode now"));
    assert_eq!(host.chat_resets, 1);

    // The router survives and keeps dispatching.
    assert!(layer.on_chat_submitted(&mut host, "/ok"));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_unregister_then_dispatch() {
    let mut layer = layer();
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "give", &["g"]);

    assert!(layer.commands.unregister("give"));
    assert!(!layer.on_chat_submitted(&mut host, "/give 1"));
    assert!(!layer.on_chat_submitted(&mut host, "/g 1"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_custom_prefix() {
    let config = Config {
        chat: modlink::config::ChatConfig {
            prefix: "!".to_string(),
        },
    };
    let mut layer = Modlink::new(config);
    let mut host = TestHost::new();
    let calls = recording(&mut layer, "give", &[]);

    assert!(layer.on_chat_submitted(&mut host, "!give 2"));
    assert!(!layer.on_chat_submitted(&mut host, "/give 2"));
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_handler_sees_player_state_through_context() {
    let mut layer = layer();
    let mut host = TestHost::new();
    let alice = host.seat(1, 7001, "alice", 31);
    layer.on_player_joined(&host, alice);

    let seen: Rc<RefCell<usize>> = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    assert!(layer.commands.register(
        "players",
        move |ctx: &mut CommandContext<'_>, _args: &[&str]| {
            *sink.borrow_mut() = ctx.players.connected_players().len();
            Ok(())
        }
    ));

    assert!(layer.on_chat_submitted(&mut host, "/players"));
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn test_multiword_argument_by_rejoining() {
    let mut layer = layer();
    let mut host = TestHost::new();

    let joined: Rc<RefCell<String>> = Rc::new(RefCell::new(String::new()));
    let sink = Rc::clone(&joined);
    assert!(layer.commands.register(
        "rename",
        move |_ctx: &mut CommandContext<'_>, args: &[&str]| {
            *sink.borrow_mut() = args.join(" ");
            Ok(())
        }
    ));

    assert!(layer.on_chat_submitted(&mut host, "/rename Rusty Old Lamp"));
    assert_eq!(*joined.borrow(), "Rusty Old Lamp");
}
