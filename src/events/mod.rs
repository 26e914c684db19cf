//! Gameplay event dispatch.
//!
//! Events are broadcast synchronously to an ordered subscriber list on the
//! host's simulation thread. Invocation order is registration order, and
//! ordering is part of the observable contract mods rely on.

pub mod connectivity;
pub mod player;

pub use connectivity::PlayerTracker;
pub use player::{PlayerJoinedEvent, PlayerLeftEvent};

use tracing::error;

/// A subscriber attached to a hook.
struct Subscriber<E> {
    /// Name used when logging a failed callback.
    name: String,
    callback: Box<dyn FnMut(&E) -> anyhow::Result<()>>,
}

/// An ordered list of subscribers for one event kind.
///
/// Subscribers are invoked synchronously and in registration order. There
/// is no deduplication: subscribing the same callback twice invokes it
/// twice. A failing subscriber is logged and skipped; it never prevents the
/// remaining subscribers from seeing the event.
pub struct Hook<E> {
    subscribers: Vec<Subscriber<E>>,
}

impl<E> Hook<E> {
    /// Create an empty hook.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Attach a callback.
    ///
    /// `name` identifies the subscriber in logs when its callback fails;
    /// use the owning mod's name or something equally recognizable.
    pub fn subscribe<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: FnMut(&E) -> anyhow::Result<()> + 'static,
    {
        self.subscribers.push(Subscriber {
            name: name.into(),
            callback: Box::new(callback),
        });
    }

    /// Drop every subscriber.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Number of attached subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no subscribers are attached.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Invoke every subscriber with `event`, in registration order.
    pub fn emit(&mut self, event: &E) {
        for sub in &mut self.subscribers {
            if let Err(e) = (sub.callback)(event) {
                error!(subscriber = %sub.name, error = %e, "Event subscriber failed");
            }
        }
    }
}

impl<E> Default for Hook<E> {
    fn default() -> Self {
        Self::new()
    }
}
