//! # Dispatcher
//!
//! Orchestrates one dispatch pass over a channel's listeners: iterates in
//! priority order, invokes each callback with the [`Event`], honors
//! stop-propagation, and removes one-shot listeners after they fire.
//!
//! # Mutation during a pass
//!
//! The pass iterates a snapshot of the listener list taken at its start, with
//! the registry lock released. A callback may therefore mutate the registry
//! freely: listeners added mid-pass do not fire until the next pass, and a
//! listener removed mid-pass by another callback still fires in the current
//! one (it was in the snapshot).
//!
//! # Failure semantics
//!
//! Callback errors are not caught or suppressed. The first `Err` aborts the
//! pass and propagates to the caller as [`DispatchError::Listener`];
//! listeners after the failing one do not run, and the failing listener's
//! one-shot cleanup does not occur. Error recovery belongs to the calling
//! application.

use crate::error::{BoxError, DispatchError};
use crate::event::Event;
use crate::listener::{Listener, ListenerId};
use crate::registry::Registry;

/// Executes dispatch passes against a [`Registry`] it owns.
pub struct Dispatcher {
    registry: Registry,
}

impl Dispatcher {
    /// Create a dispatcher with an empty registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// The underlying registry, for direct listener management.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Register `callback` on `channel` with the given priority.
    pub fn add_listener<F>(&self, channel: &str, callback: F, priority: i32) -> ListenerId
    where
        F: Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.registry.add(channel, callback, priority, false)
    }

    /// Register a one-shot listener: removed after its single invocation.
    pub fn once<F>(&self, channel: &str, callback: F, priority: i32) -> ListenerId
    where
        F: Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        self.registry.add(channel, callback, priority, true)
    }

    /// Remove one listener from `channel`. No-op if absent.
    pub fn remove_listener(&self, channel: &str, id: ListenerId) {
        self.registry.remove(channel, id);
    }

    /// Remove every listener from `channel`. No-op if absent.
    pub fn remove_all(&self, channel: &str) {
        self.registry.remove_all(channel);
    }

    /// The priority-sorted listeners currently registered on `channel`.
    pub fn listeners(&self, channel: &str) -> Vec<Listener> {
        self.registry.get(channel)
    }

    /// True iff `channel` has at least one listener.
    pub fn has_listeners(&self, channel: &str) -> bool {
        self.registry.has(channel)
    }

    /// Run one dispatch pass for `event` over its channel's listeners.
    ///
    /// Listeners run sequentially on the caller's thread, highest priority
    /// first. Dispatching on a channel with no listeners is a no-op. Returns
    /// no value; the caller inspects the event payload afterwards.
    pub fn dispatch(&self, event: &mut Event) -> Result<(), DispatchError> {
        let snapshot = self.registry.get(event.name());
        for listener in snapshot {
            if event.is_propagation_stopped() {
                break;
            }
            listener
                .invoke(event)
                .map_err(|source| DispatchError::Listener {
                    channel: event.name().to_owned(),
                    id: listener.id(),
                    source,
                })?;
            if listener.once() {
                self.registry.remove(event.name(), listener.id());
            }
        }
        Ok(())
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
