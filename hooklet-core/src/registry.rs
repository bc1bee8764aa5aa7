//! # Listener Registry
//!
//! The [`Registry`] owns, per named channel, an ordered list of listener
//! records and keeps each list sorted by descending priority (stable, so
//! equal priorities fire in insertion order).
//!
//! All methods take `&self`; the channel map sits behind a single mutex, so
//! a shared registry is safe to mutate from multiple threads. The lock is
//! never held while a callback runs (see [`Dispatcher`]), which lets
//! callbacks re-enter the registry mid-pass.
//!
//! [`Dispatcher`]: crate::Dispatcher

use crate::error::BoxError;
use crate::event::Event;
use crate::listener::{Listener, ListenerFn, ListenerId};
use parking_lot::Mutex;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Owns all listener records, keyed by channel name.
///
/// The registry exclusively owns its records for its lifetime; the dispatcher
/// borrows priority-sorted snapshots for the duration of one pass.
pub struct Registry {
    channels: Mutex<HashMap<String, Vec<Listener>>>,
    next_id: AtomicU64,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register `callback` on `channel` and return the id of the new record.
    ///
    /// The channel's list is re-sorted by descending priority with a stable
    /// sort, so listeners sharing a priority keep their insertion order.
    /// Registration always succeeds; the returned id is unique for the
    /// registry's lifetime.
    pub fn add<F>(&self, channel: &str, callback: F, priority: i32, once: bool) -> ListenerId
    where
        F: Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let id = ListenerId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let listener = Listener::new(id, Arc::new(callback) as Arc<ListenerFn>, priority, once);

        let mut channels = self.channels.lock();
        let list = channels.entry(channel.to_owned()).or_default();
        list.push(listener);
        list.sort_by_key(|l| Reverse(l.priority()));
        id
    }

    /// Remove the record with `id` from `channel`.
    ///
    /// No-op if the channel or id does not exist. Removal never reorders the
    /// remaining records.
    pub fn remove(&self, channel: &str, id: ListenerId) {
        let mut channels = self.channels.lock();
        if let Some(list) = channels.get_mut(channel) {
            list.retain(|l| l.id() != id);
            if list.is_empty() {
                channels.remove(channel);
            }
        }
    }

    /// Remove every record on `channel`. No-op if the channel is absent.
    pub fn remove_all(&self, channel: &str) {
        self.channels.lock().remove(channel);
    }

    /// The current priority-sorted records for `channel`.
    ///
    /// Returns a snapshot: later registry mutations do not affect the
    /// returned list. Empty if the channel has never been used.
    pub fn get(&self, channel: &str) -> Vec<Listener> {
        self.channels
            .lock()
            .get(channel)
            .cloned()
            .unwrap_or_default()
    }

    /// True iff `channel` has at least one registered listener.
    pub fn has(&self, channel: &str) -> bool {
        self.channels
            .lock()
            .get(channel)
            .is_some_and(|list| !list.is_empty())
    }

    /// Number of listeners currently registered on `channel`.
    pub fn len(&self, channel: &str) -> usize {
        self.channels
            .lock()
            .get(channel)
            .map_or(0, |list| list.len())
    }

    /// Names of all channels that currently have listeners.
    pub fn channels(&self) -> Vec<String> {
        self.channels.lock().keys().cloned().collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
