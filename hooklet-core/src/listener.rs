//! # Listener Records
//!
//! A [`Listener`] is one registered callback together with its priority and
//! one-shot flag. Records are immutable once constructed and cheap to clone:
//! the callback sits behind an `Arc`, so registry snapshots are reference
//! bumps, not deep copies.

use crate::error::BoxError;
use crate::event::Event;
use std::fmt;
use std::sync::Arc;

/// Priority assigned when a registration does not specify one.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Closure type for listener callbacks.
///
/// A callback may mutate the event payload, stop propagation, and call back
/// into the registry it was registered with. An `Err` return aborts the
/// remainder of the dispatch pass.
pub type ListenerFn = dyn Fn(&mut Event) -> Result<(), BoxError> + Send + Sync;

/// Opaque identifier for a registered listener.
///
/// Assigned at registration time from a monotonically-increasing source, so
/// two live listeners never share an id. Used only to target a listener for
/// removal, never for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One registered callback plus its priority and one-shot flag.
#[derive(Clone)]
pub struct Listener {
    id: ListenerId,
    callback: Arc<ListenerFn>,
    priority: i32,
    once: bool,
}

impl Listener {
    pub(crate) fn new(id: ListenerId, callback: Arc<ListenerFn>, priority: i32, once: bool) -> Self {
        Self {
            id,
            callback,
            priority,
            once,
        }
    }

    /// The id assigned at registration time.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Higher priority executes earlier. Ties fire in insertion order.
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether the listener is removed after its one and only invocation.
    pub fn once(&self) -> bool {
        self.once
    }

    /// Run the callback against `event`.
    pub(crate) fn invoke(&self, event: &mut Event) -> Result<(), BoxError> {
        (self.callback)(event)
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("once", &self.once)
            .finish_non_exhaustive()
    }
}
