//! # Dispatch Context (Event)
//!
//! An [`Event`] is the mutable carrier for one dispatch pass: the channel
//! name, a payload map, and the propagation-stopped flag.
//!
//! # Lifecycle
//!
//! An `Event` is created fresh for every dispatch call, scoped entirely to
//! that call, and discarded afterwards. The caller inspects the payload after
//! `dispatch` returns to retrieve results; this is how the filter facade
//! extracts the transformed value.
//!
//! # Payload
//!
//! The payload maps string keys to type-erased values (`Box<dyn Any + Send>`).
//! Typed access goes through [`Event::get`], [`Event::set`], and
//! [`Event::take`]; a lookup with the wrong type behaves like a missing key.

use std::any::Any;
use std::collections::HashMap;

/// The mutable context passed through a single dispatch pass.
pub struct Event {
    name: String,
    payload: HashMap<String, Box<dyn Any + Send>>,
    propagation_stopped: bool,
}

impl Event {
    /// Create an event targeting the given channel, with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: HashMap::new(),
            propagation_stopped: false,
        }
    }

    /// The channel this dispatch pass targets. Immutable once constructed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the payload value under `key`, if present with type `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.payload.get(key).and_then(|v| v.downcast_ref::<T>())
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn set<T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.payload.insert(key.into(), Box::new(value));
    }

    /// Builder-style [`Event::set`], for constructing an event with its
    /// initial payload in one expression.
    pub fn with<T: Any + Send>(mut self, key: impl Into<String>, value: T) -> Self {
        self.set(key, value);
        self
    }

    /// Remove and return the payload value under `key`, if present with
    /// type `T`.
    ///
    /// A value of a different type is left in place and `None` is returned.
    pub fn take<T: 'static>(&mut self, key: &str) -> Option<T> {
        if !self.payload.get(key).is_some_and(|v| v.is::<T>()) {
            return None;
        }
        self.payload
            .remove(key)
            .and_then(|v| v.downcast::<T>().ok())
            .map(|v| *v)
    }

    /// Whether the payload holds a value under `key` (of any type).
    pub fn contains(&self, key: &str) -> bool {
        self.payload.contains_key(key)
    }

    /// Signal that no further listeners in the current pass should run.
    ///
    /// Scoped to the current dispatch pass only; a later pass on the same
    /// channel starts with a fresh event.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether propagation has been stopped for this pass.
    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("payload_keys", &self.payload.keys().collect::<Vec<_>>())
            .field("propagation_stopped", &self.propagation_stopped)
            .finish()
    }
}
