//! Testing utilities for Hooklet.
//!
//! This module provides spies that plug into the core registry as plain
//! callbacks:
//!
//! - [`InvocationLog`]: records labeled invocations so tests can assert order
//!   across listeners
//! - [`CountingListener`]: counts invocations of a single listener

use hooklet_core::{BoxError, Event};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// A shared log of listener invocations, in execution order.
///
/// # Example
///
/// ```ignore
/// let log = InvocationLog::new();
/// dispatcher.add_listener("ch", log.callback("first"), 20);
/// dispatcher.add_listener("ch", log.callback("second"), 10);
///
/// dispatcher.dispatch(&mut Event::new("ch"))?;
/// assert_eq!(log.entries(), vec!["first", "second"]);
/// ```
pub struct InvocationLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl InvocationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A callback that appends `label` to the log each time it fires.
    pub fn callback(
        &self,
        label: &str,
    ) -> impl Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + use<> {
        let entries = self.entries.clone();
        let label = label.to_owned();
        move |_event| {
            entries.lock().unwrap().push(label.clone());
            Ok(())
        }
    }

    /// Get a clone of the recorded labels.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Clear the log.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl Default for InvocationLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InvocationLog {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

/// A listener spy that counts how many times it fired.
///
/// # Example
///
/// ```ignore
/// let counter = CountingListener::new();
/// dispatcher.once("ch", counter.callback(), 10);
///
/// dispatcher.dispatch(&mut Event::new("ch"))?;
/// dispatcher.dispatch(&mut Event::new("ch"))?;
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A callback that bumps the counter each time it fires.
    pub fn callback(&self) -> impl Fn(&mut Event) -> Result<(), BoxError> + Send + Sync + use<> {
        let count = self.count.clone();
        move |_event| {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    /// The current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingListener {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}
