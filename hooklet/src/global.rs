//! # Process-wide Hook Instance
//!
//! A lazily-initialized shared [`Hook`] with an explicit lifecycle, plus
//! free-function conveniences that delegate to it.
//!
//! Two construction paths exist and neither changes the meaning of the
//! other: [`Hook::new`] always makes a fresh, private instance, while
//! [`shared`] hands out the process-wide one. There is no mode flag.
//! [`reset_shared`] discards the shared instance so the next [`shared`] call
//! re-initializes it; tests use it to start from a clean slate.
//!
//! Availability of the conveniences is governed by importing this module.
//!
//! ```ignore
//! use hooklet::{DEFAULT_PRIORITY, global};
//!
//! global::add_filter("post.title", |t: String, _| t.to_uppercase(), DEFAULT_PRIORITY);
//! let title = global::apply_filters("post.title", String::from("hello world"))?;
//! ```

use crate::error::HookError;
use crate::hook::Hook;
use hooklet_core::{Event, ListenerId};
use parking_lot::Mutex;
use std::sync::Arc;

static SHARED: Mutex<Option<Arc<Hook>>> = Mutex::new(None);

/// The process-wide [`Hook`] instance, initialized on first use.
///
/// Every caller sees the same instance until [`reset_shared`] discards it.
pub fn shared() -> Arc<Hook> {
    let mut slot = SHARED.lock();
    slot.get_or_insert_with(|| Arc::new(Hook::new())).clone()
}

/// Discard the shared instance.
///
/// The next [`shared`] call creates a fresh one. Callers still holding the
/// old `Arc` keep a working (but now private) hook manager.
pub fn reset_shared() {
    *SHARED.lock() = None;
}

// ============================================================================
// Filters
// ============================================================================

/// Attach a filter to `tag` on the shared instance.
pub fn add_filter<T, F>(tag: &str, filter: F, priority: i32) -> ListenerId
where
    T: Send + 'static,
    F: Fn(T, &mut Event) -> T + Send + Sync + 'static,
{
    shared().add_filter(tag, filter, priority)
}

/// Run `value` through the shared instance's filters for `tag`.
pub fn apply_filters<T: Send + 'static>(tag: &str, value: T) -> Result<T, HookError> {
    shared().apply_filters(tag, value)
}

/// Like [`apply_filters`], with an extra argument bundle.
pub fn apply_filters_with<T, A>(tag: &str, value: T, args: A) -> Result<T, HookError>
where
    T: Send + 'static,
    A: Send + 'static,
{
    shared().apply_filters_with(tag, value, args)
}

/// Detach one filter registration from `tag` on the shared instance.
pub fn remove_filter(tag: &str, id: ListenerId) {
    shared().remove_filter(tag, id);
}

/// Detach every filter from `tag` on the shared instance.
pub fn remove_all_filters(tag: &str) {
    shared().remove_all_filters(tag);
}

/// True iff `tag` has filters on the shared instance.
pub fn has_filter(tag: &str) -> bool {
    shared().has_filter(tag)
}

// ============================================================================
// Actions
// ============================================================================

/// Attach an action to `tag` on the shared instance.
pub fn add_action<A, F>(tag: &str, action: F, priority: i32) -> ListenerId
where
    A: Send + 'static,
    F: Fn(&A) + Send + Sync + 'static,
{
    shared().add_action(tag, action, priority)
}

/// Invoke the shared instance's actions for `tag`.
pub fn do_action<A: Send + 'static>(tag: &str, args: A) -> Result<(), HookError> {
    shared().do_action(tag, args)
}

/// Detach one action registration from `tag` on the shared instance.
pub fn remove_action(tag: &str, id: ListenerId) {
    shared().remove_action(tag, id);
}

/// Detach every action from `tag` on the shared instance.
pub fn remove_all_actions(tag: &str) {
    shared().remove_all_actions(tag);
}

/// True iff `tag` has actions on the shared instance.
pub fn has_action(tag: &str) -> bool {
    shared().has_action(tag)
}
