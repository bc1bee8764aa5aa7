//! # hooklet-core
//!
//! Core listener registry and dispatch for the Hooklet hook system.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! integrations that don't need the typed filter/action facade in `hooklet`.
//!
//! # Architecture
//!
//! Three pieces cooperate in one dispatch pass:
//!
//! - [`Registry`] - owns, per named channel, a listener list kept sorted by
//!   descending priority (stable, so equal priorities fire in insertion
//!   order). All mutation goes through it.
//! - [`Event`] - the mutable context for a single pass: channel name, payload
//!   map, and the propagation-stopped flag.
//! - [`Dispatcher`] - pulls the sorted snapshot for the event's channel and
//!   invokes callbacks in order, honoring stop-propagation and removing
//!   one-shot listeners after they fire.
//!
//! Dispatch is synchronous: callbacks run to completion one at a time on the
//! caller's thread.
//!
//! # Error Types
//!
//! - [`DispatchError`] - a listener callback failed, aborting the pass

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod error;
mod event;
mod listener;
mod registry;

// Re-exports
pub use dispatcher::Dispatcher;
pub use error::{BoxError, DispatchError};
pub use event::Event;
pub use listener::{DEFAULT_PRIORITY, Listener, ListenerFn, ListenerId};
pub use registry::Registry;
