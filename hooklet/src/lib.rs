//! # hooklet - Priority-Ordered Filter and Action Hooks
//!
//! `hooklet` dispatches two hook semantics over a shared listener registry:
//! **filters** (value-transforming pipelines) and **actions** (side-effecting
//! notifications). Listeners attach to named channels with a priority;
//! higher priority fires earlier, ties fire in registration order.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hooklet::{DEFAULT_PRIORITY, Hook};
//!
//! let hook = Hook::new();
//!
//! hook.add_filter("post.title", |t: String, _| t.to_uppercase(), DEFAULT_PRIORITY);
//! hook.add_filter("post.title", |t: String, _| t + " | My Blog", 15);
//!
//! // The suffix filter runs first (priority 15 beats 10).
//! let title = hook.apply_filters("post.title", String::from("hello world"))?;
//! assert_eq!(title, "HELLO WORLD | MY BLOG");
//!
//! hook.add_action("user.registered", |name: &String| println!("welcome {name}"), DEFAULT_PRIORITY);
//! hook.do_action("user.registered", String::from("riyad"))?;
//! ```
//!
//! For a process-wide instance and free-function conveniences, see
//! [`global`]. For raw listeners with full event access (stop-propagation,
//! fallible callbacks, one-shot registration), drop down to the core types
//! re-exported here.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;

pub mod global;
pub mod testing;

// Core re-exports
pub use hooklet_core::{
    BoxError, DEFAULT_PRIORITY, DispatchError, Dispatcher, Event, Listener, ListenerFn,
    ListenerId, Registry,
};

pub use error::HookError;
pub use hook::{ARGS_KEY, Hook, VALUE_KEY, action_channel, filter_channel};
