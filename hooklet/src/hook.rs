//! # Typed Filter/Action Facade
//!
//! [`Hook`] translates the two hook semantics into core dispatch passes:
//!
//! - **Filters** transform a value. Every filter on a tag receives the
//!   current value and returns the next one; the chain reduces left to right
//!   in priority order. Filters travel on channel `filter.<tag>` with the
//!   in-flight value under the [`VALUE_KEY`] payload key.
//! - **Actions** are invoked purely for side effects. They travel on channel
//!   `action.<tag>` with their arguments under the [`ARGS_KEY`] payload key.
//!
//! Callbacks are typed per category: a filter is `Fn(T, &mut Event) -> T`
//! (the event parameter carries cross-cutting metadata only), an action is
//! `Fn(&A)`. The payload map is the transport, not the primary argument
//! channel.
//!
//! # Type mismatches
//!
//! The policy is strict: if a dispatched value (or argument bundle) is not
//! the type a callback was registered with, the pass fails with
//! [`HookError::ValueType`] / [`HookError::ArgsType`] rather than skipping or
//! default-filling the callback.

use crate::error::HookError;
use hooklet_core::{BoxError, Dispatcher, Event, ListenerId};
use std::any::type_name;

/// Payload key carrying the in-flight filter value.
pub const VALUE_KEY: &str = "value";

/// Payload key carrying the action/filter argument bundle.
pub const ARGS_KEY: &str = "args";

/// The core channel name backing filter tag `tag`.
pub fn filter_channel(tag: &str) -> String {
    format!("filter.{tag}")
}

/// The core channel name backing action tag `tag`.
pub fn action_channel(tag: &str) -> String {
    format!("action.{tag}")
}

/// A filter/action hook manager over a private [`Dispatcher`].
///
/// Construct per-instance state with [`Hook::new`], or use the process-wide
/// instance from [`crate::global`]. Filters and actions on the same tag are
/// independent: they live on distinct core channels.
pub struct Hook {
    dispatcher: Dispatcher,
}

impl Hook {
    /// Create a hook manager with an empty registry.
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(),
        }
    }

    /// The underlying dispatcher, for raw listener registration.
    ///
    /// Raw listeners see the full [`Event`] and may stop propagation or
    /// return errors; they share channels with the typed API (see
    /// [`filter_channel`] / [`action_channel`]).
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Attach `filter` to the filter tag `tag`.
    ///
    /// Higher `priority` runs earlier; ties run in registration order. The
    /// returned id targets this exact registration for [`Hook::remove_filter`].
    pub fn add_filter<T, F>(&self, tag: &str, filter: F, priority: i32) -> ListenerId
    where
        T: Send + 'static,
        F: Fn(T, &mut Event) -> T + Send + Sync + 'static,
    {
        let channel = filter_channel(tag);
        self.dispatcher.add_listener(
            &channel,
            move |event: &mut Event| -> Result<(), BoxError> {
                let value: T = event.take(VALUE_KEY).ok_or_else(|| HookError::ValueType {
                    channel: event.name().to_owned(),
                    expected: type_name::<T>(),
                })?;
                let next = filter(value, event);
                event.set(VALUE_KEY, next);
                Ok(())
            },
            priority,
        )
    }

    /// Run `value` through every filter attached to `tag`, in priority order.
    ///
    /// With no filters attached, returns the value unchanged.
    pub fn apply_filters<T: Send + 'static>(&self, tag: &str, value: T) -> Result<T, HookError> {
        let channel = filter_channel(tag);
        let mut event = Event::new(channel.clone()).with(VALUE_KEY, value);
        self.run_filter_pass(&channel, &mut event)
    }

    /// Like [`Hook::apply_filters`], with an extra argument bundle.
    ///
    /// The bundle rides under [`ARGS_KEY`]; filters read it through their
    /// event parameter with `event.get::<A>(ARGS_KEY)`.
    pub fn apply_filters_with<T, A>(&self, tag: &str, value: T, args: A) -> Result<T, HookError>
    where
        T: Send + 'static,
        A: Send + 'static,
    {
        let channel = filter_channel(tag);
        let mut event = Event::new(channel.clone())
            .with(VALUE_KEY, value)
            .with(ARGS_KEY, args);
        self.run_filter_pass(&channel, &mut event)
    }

    fn run_filter_pass<T: Send + 'static>(
        &self,
        channel: &str,
        event: &mut Event,
    ) -> Result<T, HookError> {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                channel,
                listeners = self.dispatcher.listeners(channel).len(),
                "applying filters"
            );
        }
        self.dispatcher.dispatch(event)?;
        event.take::<T>(VALUE_KEY).ok_or_else(|| HookError::ValueType {
            channel: channel.to_owned(),
            expected: type_name::<T>(),
        })
    }

    /// Detach one filter registration from `tag`. No-op if absent.
    pub fn remove_filter(&self, tag: &str, id: ListenerId) {
        self.dispatcher.remove_listener(&filter_channel(tag), id);
    }

    /// Detach every filter from `tag`. No-op if absent.
    pub fn remove_all_filters(&self, tag: &str) {
        self.dispatcher.remove_all(&filter_channel(tag));
    }

    /// True iff `tag` has at least one filter attached.
    pub fn has_filter(&self, tag: &str) -> bool {
        self.dispatcher.has_listeners(&filter_channel(tag))
    }

    // ========================================================================
    // Actions
    // ========================================================================

    /// Attach `action` to the action tag `tag`.
    ///
    /// The callback is invoked purely for effect; its arguments are the
    /// bundle the [`Hook::do_action`] caller supplied.
    pub fn add_action<A, F>(&self, tag: &str, action: F, priority: i32) -> ListenerId
    where
        A: Send + 'static,
        F: Fn(&A) + Send + Sync + 'static,
    {
        let channel = action_channel(tag);
        self.dispatcher.add_listener(
            &channel,
            move |event: &mut Event| -> Result<(), BoxError> {
                let args = event.get::<A>(ARGS_KEY).ok_or_else(|| HookError::ArgsType {
                    channel: event.name().to_owned(),
                    expected: type_name::<A>(),
                })?;
                action(args);
                Ok(())
            },
            priority,
        )
    }

    /// Invoke every action attached to `tag`, in priority order.
    ///
    /// `args` is the bundle every callback receives by reference. An action
    /// without arguments takes `A = ()`. Dispatching a tag with no actions
    /// attached is a no-op.
    pub fn do_action<A: Send + 'static>(&self, tag: &str, args: A) -> Result<(), HookError> {
        let channel = action_channel(tag);
        let mut event = Event::new(channel.clone()).with(ARGS_KEY, args);
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                channel = %channel,
                listeners = self.dispatcher.listeners(&channel).len(),
                "dispatching action"
            );
        }
        self.dispatcher.dispatch(&mut event)?;
        Ok(())
    }

    /// Detach one action registration from `tag`. No-op if absent.
    pub fn remove_action(&self, tag: &str, id: ListenerId) {
        self.dispatcher.remove_listener(&action_channel(tag), id);
    }

    /// Detach every action from `tag`. No-op if absent.
    pub fn remove_all_actions(&self, tag: &str) {
        self.dispatcher.remove_all(&action_channel(tag));
    }

    /// True iff `tag` has at least one action attached.
    pub fn has_action(&self, tag: &str) -> bool {
        self.dispatcher.has_listeners(&action_channel(tag))
    }
}

impl Default for Hook {
    fn default() -> Self {
        Self::new()
    }
}
