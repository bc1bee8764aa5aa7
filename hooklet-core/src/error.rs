//! Error types for Hooklet.
//!
//! The core deliberately defines a narrow taxonomy:
//!
//! - [`DispatchError`] - a listener callback failed during a dispatch pass
//!
//! Removal of an unknown channel or listener id is a no-op, not an error.
//! Invalid-callback and duplicate-id registration failures cannot be
//! constructed through this crate's API, so they have no error variants.

use crate::listener::ListenerId;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during a dispatch pass.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A listener callback returned an error.
    ///
    /// The pass is aborted: listeners after the failing one do not run, and
    /// the failing listener's one-shot cleanup does not occur.
    #[error("listener {id} on channel `{channel}` failed")]
    Listener {
        /// The channel the dispatch pass targeted.
        channel: String,
        /// The id of the failing listener.
        id: ListenerId,
        /// The error the callback returned.
        #[source]
        source: BoxError,
    },
}
