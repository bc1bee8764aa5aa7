//! Error types for the typed filter/action facade.

use hooklet_core::DispatchError;
use thiserror::Error;

/// Errors surfaced by the filter/action facade.
///
/// The mismatch variants implement the strict typing policy: a filter or
/// action whose registered type does not match the dispatched payload fails
/// the pass instead of being silently skipped or default-filled.
#[derive(Error, Debug)]
pub enum HookError {
    /// The in-flight filter value was missing or not of the expected type.
    #[error("filter channel `{channel}` expected a value of type {expected}")]
    ValueType {
        /// The channel the value traveled on.
        channel: String,
        /// Type name the callback was registered with.
        expected: &'static str,
    },

    /// The action arguments were missing or not of the expected type.
    #[error("action channel `{channel}` expected arguments of type {expected}")]
    ArgsType {
        /// The channel the arguments traveled on.
        channel: String,
        /// Type name the callback was registered with.
        expected: &'static str,
    },

    /// A listener failed during the dispatch pass.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
