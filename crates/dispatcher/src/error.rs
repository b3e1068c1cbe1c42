//! Dispatcher error types

use thiserror::Error;

/// Dispatcher-specific errors
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A target name in the resolved list is empty at dispatch time
    ///
    /// The message names the event, not the target, since the target itself
    /// is what is missing.
    #[error("no delivery target resolvable for event: {event}")]
    MissingTarget { event: String },

    /// Queue lookup or enqueue error (from contract)
    #[error("queue error: {0}")]
    Contract(#[from] contracts::ContractError),
}

impl DispatchError {
    /// Create a missing-target error for the given event description
    pub fn missing_target(event: impl Into<String>) -> Self {
        Self::MissingTarget {
            event: event.into(),
        }
    }
}
