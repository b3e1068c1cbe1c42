//! Layered error definitions
//!
//! Categorized by source: config / queue

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Required provider setting is absent
    #[error("missing provider setting '{key}'")]
    MissingSetting { key: String },

    // ===== Queue Errors =====
    /// No queue is registered under the target name
    #[error("no queue registered for target '{target}'")]
    QueueNotFound { target: String },

    /// Queue exists but refused or failed the enqueue
    #[error("queue '{target}' unavailable: {message}")]
    QueueUnavailable { target: String, message: String },
}

impl ContractError {
    /// Create missing-setting error
    pub fn missing_setting(key: impl Into<String>) -> Self {
        Self::MissingSetting { key: key.into() }
    }

    /// Create queue-not-found error
    pub fn queue_not_found(target: impl Into<String>) -> Self {
        Self::QueueNotFound {
            target: target.into(),
        }
    }

    /// Create queue-unavailable error
    pub fn queue_unavailable(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueueUnavailable {
            target: target.into(),
            message: message.into(),
        }
    }
}
