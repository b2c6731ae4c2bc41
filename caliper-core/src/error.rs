//! Error types for caliper-core

use thiserror::Error;

/// Invalid sensor or delivery configuration, detected before any I/O
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("sensor id must not be empty")]
    EmptySensorId,

    #[error("at least one payload is required")]
    EmptyPayload,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },
}

/// Payload graph could not be turned into JSON
#[derive(Error, Debug)]
#[error("failed to serialize envelope: {0}")]
pub struct SerializationError(#[from] serde_json::Error);

impl SerializationError {
    /// The underlying serde_json error
    pub fn inner(&self) -> &serde_json::Error {
        &self.0
    }
}
