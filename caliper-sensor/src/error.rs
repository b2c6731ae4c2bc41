//! Error types for caliper-sensor

use std::path::PathBuf;

use caliper_core::{ConfigurationError, SerializationError};
use serde_json::Value;
use thiserror::Error;

/// Why a send did not succeed
#[derive(Debug, Error)]
pub enum SendError {
    /// `send` was called before `initialize`
    #[error("dispatcher is not initialized")]
    NotInitialized,

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The collector answered with a non-2xx status
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Coarse classification of a [`SendError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotInitialized,
    Configuration,
    Serialization,
    Http,
    Transport,
}

impl SendError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotInitialized => ErrorKind::NotInitialized,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Serialization(_) => ErrorKind::Serialization,
            Self::Http(_) => ErrorKind::Http,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Whether sending the same envelope again could succeed without changes.
    ///
    /// Nothing in this crate retries; this only informs the caller.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http(err) => err.is_retriable(),
            Self::NotInitialized | Self::Configuration(_) | Self::Serialization(_) => false,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(err) => Some(err.status_code),
            _ => None,
        }
    }
}

/// Non-2xx response from the collector
#[derive(Debug, Clone, PartialEq, Error)]
#[error("collector rejected envelope with status {status_code}")]
pub struct HttpError {
    pub status_code: u16,
    pub context: HttpErrorContext,
}

impl HttpError {
    pub fn is_retriable(&self) -> bool {
        matches!(self.status_code, 408 | 429 | 500..=599)
    }
}

/// What was sent and what came back with a rejected envelope
#[derive(Debug, Clone, PartialEq)]
pub struct HttpErrorContext {
    /// The envelope's `data` array as sent
    pub payload: Value,
    /// Raw response body, if the collector sent one
    pub body: Option<String>,
}

/// Failures below the HTTP status line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors loading sensor or dispatcher settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status_code: u16) -> SendError {
        SendError::Http(HttpError {
            status_code,
            context: HttpErrorContext {
                payload: Value::Array(vec![]),
                body: None,
            },
        })
    }

    #[test]
    fn retriable_statuses() {
        for status in [408, 429, 500, 502, 503, 599] {
            assert!(http(status).is_retriable(), "{status} should be retriable");
        }
        for status in [400, 401, 403, 404, 409, 422] {
            assert!(!http(status).is_retriable(), "{status} should not be retriable");
        }
    }

    #[test]
    fn transport_errors_are_retriable_local_errors_are_not() {
        assert!(SendError::Transport(TransportError::Timeout).is_retriable());
        assert!(SendError::Transport(TransportError::Connect("refused".into())).is_retriable());
        assert!(!SendError::NotInitialized.is_retriable());
        assert!(!SendError::Configuration(ConfigurationError::EmptyPayload).is_retriable());
    }

    #[test]
    fn kind_and_status_code() {
        assert_eq!(http(404).kind(), ErrorKind::Http);
        assert_eq!(http(404).status_code(), Some(404));
        assert_eq!(SendError::NotInitialized.kind(), ErrorKind::NotInitialized);
        assert_eq!(SendError::NotInitialized.status_code(), None);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            http(503).to_string(),
            "collector rejected envelope with status 503"
        );
        assert_eq!(
            SendError::Transport(TransportError::Timeout).to_string(),
            "request timed out"
        );
        assert_eq!(
            SendError::from(ConfigurationError::EmptySensorId).to_string(),
            "sensor id must not be empty"
        );
    }
}
