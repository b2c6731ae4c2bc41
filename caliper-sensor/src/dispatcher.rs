//! Envelope dispatch
//!
//! A [`Dispatcher`] holds one validated [`DispatcherConfig`] and turns each
//! `send` into exactly one POST:
//!
//! 1. refuse if not initialized
//! 2. build the envelope (stamped with the current time) and serialize it
//! 3. merge headers, sensor headers winning, and force the JSON content type
//! 4. post once, never retry
//! 5. classify the response by status

use std::sync::Arc;

use caliper_core::{ConfigurationError, Envelope, Timestamp, serialize, to_value};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, field, info, instrument, warn};

use crate::config::{DispatcherConfig, SensorConfig, insert_headers};
use crate::error::{HttpError, HttpErrorContext, SendError, TransportError};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Content type of every envelope POST.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone)]
enum State {
    Uninitialized,
    Ready(Arc<DispatcherConfig>),
}

/// Body of a successful (2xx) response
#[derive(Debug, Clone, PartialEq)]
pub enum SendResponse {
    Json(Value),
    /// Non-JSON body, passed through untouched
    Text(String),
    /// Empty or whitespace-only body
    Empty,
}

impl SendResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Sends envelopes to one collector endpoint
pub struct Dispatcher<T = HttpTransport> {
    transport: T,
    state: State,
}

impl Dispatcher<HttpTransport> {
    /// Uninitialized dispatcher over a default reqwest client.
    pub fn http() -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new()?))
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: State::Uninitialized,
        }
    }

    /// Validate and install `config`, replacing any previous one entirely.
    ///
    /// On error the previous state is kept.
    pub fn initialize(&mut self, config: DispatcherConfig) -> Result<(), ConfigurationError> {
        config.validate()?;
        info!(
            endpoint = %config.redacted_endpoint(),
            headers = config.headers.len(),
            timeout = ?config.timeout,
            "dispatcher initialized"
        );
        self.state = State::Ready(Arc::new(config));
        Ok(())
    }

    pub fn reset(&mut self) {
        if self.is_ready() {
            info!("dispatcher reset");
        }
        self.state = State::Uninitialized;
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    pub fn config(&self) -> Option<&DispatcherConfig> {
        match &self.state {
            State::Ready(config) => Some(config),
            State::Uninitialized => None,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Wrap `payloads` in one envelope for `sensor` and POST it.
    ///
    /// Local failures (not initialized, empty sensor id or payload list,
    /// serialization, bad headers) return before any network call.
    #[instrument(
        name = "dispatcher::send",
        skip_all,
        fields(sensor = %sensor.id, endpoint = field::Empty)
    )]
    pub async fn send<P, I>(
        &self,
        sensor: &SensorConfig,
        payloads: I,
    ) -> Result<SendResponse, SendError>
    where
        P: Serialize,
        I: IntoIterator<Item = P>,
    {
        let State::Ready(config) = &self.state else {
            return Err(SendError::NotInitialized);
        };
        tracing::Span::current().record("endpoint", field::display(config.redacted_endpoint()));

        let envelope = Envelope::build(sensor.id.as_str(), Timestamp::now(), payloads)?;
        if envelope.is_empty() {
            return Err(ConfigurationError::EmptyPayload.into());
        }
        let request = prepare(config, sensor, &envelope)?;

        let response = self.transport.post(request).await?;
        classify(response, || to_value(envelope.data()).unwrap_or(Value::Null))
    }
}

fn prepare<P: Serialize>(
    config: &DispatcherConfig,
    sensor: &SensorConfig,
    envelope: &Envelope<P>,
) -> Result<TransportRequest, SendError> {
    let body = serialize(envelope)?;
    let headers = merge_headers(config, sensor)?;
    debug!(payloads = envelope.len(), bytes = body.len(), "sending envelope");

    Ok(TransportRequest {
        url: config.endpoint.clone(),
        headers,
        body,
        timeout: sensor.timeout.or(config.timeout),
    })
}

fn merge_headers(
    config: &DispatcherConfig,
    sensor: &SensorConfig,
) -> Result<HeaderMap, ConfigurationError> {
    let mut headers = config.header_map()?;
    insert_headers(&mut headers, &sensor.headers)?;
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
    Ok(headers)
}

/// `sent` yields the `data` array for the error context and only runs on
/// rejection.
fn classify(
    response: TransportResponse,
    sent: impl FnOnce() -> Value,
) -> Result<SendResponse, SendError> {
    if response.is_success() {
        debug!(status = response.status, "envelope accepted");
        return Ok(parse_body(response.body));
    }

    warn!(status = response.status, "collector rejected envelope");
    let body = (!response.body.is_empty()).then_some(response.body);
    Err(HttpError {
        status_code: response.status,
        context: HttpErrorContext {
            payload: sent(),
            body,
        },
    }
    .into())
}

fn parse_body(body: String) -> SendResponse {
    if body.trim().is_empty() {
        return SendResponse::Empty;
    }
    match serde_json::from_str(&body) {
        Ok(value) => SendResponse::Json(value),
        Err(_) => SendResponse::Text(body),
    }
}
