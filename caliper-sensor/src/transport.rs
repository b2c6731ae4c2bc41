//! The network seam between the dispatcher and the collector

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::debug;
use url::Url;

use crate::error::TransportError;

/// One fully prepared POST
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized envelope
    pub body: String,
    pub timeout: Option<Duration>,
}

/// Status line and body of the collector's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a request and returns whatever the server said.
///
/// Implementations report every status, 4xx and 5xx included, as a
/// [`TransportResponse`]. Only failures to get a response at all are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).post(request).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxies, TLS roots, pooling).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest {
            url,
            headers,
            body,
            timeout,
        } = request;

        let mut builder = self.client.post(url).headers(headers).body(body);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else {
                TransportError::Body(e.to_string())
            }
        })?;

        debug!(status, bytes = body.len(), "collector responded");
        Ok(TransportResponse { status, body })
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    // a connect timeout reports both, and is a timeout
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Request(err.to_string())
    }
}
