//! Scripted transport for tests
//!
//! Queue responses with `queue_response()` (or failures with `queue_error()`)
//! before sending. Each `post()` records the request and consumes one queued
//! outcome in order.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{Transport, TransportRequest, TransportResponse};

type Outcome = Result<TransportResponse, TransportError>;

/// In-memory [`Transport`] that never touches the network
#[derive(Debug, Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Outcome>>,
    requests: Mutex<Vec<TransportRequest>>,
    latency: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `latency`.
    ///
    /// A request whose timeout is shorter fails with [`TransportError::Timeout`]
    /// once the timeout elapses.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    pub fn queue_response(&self, status: u16, body: impl Into<String>) {
        lock(&self.outcomes).push_back(Ok(TransportResponse::new(status, body)));
    }

    pub fn queue_json(&self, status: u16, body: &Value) {
        self.queue_response(status, body.to_string());
    }

    pub fn queue_error(&self, error: TransportError) {
        lock(&self.outcomes).push_back(Err(error));
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    pub fn last_request(&self) -> Option<TransportRequest> {
        lock(&self.requests).last().cloned()
    }

    pub fn queued_count(&self) -> usize {
        lock(&self.outcomes).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Transport for MockTransport {
    async fn post(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let timeout = request.timeout;
        lock(&self.requests).push(request);

        if let Some(latency) = self.latency {
            match timeout {
                Some(limit) if limit < latency => {
                    tokio::time::sleep(limit).await;
                    return Err(TransportError::Timeout);
                }
                _ => tokio::time::sleep(latency).await,
            }
        }

        lock(&self.outcomes).pop_front().unwrap_or_else(|| {
            Err(TransportError::Request(
                "no queued response in MockTransport".to_string(),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderMap;

    use super::*;

    fn request(body: &str) -> TransportRequest {
        TransportRequest {
            url: "http://collector.test/events".parse().unwrap(),
            headers: HeaderMap::new(),
            body: body.to_string(),
            timeout: None,
        }
    }

    #[tokio::test]
    async fn outcomes_are_consumed_in_order() {
        let mock = MockTransport::new();
        mock.queue_response(200, "first");
        mock.queue_error(TransportError::Timeout);
        assert_eq!(mock.queued_count(), 2);

        let first = mock.post(request("a")).await.unwrap();
        assert_eq!(first.body, "first");
        assert_eq!(mock.post(request("b")).await, Err(TransportError::Timeout));

        let bodies: Vec<_> = mock.requests().into_iter().map(|r| r.body).collect();
        assert_eq!(bodies, ["a", "b"]);
    }

    #[tokio::test]
    async fn empty_queue_is_an_error() {
        let mock = MockTransport::new();
        assert!(matches!(
            mock.post(request("x")).await,
            Err(TransportError::Request(_))
        ));
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn latency_beyond_timeout_times_out() {
        let mock = MockTransport::new().with_latency(Duration::from_secs(5));
        mock.queue_response(200, "late");

        let mut req = request("x");
        req.timeout = Some(Duration::from_secs(1));
        assert_eq!(mock.post(req).await, Err(TransportError::Timeout));

        // the queued response is still there for the next caller
        assert_eq!(mock.queued_count(), 1);
        assert_eq!(mock.post(request("y")).await.unwrap().body, "late");
    }
}
