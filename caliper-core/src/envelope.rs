//! Envelope construction
//!
//! An [`Envelope`] wraps one or more payloads with the sending sensor's id,
//! the send time, and the data version. Building one is pure: the send time
//! is supplied by the caller, never read from the clock here.

use serde::Serialize;

use crate::error::ConfigurationError;
use crate::payload::Payload;
use crate::time::Timestamp;

/// Schema version written to every envelope's `dataVersion`.
pub const DATA_VERSION: &str = "http://purl.imsglobal.org/ctx/caliper/v1/Context";

/// Top-level wire document for one send
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<P = Payload> {
    sensor: String,
    send_time: Timestamp,
    data_version: &'static str,
    data: Vec<P>,
}

impl<P> Envelope<P> {
    /// Build an envelope from payloads in caller order.
    ///
    /// The sensor id must contain something other than whitespace.
    pub fn build(
        sensor: impl Into<String>,
        send_time: Timestamp,
        payloads: impl IntoIterator<Item = P>,
    ) -> Result<Self, ConfigurationError> {
        let sensor = sensor.into();
        if sensor.trim().is_empty() {
            return Err(ConfigurationError::EmptySensorId);
        }

        Ok(Self {
            sensor,
            send_time,
            data_version: DATA_VERSION,
            data: payloads.into_iter().collect(),
        })
    }

    pub fn single(
        sensor: impl Into<String>,
        send_time: Timestamp,
        payload: P,
    ) -> Result<Self, ConfigurationError> {
        Self::build(sensor, send_time, std::iter::once(payload))
    }

    pub fn sensor(&self) -> &str {
        &self.sensor
    }

    pub fn send_time(&self) -> &Timestamp {
        &self.send_time
    }

    pub fn data_version(&self) -> &str {
        self.data_version
    }

    pub fn data(&self) -> &[P] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Action, Event};

    fn send_time() -> Timestamp {
        Timestamp::parse("2015-09-15T10:15:00.000Z").unwrap()
    }

    #[test]
    fn build_preserves_payload_order() {
        let envelope = Envelope::build("sensor-1", send_time(), [3, 1, 2]).unwrap();
        assert_eq!(envelope.data(), &[3, 1, 2]);
        assert_eq!(envelope.len(), 3);
        assert_eq!(envelope.sensor(), "sensor-1");
        assert_eq!(envelope.data_version(), DATA_VERSION);
    }

    #[test]
    fn single_payload_becomes_one_element_array() {
        let event = Event::assessment_item().with_action(Action::Completed);
        let envelope = Envelope::single("sensor-1", send_time(), event).unwrap();
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn blank_sensor_id_is_rejected() {
        let err = Envelope::build("   ", send_time(), [1]).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptySensorId);
        assert!(Envelope::<u8>::build("", send_time(), []).is_err());
    }

    #[test]
    fn empty_payload_list_still_builds() {
        let envelope = Envelope::<Payload>::build("sensor-1", send_time(), []).unwrap();
        assert!(envelope.is_empty());
    }

    #[test]
    fn wire_keys_are_in_declared_order() {
        let envelope = Envelope::single("sensor-1", send_time(), 7).unwrap();
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"sensor":"sensor-1","sendTime":"2015-09-15T10:15:00.000Z","dataVersion":"http://purl.imsglobal.org/ctx/caliper/v1/Context","data":[7]}"#
        );
    }
}
