//! caliper-sensor: deliver Caliper envelopes to a collector
//!
//! Builds on [`caliper_core`] for the data model and adds delivery:
//!
//! - **Dispatcher** - [`Dispatcher`] turns payloads into one envelope and one POST
//! - **Transport** - [`Transport`] seam, with [`HttpTransport`] (reqwest) and [`MockTransport`]
//! - **Config** - [`DispatcherConfig`], [`SensorConfig`], TOML settings files
//! - **Sensor** - [`Sensor`] pairs a sensor id with its dispatcher
//!
//! # Example
//!
//! ```
//! use caliper_core::entities::Person;
//! use caliper_core::{Action, Event};
//! use caliper_sensor::{Dispatcher, DispatcherConfig, MockTransport, Sensor, SensorConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = MockTransport::new();
//! transport.queue_response(200, "");
//!
//! let mut sensor = Sensor::new(
//!     SensorConfig::new("https://example.edu/sensor/001"),
//!     Dispatcher::new(transport),
//! );
//! sensor.initialize(DispatcherConfig::parse("https://collector.example.edu/events")?)?;
//!
//! let event = Event::assessment_item()
//!     .with_actor(Person::new("https://example.edu/user/554433"))
//!     .with_action(Action::Completed);
//! sensor.send(event).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod mock;
pub mod sensor;
pub mod transport;

pub use config::{DispatcherConfig, ENDPOINT_ENV, SensorConfig, SensorSettings};
pub use dispatcher::{CONTENT_TYPE_JSON, Dispatcher, SendResponse};
pub use error::{ConfigError, ErrorKind, HttpError, HttpErrorContext, SendError, TransportError};
pub use mock::MockTransport;
pub use sensor::Sensor;
pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
