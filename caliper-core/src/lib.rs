//! caliper-core: data layer for Caliper learning-analytics sensors
//!
//! This crate models everything that travels over the wire, without doing
//! any I/O itself:
//!
//! - **Fields** - [`Field`] distinguishes "never set" from "explicitly null"
//! - **Entities** - [`entities::Person`], [`entities::Assessment`], annotations, LIS records
//! - **Events** - [`Event`] with the [`EventType`] and [`Action`] vocabularies
//! - **Envelope** - [`Envelope`] wraps one or more payloads for a sensor
//! - **Serialization** - [`serialize`] turns an envelope into canonical JSON
//!
//! # Quick Start
//!
//! ```
//! use caliper_core::entities::{EntityFields, Person};
//! use caliper_core::{Action, Envelope, Event, Timestamp, serialize};
//!
//! let actor = Person::new("https://example.edu/user/554433")
//!     .with_name("Jane Doe");
//! let event = Event::assessment_item()
//!     .with_actor(actor)
//!     .with_action(Action::Completed);
//!
//! let envelope = Envelope::single("https://example.edu/sensor/001", Timestamp::now(), event)?;
//! let json = serialize(&envelope)?;
//! assert!(json.contains("\"sensor\":\"https://example.edu/sensor/001\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │   Entities   │───▶│    Event     │───▶│   Envelope   │
//! │ (Field<T>s)  │    │ (Field<T>s)  │    │ sensor, time │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!                                                ▼
//!                                         ┌──────────────┐
//!                                         │  serialize   │──▶ JSON text
//!                                         └──────────────┘
//! ```

pub mod entities;
pub mod envelope;
pub mod error;
pub mod events;
pub mod field;
pub mod payload;
pub mod serialize;
pub mod time;

/// JSON-LD context and data version emitted by this library.
pub const CALIPER_CONTEXT: &str = "http://purl.imsglobal.org/ctx/caliper/v1/Context";

pub use entities::{Entity, EntityRef, EntityType};
pub use envelope::{DATA_VERSION, Envelope};
pub use error::{ConfigurationError, SerializationError};
pub use events::{Action, Event, EventType};
pub use field::Field;
pub use payload::Payload;
pub use serialize::{serialize, serialize_pretty, to_value};
pub use time::Timestamp;
