//! A named sensor bound to its own dispatcher

use caliper_core::{ConfigurationError, Entity, Event, Payload};
use tracing::info;

use crate::config::{DispatcherConfig, SensorConfig, SensorSettings};
use crate::dispatcher::{Dispatcher, SendResponse};
use crate::error::SendError;
use crate::transport::{HttpTransport, Transport};

/// Emits events and entity descriptions under one sensor id
pub struct Sensor<T = HttpTransport> {
    config: SensorConfig,
    dispatcher: Dispatcher<T>,
}

impl Sensor<HttpTransport> {
    /// HTTP sensor, initialized from a settings file's contents.
    pub fn from_settings(settings: SensorSettings) -> Result<Self, SendError> {
        let mut dispatcher = Dispatcher::http()?;
        dispatcher.initialize(settings.dispatcher)?;
        Ok(Self::new(settings.sensor, dispatcher))
    }
}

impl<T: Transport> Sensor<T> {
    pub fn new(config: SensorConfig, dispatcher: Dispatcher<T>) -> Self {
        Self { config, dispatcher }
    }

    /// (Re)configure delivery for this sensor.
    pub fn initialize(&mut self, config: DispatcherConfig) -> Result<(), ConfigurationError> {
        info!(
            sensor = %self.config.id,
            endpoint = %config.redacted_endpoint(),
            "initializing sensor"
        );
        self.dispatcher.initialize(config)
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub async fn send(&self, event: Event) -> Result<SendResponse, SendError> {
        self.dispatcher.send(&self.config, [event]).await
    }

    /// Send `events` together in one envelope.
    pub async fn send_all<I>(&self, events: I) -> Result<SendResponse, SendError>
    where
        I: IntoIterator<Item = Event>,
    {
        self.dispatcher.send(&self.config, events).await
    }

    /// Send an entity description.
    pub async fn describe(&self, entity: impl Into<Entity>) -> Result<SendResponse, SendError> {
        self.dispatcher.send(&self.config, [entity.into()]).await
    }

    pub async fn describe_all<I, E>(&self, entities: I) -> Result<SendResponse, SendError>
    where
        I: IntoIterator<Item = E>,
        E: Into<Entity>,
    {
        self.dispatcher
            .send(&self.config, entities.into_iter().map(Into::<Entity>::into))
            .await
    }

    /// Send events and entities mixed in one envelope.
    pub async fn send_payloads<I>(&self, payloads: I) -> Result<SendResponse, SendError>
    where
        I: IntoIterator<Item = Payload>,
    {
        self.dispatcher.send(&self.config, payloads).await
    }
}
