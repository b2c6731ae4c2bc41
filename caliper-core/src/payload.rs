//! Items carried in an envelope's `data` array

use serde::Serialize;

use crate::entities::Entity;
use crate::events::Event;

/// A single event or entity record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Event(Box<Event>),
    Entity(Box<Entity>),
}

impl Payload {
    /// The entity `@id`, if this payload is an entity. Events carry no id.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Event(_) => None,
            Self::Entity(entity) => Some(entity.id()),
        }
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event(_))
    }
}

impl From<Event> for Payload {
    fn from(event: Event) -> Self {
        Self::Event(Box::new(event))
    }
}

impl From<Entity> for Payload {
    fn from(entity: Entity) -> Self {
        Self::Entity(Box::new(entity))
    }
}
