//! Caliper events
//!
//! An [`Event`] records an actor performing an [`Action`] on an object, with
//! optional target, generated artifact, and learning context. Attributes that
//! are never set stay out of the JSON; setting one to [`Field::Null`] writes
//! an explicit `null`.

mod action;

use std::fmt;

use serde::{Serialize, Serializer};

pub use action::Action;

use crate::CALIPER_CONTEXT;
use crate::entities::EntityRef;
use crate::field::Field;
use crate::time::Timestamp;

/// The `@type` of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Event,
    AnnotationEvent,
    AssessmentEvent,
    AssessmentItemEvent,
    MediaEvent,
    NavigationEvent,
    OutcomeEvent,
    ReadingEvent,
    SessionEvent,
    ViewEvent,
}

impl EventType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::AnnotationEvent => "AnnotationEvent",
            Self::AssessmentEvent => "AssessmentEvent",
            Self::AssessmentItemEvent => "AssessmentItemEvent",
            Self::MediaEvent => "MediaEvent",
            Self::NavigationEvent => "NavigationEvent",
            Self::OutcomeEvent => "OutcomeEvent",
            Self::ReadingEvent => "ReadingEvent",
            Self::SessionEvent => "SessionEvent",
            Self::ViewEvent => "ViewEvent",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://purl.imsglobal.org/caliper/v1/{}", self.name())
    }
}

impl Serialize for EventType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A learning event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    event_type: EventType,
    #[serde(skip_serializing_if = "Field::is_absent")]
    actor: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    action: Field<Action>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    object: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    target: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    generated: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    event_time: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    started_at_time: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    ended_at_time: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    duration: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    ed_app: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    group: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    membership: Field<EntityRef>,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Self {
            context: CALIPER_CONTEXT,
            event_type,
            actor: Field::Absent,
            action: Field::Absent,
            object: Field::Absent,
            target: Field::Absent,
            generated: Field::Absent,
            event_time: Field::Absent,
            started_at_time: Field::Absent,
            ended_at_time: Field::Absent,
            duration: Field::Absent,
            ed_app: Field::Absent,
            group: Field::Absent,
            membership: Field::Absent,
        }
    }

    pub fn annotation() -> Self {
        Self::new(EventType::AnnotationEvent)
    }

    pub fn assessment() -> Self {
        Self::new(EventType::AssessmentEvent)
    }

    pub fn assessment_item() -> Self {
        Self::new(EventType::AssessmentItemEvent)
    }

    pub fn navigation() -> Self {
        Self::new(EventType::NavigationEvent)
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn actor(&self) -> &Field<EntityRef> {
        &self.actor
    }

    pub fn action(&self) -> &Field<Action> {
        &self.action
    }

    pub fn object(&self) -> &Field<EntityRef> {
        &self.object
    }

    pub fn with_actor(mut self, actor: impl Into<Field<EntityRef>>) -> Self {
        self.actor = actor.into();
        self
    }

    pub fn with_action(mut self, action: impl Into<Field<Action>>) -> Self {
        self.action = action.into();
        self
    }

    pub fn with_object(mut self, object: impl Into<Field<EntityRef>>) -> Self {
        self.object = object.into();
        self
    }

    pub fn with_target(mut self, target: impl Into<Field<EntityRef>>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_generated(mut self, generated: impl Into<Field<EntityRef>>) -> Self {
        self.generated = generated.into();
        self
    }

    pub fn with_event_time(mut self, time: impl Into<Field<Timestamp>>) -> Self {
        self.event_time = time.into();
        self
    }

    pub fn with_started_at_time(mut self, time: impl Into<Field<Timestamp>>) -> Self {
        self.started_at_time = time.into();
        self
    }

    pub fn with_ended_at_time(mut self, time: impl Into<Field<Timestamp>>) -> Self {
        self.ended_at_time = time.into();
        self
    }

    /// ISO-8601 duration, e.g. `PT2M30S`
    pub fn with_duration(mut self, duration: impl Into<Field<String>>) -> Self {
        self.duration = duration.into();
        self
    }

    pub fn with_ed_app(mut self, ed_app: impl Into<Field<EntityRef>>) -> Self {
        self.ed_app = ed_app.into();
        self
    }

    pub fn with_group(mut self, group: impl Into<Field<EntityRef>>) -> Self {
        self.group = group.into();
        self
    }

    pub fn with_membership(mut self, membership: impl Into<Field<EntityRef>>) -> Self {
        self.membership = membership.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Person, SoftwareApplication};
    use serde_json::json;

    #[test]
    fn bare_event_has_context_and_type_only() {
        let json = serde_json::to_value(Event::navigation()).unwrap();
        assert_eq!(
            json,
            json!({
                "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
                "@type": "http://purl.imsglobal.org/caliper/v1/NavigationEvent",
            })
        );
    }

    #[test]
    fn explicit_null_target_is_emitted() {
        let event = Event::assessment_item()
            .with_actor(Person::new("https://example.edu/user/554433"))
            .with_action(Action::Completed)
            .with_target(Field::Null);

        let json = serde_json::to_value(&event).unwrap();
        let object = json.as_object().unwrap();
        assert!(object["target"].is_null());
        assert!(!object.contains_key("generated"));
        assert_eq!(
            object["action"],
            "http://purl.imsglobal.org/vocab/caliper/v1/action#Completed"
        );
        assert_eq!(object["actor"]["@id"], "https://example.edu/user/554433");
    }

    #[test]
    fn context_fields_use_camel_case() {
        let event = Event::annotation()
            .with_ed_app(SoftwareApplication::new("https://example.com/readium"))
            .with_event_time(Timestamp::parse("2015-09-15T10:15:00Z").unwrap())
            .with_duration("PT2M");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["edApp"]["@id"], "https://example.com/readium");
        assert_eq!(json["eventTime"], "2015-09-15T10:15:00.000Z");
        assert_eq!(json["duration"], "PT2M");
    }

    #[test]
    fn accessors_report_what_was_set() {
        let event = Event::assessment().with_action(Action::Started);
        assert_eq!(event.event_type(), EventType::AssessmentEvent);
        assert_eq!(event.action().value(), Some(&Action::Started));
        assert!(event.actor().is_absent());
        assert!(event.object().is_absent());
    }
}
