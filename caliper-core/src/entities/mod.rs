//! Caliper entities
//!
//! Entities are the nouns of an event: who acted, what they acted on, and the
//! learning context around it. Every concrete record carries an [`EntityBase`]
//! and opts into further attribute groups ([`DigitalResource`], [`Assignable`],
//! [`Organization`], [`Course`]) whose traits provide chainable setters.
//!
//! ```
//! use caliper_core::entities::{Assessment, Assignable, DigitalResource, EntityFields};
//! use caliper_core::{Field, Timestamp};
//!
//! let assessment = Assessment::new("https://example.edu/assessment/001")
//!     .with_name("Key Figures Assessment")
//!     .with_version("1.0")
//!     .with_max_attempts(2)
//!     .with_date_modified(Field::Null);
//!
//! let json = serde_json::to_value(&assessment).unwrap();
//! assert!(json["dateModified"].is_null());
//! assert!(json.get("dateCreated").is_none());
//! ```

mod agent;
mod annotation;
mod assessment;
mod fields;
mod learning_objective;
mod lis;
mod reading;

use std::fmt;

use serde::{Serialize, Serializer};

use crate::field::Field;

pub use agent::{Person, SoftwareApplication};
pub use annotation::{
    BookmarkAnnotation, HighlightAnnotation, SharedAnnotation, TagAnnotation, TextPositionSelector,
};
pub use assessment::{Assessment, AssessmentItem, Attempt, FillinBlankResponse};
pub use fields::{
    Assignable, AssignableBase, Course, CourseBase, DigitalResource, DigitalResourceBase,
    EntityBase, EntityFields, Organization, OrganizationBase,
};
pub use learning_objective::LearningObjective;
pub use lis::{CourseOffering, CourseSection, Group, Membership, Role, Status};
pub use reading::{EPubVolume, Frame, WebPage};

const TYPE_PREFIX: &str = "http://purl.imsglobal.org/caliper/v1/";

/// The `@type` of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Person,
    SoftwareApplication,
    LearningObjective,
    Assessment,
    AssessmentItem,
    Attempt,
    FillinBlankResponse,
    BookmarkAnnotation,
    HighlightAnnotation,
    SharedAnnotation,
    TagAnnotation,
    EPubVolume,
    Frame,
    WebPage,
    CourseOffering,
    CourseSection,
    Group,
    Membership,
}

impl EntityType {
    /// Path of the type under the Caliper v1 vocabulary
    fn path(&self) -> &'static str {
        match self {
            Self::Person => "lis/Person",
            Self::SoftwareApplication => "SoftwareApplication",
            Self::LearningObjective => "LearningObjective",
            Self::Assessment => "Assessment",
            Self::AssessmentItem => "AssessmentItem",
            Self::Attempt => "Attempt",
            Self::FillinBlankResponse => "FillinBlankResponse",
            Self::BookmarkAnnotation => "BookmarkAnnotation",
            Self::HighlightAnnotation => "HighlightAnnotation",
            Self::SharedAnnotation => "SharedAnnotation",
            Self::TagAnnotation => "TagAnnotation",
            Self::EPubVolume => "EPubVolume",
            Self::Frame => "Frame",
            Self::WebPage => "WebPage",
            Self::CourseOffering => "lis/CourseOffering",
            Self::CourseSection => "lis/CourseSection",
            Self::Group => "lis/Group",
            Self::Membership => "lis/Membership",
        }
    }

    /// Full type IRI, e.g. `http://purl.imsglobal.org/caliper/v1/lis/Person`
    pub fn as_iri(&self) -> String {
        format!("{TYPE_PREFIX}{}", self.path())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TYPE_PREFIX}{}", self.path())
    }
}

impl Serialize for EntityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A relation to another entity: either the full record or just its `@id`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntityRef {
    Id(String),
    Entity(Box<Entity>),
}

impl EntityRef {
    /// The `@id` of the referenced entity
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Entity(entity) => entity.id(),
        }
    }
}

impl From<&str> for EntityRef {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for EntityRef {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

impl From<Entity> for EntityRef {
    fn from(entity: Entity) -> Self {
        Self::Entity(Box::new(entity))
    }
}

impl From<&str> for Field<EntityRef> {
    fn from(id: &str) -> Self {
        Field::Value(EntityRef::from(id))
    }
}

impl From<String> for Field<EntityRef> {
    fn from(id: String) -> Self {
        Field::Value(EntityRef::Id(id))
    }
}

impl From<Entity> for Field<EntityRef> {
    fn from(entity: Entity) -> Self {
        Field::Value(EntityRef::from(entity))
    }
}

macro_rules! entity_kinds {
    ($($kind:ident),+ $(,)?) => {
        /// Any concrete entity
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum Entity {
            $($kind($kind)),+
        }

        impl Entity {
            /// Shared attributes of the wrapped record
            pub fn base(&self) -> &EntityBase {
                match self {
                    $(Self::$kind(e) => e.entity_base()),+
                }
            }
        }

        $(
            impl From<$kind> for Entity {
                fn from(e: $kind) -> Self {
                    Self::$kind(e)
                }
            }

            impl From<$kind> for EntityRef {
                fn from(e: $kind) -> Self {
                    Self::Entity(Box::new(Entity::$kind(e)))
                }
            }

            impl From<$kind> for Field<EntityRef> {
                fn from(e: $kind) -> Self {
                    Field::Value(EntityRef::from(e))
                }
            }
        )+
    };
}

entity_kinds!(
    Person,
    SoftwareApplication,
    LearningObjective,
    Assessment,
    AssessmentItem,
    Attempt,
    FillinBlankResponse,
    BookmarkAnnotation,
    HighlightAnnotation,
    SharedAnnotation,
    TagAnnotation,
    EPubVolume,
    Frame,
    WebPage,
    CourseOffering,
    CourseSection,
    Group,
    Membership,
);

impl Entity {
    /// The `@id` of the wrapped record
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// The `@type` of the wrapped record
    pub fn entity_type(&self) -> EntityType {
        self.base().entity_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entity_type_serializes_as_iri() {
        assert_eq!(
            serde_json::to_value(EntityType::Person).unwrap(),
            json!("http://purl.imsglobal.org/caliper/v1/lis/Person")
        );
        assert_eq!(
            EntityType::TagAnnotation.as_iri(),
            "http://purl.imsglobal.org/caliper/v1/TagAnnotation"
        );
    }

    #[test]
    fn id_reference_serializes_as_string() {
        let reference = EntityRef::from("https://example.edu/user/1");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!("https://example.edu/user/1")
        );
    }

    #[test]
    fn embedded_reference_serializes_as_object() {
        let reference = EntityRef::from(Person::new("https://example.edu/user/1"));
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["@id"], "https://example.edu/user/1");
        assert_eq!(json["@type"], "http://purl.imsglobal.org/caliper/v1/lis/Person");
        assert_eq!(reference.id(), "https://example.edu/user/1");
    }

    #[test]
    fn entity_exposes_id_and_type() {
        let entity = Entity::from(Group::new("https://example.edu/group/1"));
        assert_eq!(entity.id(), "https://example.edu/group/1");
        assert_eq!(entity.entity_type(), EntityType::Group);
    }

    #[test]
    fn new_entity_emits_only_identity_keys() {
        let json =
            serde_json::to_value(LearningObjective::new("https://example.edu/lo/1")).unwrap();
        assert_eq!(
            json,
            json!({
                "@context": "http://purl.imsglobal.org/ctx/caliper/v1/Context",
                "@id": "https://example.edu/lo/1",
                "@type": "http://purl.imsglobal.org/caliper/v1/LearningObjective",
            })
        );
    }
}
