//! Attribute groups shared across entity kinds
//!
//! Each group is a plain struct flattened into the concrete records that
//! carry it, paired with a trait whose provided `with_*` methods set those
//! attributes. A record opts into a group by implementing the accessor.

use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::{EntityRef, EntityType};
use crate::CALIPER_CONTEXT;
use crate::field::Field;
use crate::time::Timestamp;

// ────────────────────────────────────────────────────────────────────────────
// Entity
// ────────────────────────────────────────────────────────────────────────────

/// Attributes every entity has
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type")]
    pub entity_type: EntityType,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub extensions: Field<Map<String, Value>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_created: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_modified: Field<Timestamp>,
}

impl EntityBase {
    pub(crate) fn new(id: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            context: CALIPER_CONTEXT,
            id: id.into(),
            entity_type,
            name: Field::Absent,
            description: Field::Absent,
            extensions: Field::Absent,
            date_created: Field::Absent,
            date_modified: Field::Absent,
        }
    }
}

/// Common accessors and setters for every entity
pub trait EntityFields: Sized {
    fn entity_base(&self) -> &EntityBase;
    fn entity_base_mut(&mut self) -> &mut EntityBase;

    /// The `@id` IRI
    fn id(&self) -> &str {
        &self.entity_base().id
    }

    /// The `@type` of this record
    fn entity_type(&self) -> EntityType {
        self.entity_base().entity_type
    }

    fn with_name(mut self, name: impl Into<Field<String>>) -> Self {
        self.entity_base_mut().name = name.into();
        self
    }

    fn with_description(mut self, description: impl Into<Field<String>>) -> Self {
        self.entity_base_mut().description = description.into();
        self
    }

    fn with_extensions(mut self, extensions: impl Into<Field<Map<String, Value>>>) -> Self {
        self.entity_base_mut().extensions = extensions.into();
        self
    }

    fn with_date_created(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.entity_base_mut().date_created = date.into();
        self
    }

    fn with_date_modified(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.entity_base_mut().date_modified = date.into();
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Digital resources
// ────────────────────────────────────────────────────────────────────────────

/// Attributes of creative works: readings, assessments, pages
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitalResourceBase {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub object_type: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub aligned_learning_objective: Field<Vec<EntityRef>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub keywords: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub is_part_of: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_published: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub version: Field<String>,
}

/// Setters shared by digital resources
pub trait DigitalResource: EntityFields {
    fn resource_mut(&mut self) -> &mut DigitalResourceBase;

    fn with_object_type<I, S>(mut self, object_type: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resource_mut().object_type =
            Field::Value(object_type.into_iter().map(Into::into).collect());
        self
    }

    fn with_aligned_learning_objective<I, R>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.resource_mut().aligned_learning_objective =
            Field::Value(objectives.into_iter().map(Into::into).collect());
        self
    }

    fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resource_mut().keywords = Field::Value(keywords.into_iter().map(Into::into).collect());
        self
    }

    fn with_is_part_of(mut self, parent: impl Into<Field<EntityRef>>) -> Self {
        self.resource_mut().is_part_of = parent.into();
        self
    }

    fn with_date_published(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.resource_mut().date_published = date.into();
        self
    }

    fn with_version(mut self, version: impl Into<Field<String>>) -> Self {
        self.resource_mut().version = version.into();
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Assignables
// ────────────────────────────────────────────────────────────────────────────

/// Scheduling and scoring attributes of assignable resources
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignableBase {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_to_activate: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_to_show: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_to_start_on: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub date_to_submit: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub max_attempts: Field<u32>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub max_submits: Field<u32>,
    #[serde(skip_serializing_if = "Field::is_absent", serialize_with = "finite")]
    pub max_score: Field<f64>,
}

/// JSON has no NaN or infinity; serde_json would write `null` for them.
fn finite<S: Serializer>(value: &Field<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Field::Value(n) if !n.is_finite() => {
            Err(S::Error::custom(format!("non-finite number {n}")))
        }
        other => other.serialize(serializer),
    }
}

/// Setters shared by assignable resources
pub trait Assignable: DigitalResource {
    fn assignable_mut(&mut self) -> &mut AssignableBase;

    fn with_date_to_activate(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.assignable_mut().date_to_activate = date.into();
        self
    }

    fn with_date_to_show(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.assignable_mut().date_to_show = date.into();
        self
    }

    fn with_date_to_start_on(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.assignable_mut().date_to_start_on = date.into();
        self
    }

    fn with_date_to_submit(mut self, date: impl Into<Field<Timestamp>>) -> Self {
        self.assignable_mut().date_to_submit = date.into();
        self
    }

    fn with_max_attempts(mut self, max: impl Into<Field<u32>>) -> Self {
        self.assignable_mut().max_attempts = max.into();
        self
    }

    fn with_max_submits(mut self, max: impl Into<Field<u32>>) -> Self {
        self.assignable_mut().max_submits = max.into();
        self
    }

    fn with_max_score(mut self, max: impl Into<Field<f64>>) -> Self {
        self.assignable_mut().max_score = max.into();
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Organizations
// ────────────────────────────────────────────────────────────────────────────

/// Attributes of LIS organizations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationBase {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub sub_organization_of: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub membership: Field<Vec<EntityRef>>,
}

/// Setters shared by organizations
pub trait Organization: EntityFields {
    fn organization_mut(&mut self) -> &mut OrganizationBase;

    fn with_sub_organization_of(mut self, parent: impl Into<Field<EntityRef>>) -> Self {
        self.organization_mut().sub_organization_of = parent.into();
        self
    }

    fn with_membership<I, R>(mut self, memberships: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.organization_mut().membership =
            Field::Value(memberships.into_iter().map(Into::into).collect());
        self
    }
}

/// Attributes of course offerings and sections
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBase {
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub course_number: Field<String>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    pub academic_session: Field<String>,
}

/// Setters shared by courses
pub trait Course: Organization {
    fn course_mut(&mut self) -> &mut CourseBase;

    fn with_course_number(mut self, number: impl Into<Field<String>>) -> Self {
        self.course_mut().course_number = number.into();
        self
    }

    fn with_academic_session(mut self, session: impl Into<Field<String>>) -> Self {
        self.course_mut().academic_session = session.into();
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Impl helpers
// ────────────────────────────────────────────────────────────────────────────

macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::EntityFields for $ty {
                fn entity_base(&self) -> &$crate::entities::EntityBase {
                    &self.base
                }

                fn entity_base_mut(&mut self) -> &mut $crate::entities::EntityBase {
                    &mut self.base
                }
            }
        )+
    };
}

macro_rules! impl_digital_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::DigitalResource for $ty {
                fn resource_mut(&mut self) -> &mut $crate::entities::DigitalResourceBase {
                    &mut self.resource
                }
            }
        )+
    };
}

macro_rules! impl_assignable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::Assignable for $ty {
                fn assignable_mut(&mut self) -> &mut $crate::entities::AssignableBase {
                    &mut self.assignable
                }
            }
        )+
    };
}

macro_rules! impl_organization {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::Organization for $ty {
                fn organization_mut(&mut self) -> &mut $crate::entities::OrganizationBase {
                    &mut self.organization
                }
            }
        )+
    };
}

macro_rules! impl_course {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::entities::Course for $ty {
                fn course_mut(&mut self) -> &mut $crate::entities::CourseBase {
                    &mut self.course
                }
            }
        )+
    };
}

pub(crate) use impl_assignable;
pub(crate) use impl_course;
pub(crate) use impl_digital_resource;
pub(crate) use impl_entity;
pub(crate) use impl_organization;
