//! LIS course structure and membership

use std::fmt;

use serde::{Serialize, Serializer};

use super::fields::{impl_course, impl_entity, impl_organization};
use super::{CourseBase, EntityBase, EntityRef, EntityType, OrganizationBase};
use crate::field::Field;

/// A course as offered in a given term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseOffering {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    organization: OrganizationBase,
    #[serde(flatten)]
    course: CourseBase,
}

impl CourseOffering {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::CourseOffering),
            organization: OrganizationBase::default(),
            course: CourseBase::default(),
        }
    }
}

/// A section of a course offering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSection {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    organization: OrganizationBase,
    #[serde(flatten)]
    course: CourseBase,
}

impl CourseSection {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::CourseSection),
            organization: OrganizationBase::default(),
            course: CourseBase::default(),
        }
    }
}

/// An ad-hoc group within a section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    organization: OrganizationBase,
}

impl Group {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Group),
            organization: OrganizationBase::default(),
        }
    }
}

/// Role a member holds in an organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Learner,
    Instructor,
    TeachingAssistant,
    Mentor,
    Administrator,
    ContentDeveloper,
    Member,
}

impl Role {
    fn name(&self) -> &'static str {
        match self {
            Self::Learner => "Learner",
            Self::Instructor => "Instructor",
            Self::TeachingAssistant => "TeachingAssistant",
            Self::Mentor => "Mentor",
            Self::Administrator => "Administrator",
            Self::ContentDeveloper => "ContentDeveloper",
            Self::Member => "Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "http://purl.imsglobal.org/vocab/lis/v2/membership#{}", self.name())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Whether a membership is in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Active,
    Inactive,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        };
        write!(f, "http://purl.imsglobal.org/vocab/lis/v2/status#{name}")
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A person's enrollment in an organization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Membership {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(skip_serializing_if = "Field::is_absent")]
    member: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    organization: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    roles: Field<Vec<Role>>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    status: Field<Status>,
}

impl Membership {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Membership),
            member: Field::Absent,
            organization: Field::Absent,
            roles: Field::Absent,
            status: Field::Absent,
        }
    }

    pub fn with_member(mut self, member: impl Into<Field<EntityRef>>) -> Self {
        self.member = member.into();
        self
    }

    pub fn with_organization(mut self, organization: impl Into<Field<EntityRef>>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = Field::Value(roles.into_iter().collect());
        self
    }

    pub fn with_status(mut self, status: impl Into<Field<Status>>) -> Self {
        self.status = status.into();
        self
    }
}

impl_entity!(CourseOffering, CourseSection, Group, Membership);
impl_organization!(CourseOffering, CourseSection, Group);
impl_course!(CourseOffering, CourseSection);
