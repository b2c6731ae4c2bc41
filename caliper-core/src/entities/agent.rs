//! Agents: people and software that act

use serde::Serialize;

use super::fields::impl_entity;
use super::{EntityBase, EntityRef, EntityType};
use crate::field::Field;

/// A learner, instructor, or other human actor
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(skip_serializing_if = "Field::is_absent")]
    has_membership: Field<Vec<EntityRef>>,
}

impl Person {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Person),
            has_membership: Field::Absent,
        }
    }

    /// Memberships this person holds
    pub fn with_has_membership<I, R>(mut self, memberships: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.has_membership = Field::Value(memberships.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_membership(&self) -> &Field<Vec<EntityRef>> {
        &self.has_membership
    }
}

/// A learning application (`edApp`) that emits events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoftwareApplication {
    #[serde(flatten)]
    base: EntityBase,
}

impl SoftwareApplication {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::SoftwareApplication),
        }
    }
}

impl_entity!(Person, SoftwareApplication);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityFields, Membership};

    #[test]
    fn person_embeds_memberships() {
        let person = Person::new("https://example.edu/user/554433").with_has_membership([
            Membership::new("https://example.edu/membership/001"),
            Membership::new("https://example.edu/membership/002"),
        ]);

        let json = serde_json::to_value(&person).unwrap();
        let memberships = json["hasMembership"].as_array().unwrap();
        assert_eq!(memberships.len(), 2);
        assert_eq!(memberships[1]["@id"], "https://example.edu/membership/002");
    }

    #[test]
    fn software_application_has_name() {
        let app = SoftwareApplication::new("https://example.com/super-assessment-tool")
            .with_name("Super Assessment Tool");
        assert_eq!(app.id(), "https://example.com/super-assessment-tool");
        assert_eq!(
            app.entity_base().name.value().map(String::as_str),
            Some("Super Assessment Tool")
        );
    }
}
