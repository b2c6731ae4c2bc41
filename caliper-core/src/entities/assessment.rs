//! Assessments, their items, attempts, and responses

use serde::Serialize;

use super::fields::{impl_assignable, impl_digital_resource, impl_entity};
use super::{AssignableBase, DigitalResourceBase, EntityBase, EntityRef, EntityType};
use crate::field::Field;
use crate::time::Timestamp;

/// A quiz, test, or other assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: DigitalResourceBase,
    #[serde(flatten)]
    assignable: AssignableBase,
}

impl Assessment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Assessment),
            resource: DigitalResourceBase::default(),
            assignable: AssignableBase::default(),
        }
    }
}

/// A single question within an assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentItem {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: DigitalResourceBase,
    #[serde(flatten)]
    assignable: AssignableBase,
    #[serde(skip_serializing_if = "Field::is_absent")]
    is_time_dependent: Field<bool>,
}

impl AssessmentItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::AssessmentItem),
            resource: DigitalResourceBase::default(),
            assignable: AssignableBase::default(),
            is_time_dependent: Field::Absent,
        }
    }

    pub fn with_is_time_dependent(mut self, time_dependent: impl Into<Field<bool>>) -> Self {
        self.is_time_dependent = time_dependent.into();
        self
    }
}

/// Timing of an actor working on an assignable
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct Progress {
    #[serde(skip_serializing_if = "Field::is_absent")]
    actor: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    assignable: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    started_at_time: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    ended_at_time: Field<Timestamp>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    duration: Field<String>,
}

macro_rules! progress_setters {
    ($($ty:ty),+) => {
        $(
            impl $ty {
                /// Who is working on the assignable
                pub fn with_actor(mut self, actor: impl Into<Field<EntityRef>>) -> Self {
                    self.progress.actor = actor.into();
                    self
                }

                /// The assessment or other assignable being worked on
                pub fn with_assignable(mut self, assignable: impl Into<Field<EntityRef>>) -> Self {
                    self.progress.assignable = assignable.into();
                    self
                }

                pub fn with_started_at_time(mut self, time: impl Into<Field<Timestamp>>) -> Self {
                    self.progress.started_at_time = time.into();
                    self
                }

                pub fn with_ended_at_time(mut self, time: impl Into<Field<Timestamp>>) -> Self {
                    self.progress.ended_at_time = time.into();
                    self
                }

                /// ISO-8601 duration, e.g. `PT2M30S`
                pub fn with_duration(mut self, duration: impl Into<Field<String>>) -> Self {
                    self.progress.duration = duration.into();
                    self
                }
            }
        )+
    };
}

/// One attempt at an assignable
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    progress: Progress,
    #[serde(skip_serializing_if = "Field::is_absent")]
    count: Field<u32>,
}

impl Attempt {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Attempt),
            progress: Progress::default(),
            count: Field::Absent,
        }
    }

    /// Which attempt this is, starting at 1
    pub fn with_count(mut self, count: impl Into<Field<u32>>) -> Self {
        self.count = count.into();
        self
    }
}

/// Answer to a fill-in-the-blank item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillinBlankResponse {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    progress: Progress,
    #[serde(skip_serializing_if = "Field::is_absent")]
    attempt: Field<EntityRef>,
    #[serde(skip_serializing_if = "Field::is_absent")]
    values: Field<Vec<String>>,
}

impl FillinBlankResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::FillinBlankResponse),
            progress: Progress::default(),
            attempt: Field::Absent,
            values: Field::Absent,
        }
    }

    /// The attempt that produced this response
    pub fn with_attempt(mut self, attempt: impl Into<Field<EntityRef>>) -> Self {
        self.attempt = attempt.into();
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Field::Value(values.into_iter().map(Into::into).collect());
        self
    }
}

progress_setters!(Attempt, FillinBlankResponse);

impl_entity!(Assessment, AssessmentItem, Attempt, FillinBlankResponse);
impl_digital_resource!(Assessment, AssessmentItem);
impl_assignable!(Assessment, AssessmentItem);
