//! Learning objectives

use serde::Serialize;

use super::fields::impl_entity;
use super::{EntityBase, EntityType};

/// An objective that resources and assessments align to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningObjective {
    #[serde(flatten)]
    base: EntityBase,
}

impl LearningObjective {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::LearningObjective),
        }
    }
}

impl_entity!(LearningObjective);
