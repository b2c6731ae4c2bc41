//! Annotations made on digital resources

use serde::Serialize;

use super::fields::impl_entity;
use super::{EntityBase, EntityRef, EntityType};
use crate::field::Field;

/// Marks a span of text inside the annotated resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPositionSelector {
    #[serde(rename = "@type")]
    selector_type: &'static str,
    pub start: u32,
    pub end: u32,
}

impl TextPositionSelector {
    pub fn new(start: u32, end: u32) -> Self {
        Self {
            selector_type: "http://www.w3.org/ns/oa#TextPositionSelector",
            start,
            end,
        }
    }
}

macro_rules! annotation {
    ($(#[$meta:meta])* $name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            #[serde(flatten)]
            base: EntityBase,
            #[serde(skip_serializing_if = "Field::is_absent")]
            annotated: Field<EntityRef>,
            $(
                #[serde(skip_serializing_if = "Field::is_absent")]
                $field: Field<$ty>,
            )*
        }

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self {
                    base: EntityBase::new(id, EntityType::$name),
                    annotated: Field::Absent,
                    $($field: Field::Absent,)*
                }
            }

            /// The resource this annotation is attached to
            pub fn with_annotated(mut self, annotated: impl Into<Field<EntityRef>>) -> Self {
                self.annotated = annotated.into();
                self
            }

            pub fn annotated(&self) -> &Field<EntityRef> {
                &self.annotated
            }
        }
    };
}

annotation!(
    /// A bookmark left in a resource
    BookmarkAnnotation { bookmark_notes: String }
);

annotation!(
    /// A highlighted text span
    HighlightAnnotation {
        selection: TextPositionSelector,
        selection_text: String,
    }
);

annotation!(
    /// A resource shared with other agents
    SharedAnnotation { with_agents: Vec<EntityRef> }
);

annotation!(
    /// Free-form tags applied to a resource
    TagAnnotation { tags: Vec<String> }
);

impl BookmarkAnnotation {
    pub fn with_bookmark_notes(mut self, notes: impl Into<Field<String>>) -> Self {
        self.bookmark_notes = notes.into();
        self
    }
}

impl HighlightAnnotation {
    pub fn with_selection(mut self, selection: impl Into<Field<TextPositionSelector>>) -> Self {
        self.selection = selection.into();
        self
    }

    pub fn with_selection_text(mut self, text: impl Into<Field<String>>) -> Self {
        self.selection_text = text.into();
        self
    }
}

impl SharedAnnotation {
    /// Agents the resource was shared with
    pub fn with_agents<I, R>(mut self, agents: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<EntityRef>,
    {
        self.with_agents = Field::Value(agents.into_iter().map(Into::into).collect());
        self
    }

    /// Explicitly record that nobody was named
    pub fn with_no_agents(mut self) -> Self {
        self.with_agents = Field::Null;
        self
    }
}

impl TagAnnotation {
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Field::Value(tags.into_iter().map(Into::into).collect());
        self
    }
}

impl_entity!(BookmarkAnnotation, HighlightAnnotation, SharedAnnotation, TagAnnotation);
