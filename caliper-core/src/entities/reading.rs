//! Reading resources

use serde::Serialize;

use super::fields::{impl_digital_resource, impl_entity};
use super::{DigitalResourceBase, EntityBase, EntityType};
use crate::field::Field;

/// An EPUB book
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EPubVolume {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: DigitalResourceBase,
}

impl EPubVolume {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::EPubVolume),
            resource: DigitalResourceBase::default(),
        }
    }
}

/// A location inside a larger resource, such as a chapter of an EPUB
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: DigitalResourceBase,
    #[serde(skip_serializing_if = "Field::is_absent")]
    index: Field<u32>,
}

impl Frame {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::Frame),
            resource: DigitalResourceBase::default(),
            index: Field::Absent,
        }
    }

    /// Position of this frame within its parent
    pub fn with_index(mut self, index: impl Into<Field<u32>>) -> Self {
        self.index = index.into();
        self
    }
}

/// A web page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(flatten)]
    base: EntityBase,
    #[serde(flatten)]
    resource: DigitalResourceBase,
}

impl WebPage {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: EntityBase::new(id, EntityType::WebPage),
            resource: DigitalResourceBase::default(),
        }
    }
}

impl_entity!(EPubVolume, Frame, WebPage);
impl_digital_resource!(EPubVolume, Frame, WebPage);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DigitalResource, EntityFields};

    #[test]
    fn frame_is_part_of_volume() {
        let volume = EPubVolume::new("https://example.edu/book/34843").with_version("2nd ed.");
        let frame = Frame::new("https://example.edu/book/34843#epubcfi(/4/3/4)")
            .with_name("The Stamp Act Crisis")
            .with_index(4)
            .with_is_part_of(volume);

        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["index"], 4);
        assert_eq!(json["isPartOf"]["@id"], "https://example.edu/book/34843");
        assert_eq!(json["isPartOf"]["version"], "2nd ed.");
    }

    #[test]
    fn keywords_and_object_type_are_arrays() {
        let page = WebPage::new("https://example.edu/page/1")
            .with_keywords(["revolution", "1765"])
            .with_object_type(["Chapter"]);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["keywords"], serde_json::json!(["revolution", "1765"]));
        assert_eq!(json["objectType"], serde_json::json!(["Chapter"]));
    }
}
