//! Tri-state attribute values
//!
//! Caliper records have many optional attributes. An attribute that was never
//! set must be left out of the JSON entirely, while one that the caller set to
//! null must be written as `null`. [`Field`] keeps those two cases apart.
//!
//! Structs holding fields pair them with
//! `#[serde(default, skip_serializing_if = "Field::is_absent")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional attribute that remembers whether it was ever set
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Never set; omitted from output
    Absent,
    /// Explicitly set to null; written as `null`
    Null,
    /// Set to a value
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    /// True when the field was never set
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True when the field was explicitly set to null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when the field was set, to either null or a value
    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    /// The current value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Mutable access to the current value, if any
    pub fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Take the field, leaving it absent
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Reset to the never-set state
    pub fn clear(&mut self) {
        *self = Self::Absent;
    }

    /// Map the contained value, keeping absent/null as they are
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Value(v) => Field::Value(f(v)),
        }
    }

    /// Collapse into an `Option`, losing the absent/null distinction
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => v.serialize(serializer),
            // Absent fields are skipped by their container; if one slips
            // through it is written the same as null.
            Self::Null | Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
