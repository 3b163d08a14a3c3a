use crate::value::Value;
use std::collections::BTreeMap;

///
/// FieldType
///
/// Scalar classification used by predicate validation.
/// This is deliberately smaller than a full schema/type system
/// and exists only to support:
/// - literal compatibility checks
/// - operator validity (membership, substring)
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldType {
    Bool,
    Int,
    Text,
    List(Box<Self>),
}

impl FieldType {
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Element type when this field is a list.
    #[must_use]
    pub const fn element(&self) -> Option<&Self> {
        match self {
            Self::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Check whether a literal value inhabits this field type.
    /// `Value::Null` inhabits every field type (a present, null field).
    #[must_use]
    pub fn matches_value(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (Self::Bool, Value::Bool(_)) | (Self::Int, Value::Int(_)) | (Self::Text, Value::Text(_)) => true,
            (Self::List(elem), Value::List(items)) => {
                items.iter().all(|item| elem.matches_value(item))
            }
            _ => false,
        }
    }
}

///
/// RecordSchema
///
/// Named, typed shape of the records a predicate is meant to run against.
/// Validation checks atoms against this shape so that type mismatches
/// surface at construction time, never during evaluation.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RecordSchema {
    fields: BTreeMap<String, FieldType>,
}

impl RecordSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldType> {
        self.fields.get(name)
    }
}
