use crate::value::Value;
use std::collections::BTreeMap;

///
/// FieldPresence
///
/// Result of attempting to read a field from a record during predicate
/// evaluation. This distinguishes between a missing field and a
/// present field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence {
    /// Field exists and has a value (including `Value::Null`).
    Present(Value),

    /// Field is not present on the record.
    Missing,
}

///
/// Record
///
/// Abstraction over a record-like value that can expose fields by name.
/// This decouples predicate evaluation from concrete subject types.
///

pub trait Record {
    fn field(&self, name: &str) -> FieldPresence;
}

///
/// Stock `Record` implementation for a field map, the simplest row shape
/// callers can hand to `eval`.
///

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence {
        match self.get(name) {
            Some(value) => FieldPresence::Present(value.clone()),
            None => FieldPresence::Missing,
        }
    }
}
