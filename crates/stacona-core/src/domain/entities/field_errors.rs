//! Per-field validation messages and the merge rule that combines them.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::value_objects::Field;

/// Mapping from form field to an ordered list of violation messages.
///
/// Values are `Vec<String>` by construction, so a merge can never meet a
/// non-sequence value. A field that maps to an empty list has no error;
/// [`is_empty`](Self::is_empty) looks at the lists, not at key presence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrorSet {
    entries: BTreeMap<Field, Vec<String>>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message to a field, keeping earlier messages first.
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.entries.entry(field).or_default().push(message.into());
    }

    /// Append several messages to a field in iteration order.
    ///
    /// The key is recorded even when `messages` is empty.
    pub fn extend<I, S>(&mut self, field: Field, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(field)
            .or_default()
            .extend(messages.into_iter().map(Into::into));
    }

    /// Messages recorded for `field`, empty if none.
    pub fn get(&self, field: Field) -> &[String] {
        self.entries
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_errors(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }

    /// `true` iff every field maps to an empty list.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }

    /// Total number of messages across all fields.
    pub fn error_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Fields that carry at least one message, in rendering order.
    pub fn failed_fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| *field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.entries
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    /// Union of keys; for each key, `self`'s messages then `other`'s.
    pub fn merge(mut self, other: FieldErrorSet) -> Self {
        for (field, messages) in other.entries {
            self.entries.entry(field).or_default().extend(messages);
        }
        self
    }
}

/// Combine validator output with uniqueness-check output.
///
/// Validator messages come first for every field, then the uniqueness
/// messages, each in their source order.
pub fn aggregate(validator_errors: FieldErrorSet, uniqueness_errors: FieldErrorSet) -> FieldErrorSet {
    validator_errors.merge(uniqueness_errors)
}

/// Renders as `{"usernameErrors": [...], "emailErrors": [...], "passwordErrors": [...]}`
/// with every field present.
impl Serialize for FieldErrorSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for field in Field::ALL {
            map.serialize_entry(field.response_key(), self.get(field))?;
        }
        map.end()
    }
}
