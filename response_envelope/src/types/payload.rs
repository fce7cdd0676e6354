use serde::{Serialize, Serializer};
use serde_json::Value;

/// Data carried by an envelope.
///
/// Only [`Payload::Sequence`] can be windowed; the other variants are passed
/// through untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload<T> {
    Sequence(Vec<T>),
    Single(T),
    Empty,
}

impl<T> Payload<T> {
    /// Item count as reported on construction: the sequence length, `1` for
    /// a single value and `0` when there is no data.
    pub fn len(&self) -> usize {
        match self {
            Payload::Sequence(items) => items.len(),
            Payload::Single(_) => 1,
            Payload::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Payload::Sequence(_))
    }

    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Payload::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_single(&self) -> Option<&T> {
        match self {
            Payload::Single(value) => Some(value),
            _ => None,
        }
    }
}

impl Payload<Value> {
    /// Maps arbitrary JSON onto a payload: arrays become sequences of their
    /// elements, `null` is empty and every other value is a single item,
    /// including `0`, `false` and `""`.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(items) => Payload::Sequence(items),
            Value::Null => Payload::Empty,
            other => Payload::Single(other),
        }
    }
}

impl From<Value> for Payload<Value> {
    fn from(value: Value) -> Self {
        Payload::from_json(value)
    }
}

impl<T> From<Vec<T>> for Payload<T> {
    fn from(items: Vec<T>) -> Self {
        Payload::Sequence(items)
    }
}

impl<T> From<Option<T>> for Payload<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Payload::Single(value),
            None => Payload::Empty,
        }
    }
}

impl<T: Serialize> Serialize for Payload<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Sequence(items) => items.serialize(serializer),
            Payload::Single(value) => value.serialize(serializer),
            Payload::Empty => serializer.serialize_none(),
        }
    }
}
