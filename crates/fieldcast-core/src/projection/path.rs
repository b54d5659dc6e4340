//! Dot-notation field path resolution over nested documents
//!
//! Paths are permissive: missing keys and non-object intermediates are
//! absence rather than errors, and empty segments pass through as literal
//! zero-length keys.

use crate::types::Document;
use serde_json::{Map, Value};

/// A parsed field path: one or more key segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Split a dotted field name into segments
    pub fn parse(name: &str) -> Self {
        Self {
            segments: name.split('.').map(str::to_string).collect(),
        }
    }

    /// Treat the whole name as one key, dots included
    pub fn single(name: &str) -> Self {
        Self {
            segments: vec![name.to_string()],
        }
    }

    /// Parse according to the dot-notation option
    pub fn for_name(name: &str, dot_notation: bool) -> Self {
        if dot_notation {
            Self::parse(name)
        } else {
            Self::single(name)
        }
    }

    /// The key segments, head to leaf. Never empty.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Resolve the value at `path`, if the full chain of keys exists.
///
/// Descending into null or any non-object value short-circuits to `None`.
pub fn get<'a>(doc: &'a Document, path: &FieldPath) -> Option<&'a Value> {
    // Single-segment fast path: plain key access
    if let [key] = path.segments() {
        return doc.get(key);
    }

    let (first, rest) = path.segments().split_first()?;
    let mut current = doc.get(first)?;
    for segment in rest {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Assign `value` at `path`, mutating `doc` in place.
///
/// Missing intermediates are created as empty objects; a non-object value
/// sitting at an intermediate key is overwritten with an empty object.
pub fn set(doc: &mut Document, path: &FieldPath, value: Value) {
    if let [key] = path.segments() {
        doc.insert(key.clone(), value);
        return;
    }

    let (last, parents) = match path.segments().split_last() {
        Some(pair) => pair,
        None => return,
    };
    parent_object(doc, parents).insert(last.clone(), value);
}

/// Create the intermediate objects of `path` without writing a leaf value.
///
/// This is what `set` leaves behind when the value to write turns out to
/// be absent at the source.
pub fn ensure_parents(doc: &mut Document, path: &FieldPath) {
    if let Some((_, parents)) = path.segments().split_last() {
        parent_object(doc, parents);
    }
}

/// Remove the key at `path` from `doc`.
///
/// Descends through existing object intermediates only; if any is missing
/// or not an object the call is a silent no-op. Delete never creates
/// structure.
pub fn delete(doc: &mut Document, path: &FieldPath) {
    if let [key] = path.segments() {
        doc.remove(key);
        return;
    }

    let (last, parents) = match path.segments().split_last() {
        Some(pair) => pair,
        None => return,
    };
    let mut current = doc;
    for segment in parents {
        current = match current.get_mut(segment) {
            Some(Value::Object(map)) => map,
            _ => return,
        };
    }
    current.remove(last);
}

/// Walk (and build) the chain of intermediate objects for a write.
fn parent_object<'a>(doc: &'a mut Document, parents: &[String]) -> &'a mut Document {
    let mut current = doc;
    for segment in parents {
        let slot = current
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        current = slot.as_object_mut().unwrap();
    }
    current
}
