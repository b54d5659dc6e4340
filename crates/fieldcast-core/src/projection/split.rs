//! Record splitting on array or delimited-string fields
//!
//! The first array-valued field, or the first string field containing the
//! separator, supplies the split pieces; everything else in the record is
//! discarded. The scan stops at the first qualifying value even when it
//! yields no pieces.

use crate::types::Document;
use serde_json::Value;

/// Expand `\n` and `\t` escape sequences in a configured separator.
///
/// The default raw separator is the two-character string `\n`, which
/// expands to a literal newline.
pub fn unescape_separator(separator: &str) -> String {
    separator.replace("\\n", "\n").replace("\\t", "\t")
}

/// The pieces a record splits into, if it has a splittable field.
///
/// Returns `None` when no value qualifies; returns `Some` with possibly
/// zero pieces when the first qualifying value was an empty array or a
/// string whose pieces all trimmed away. Callers emit the original record
/// in both of those cases.
pub fn split_values(doc: &Document, separator: &str) -> Option<Vec<Value>> {
    for value in doc.values() {
        match value {
            Value::Array(items) => return Some(items.clone()),
            Value::String(s) if s.contains(separator) => {
                return Some(
                    s.split(separator)
                        .map(str::trim)
                        .filter(|piece| !piece.is_empty())
                        .map(|piece| Value::String(piece.to_string()))
                        .collect(),
                );
            }
            _ => {}
        }
    }
    None
}
