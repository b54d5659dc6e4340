//! Empty-field pruning
//!
//! A value is empty iff it is null or the empty string. Numbers, booleans,
//! and arrays never count, so `0`, `false`, and `[]` all survive pruning.

use crate::types::Document;
use serde_json::Value;

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Rebuild `doc` without empty leaves.
///
/// Nested objects are pruned recursively and dropped from their parent
/// once nothing is left in them. Arrays pass through untouched: they are
/// leaves for emptiness purposes.
pub fn prune_empty(doc: &Document) -> Document {
    let mut cleaned = Document::new();
    for (key, value) in doc {
        if is_empty(value) {
            continue;
        }
        match value {
            Value::Object(nested) => {
                let nested = prune_empty(nested);
                if !nested.is_empty() {
                    cleaned.insert(key.clone(), Value::Object(nested));
                }
            }
            _ => {
                cleaned.insert(key.clone(), value.clone());
            }
        }
    }
    cleaned
}
