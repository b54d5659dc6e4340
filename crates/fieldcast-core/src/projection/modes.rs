//! The per-mode record transforms
//!
//! Every mode builds a fresh output document; input records are never
//! mutated. Empty field names are skipped without error throughout.

use super::path::{self, FieldPath};
use crate::types::{Document, FieldMapping};

/// Build a new document containing only the listed fields, in list order.
///
/// An absent source value emits no key, but the parent objects of a
/// multi-segment destination are still created.
pub fn include(source: &Document, fields: &[String], dot_notation: bool) -> Document {
    let mut output = Document::new();
    for field in fields {
        if field.is_empty() {
            continue;
        }
        let field_path = FieldPath::for_name(field, dot_notation);
        match path::get(source, &field_path) {
            Some(value) => path::set(&mut output, &field_path, value.clone()),
            None => path::ensure_parents(&mut output, &field_path),
        }
    }
    output
}

/// Deep-copy the source and remove the listed fields from the copy.
pub fn exclude(source: &Document, fields: &[String], dot_notation: bool) -> Document {
    let mut output = source.clone();
    for field in fields {
        if field.is_empty() {
            continue;
        }
        path::delete(&mut output, &FieldPath::for_name(field, dot_notation));
    }
    output
}

/// Deep-copy the source and move each mapped field to its new name.
///
/// Values are read from the original record; deletes and writes land on
/// the copy, so later mappings observe the effects of earlier ones.
/// Mappings with an empty source or new name are skipped.
pub fn rename(source: &Document, mappings: &[FieldMapping], dot_notation: bool) -> Document {
    let mut output = source.clone();
    for mapping in mappings {
        if mapping.source.is_empty() || mapping.new_name.is_empty() {
            continue;
        }
        let source_path = FieldPath::for_name(&mapping.source, dot_notation);
        let target_path = FieldPath::for_name(&mapping.new_name, dot_notation);

        let value = path::get(source, &source_path).cloned();
        path::delete(&mut output, &source_path);
        match value {
            Some(value) => path::set(&mut output, &target_path, value),
            None => path::ensure_parents(&mut output, &target_path),
        }
    }
    output
}

/// Split a comma-separated manual field list into trimmed, non-empty names.
pub fn parse_manual_fields(fields: &str) -> Vec<String> {
    fields
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
