//! Core types and data structures for the fieldcast projection engine
//!
//! This module defines the select spec read once per invocation, plus the
//! output record shape every projection produces.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record root: an ordered mapping from field names to JSON values.
///
/// Field order is load-bearing: include mode emits fields in configured
/// order, and split mode scans values in insertion order, so serde_json's
/// `preserve_order` feature is required.
pub type Document = Map<String, Value>;

/// How the configured fields are applied to each record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SelectMode {
    /// Only the listed fields appear in the output
    Include { fields: Vec<String> },

    /// The listed fields are removed from the output
    Exclude { fields: Vec<String> },

    /// Each listed source field is moved to its new name
    Rename { fields: Vec<FieldMapping> },

    /// Comma-separated field names, kept or removed per the action flag
    Manual {
        fields: String,
        #[serde(default)]
        action: ManualAction,
    },
}

/// A (source field, new name) pair for rename mode
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldMapping {
    /// The field to be renamed
    pub source: String,

    /// The new name for the field
    pub new_name: String,
}

/// Whether manual-mode fields are kept or removed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ManualAction {
    #[default]
    Include,
    Exclude,
}

/// Post-processing and path-resolution options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SelectOptions {
    /// Drop fields that are null or empty strings
    pub remove_empty: bool,

    /// Resolve dotted field names as nested paths (e.g. "user.name")
    pub dot_notation: bool,

    /// Split array values or delimited strings into separate output records
    pub split_to_items: bool,

    /// Separator for splitting string values; `\n` and `\t` escapes are
    /// expanded before use
    pub split_separator: String,

    /// Field name carrying each split piece in the output
    pub split_field_name: String,
}

impl Default for SelectOptions {
    fn default() -> Self {
        Self {
            remove_empty: false,
            dot_notation: true,
            split_to_items: false,
            split_separator: "\\n".to_string(),
            split_field_name: "value".to_string(),
        }
    }
}

/// A full per-invocation projection configuration
///
/// Read once per batch and treated as immutable for its duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectSpec {
    #[serde(flatten)]
    pub mode: SelectMode,

    #[serde(default)]
    pub options: SelectOptions,
}

impl SelectSpec {
    /// Parse a select spec from its JSON representation
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Spec {
            message: e.to_string(),
            source: Some(anyhow::Error::new(e)),
        })
    }
}

/// One projected record plus the index of the input record it derives from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputRecord {
    /// The projected document
    pub json: Document,

    /// Index of the source record in the input batch
    pub source_index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_from_json() {
        let spec = SelectSpec::from_json_str(
            r#"{"mode": "include", "fields": ["a", "b.c"], "options": {"remove_empty": true}}"#,
        )
        .unwrap();

        assert_eq!(
            spec.mode,
            SelectMode::Include {
                fields: vec!["a".to_string(), "b.c".to_string()]
            }
        );
        assert!(spec.options.remove_empty);
        assert!(spec.options.dot_notation);
        assert_eq!(spec.options.split_separator, "\\n");
    }

    #[test]
    fn test_spec_manual_action_default() {
        let spec =
            SelectSpec::from_json_str(r#"{"mode": "manual", "fields": "name, age"}"#).unwrap();
        match spec.mode {
            SelectMode::Manual { action, .. } => assert_eq!(action, ManualAction::Include),
            other => panic!("unexpected mode: {:?}", other),
        }
    }

    #[test]
    fn test_spec_rename_roundtrip() {
        let spec = SelectSpec {
            mode: SelectMode::Rename {
                fields: vec![FieldMapping {
                    source: "a".to_string(),
                    new_name: "x".to_string(),
                }],
            },
            options: SelectOptions::default(),
        };

        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["mode"], json!("rename"));
        let parsed: SelectSpec = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_spec_rejects_unknown_mode() {
        assert!(SelectSpec::from_json_str(r#"{"mode": "invert", "fields": []}"#).is_err());
    }
}
