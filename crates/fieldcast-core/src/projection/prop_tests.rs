//! Property-based tests for the path accessor and batch invariants

use super::path::{self, FieldPath};
use super::pipeline::Projector;
use crate::types::{Document, SelectMode, SelectOptions, SelectSpec};
use proptest::prelude::*;
use serde_json::Value;

fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn arb_path() -> impl Strategy<Value = FieldPath> {
    prop::collection::vec(arb_segment(), 1..4)
        .prop_map(|segments| FieldPath::parse(&segments.join(".")))
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_document() -> impl Strategy<Value = Document> {
    prop::collection::vec((arb_path(), arb_value()), 0..6).prop_map(|entries| {
        let mut doc = Document::new();
        for (p, v) in entries {
            path::set(&mut doc, &p, v);
        }
        doc
    })
}

proptest! {
    #[test]
    fn set_then_get_roundtrip(mut doc in arb_document(), p in arb_path(), v in arb_value()) {
        path::set(&mut doc, &p, v.clone());
        prop_assert_eq!(path::get(&doc, &p), Some(&v));
    }

    #[test]
    fn delete_is_idempotent(mut doc in arb_document(), p in arb_path()) {
        path::delete(&mut doc, &p);
        let once = doc.clone();
        path::delete(&mut doc, &p);
        prop_assert_eq!(doc, once);
    }

    #[test]
    fn get_after_delete_is_absent(mut doc in arb_document(), p in arb_path()) {
        path::delete(&mut doc, &p);
        prop_assert_eq!(path::get(&doc, &p), None);
    }

    #[test]
    fn batch_count_matches_input_without_split(
        records in prop::collection::vec(arb_document(), 0..8),
        fields in prop::collection::vec(arb_segment(), 0..4),
    ) {
        let spec = SelectSpec {
            mode: SelectMode::Include { fields },
            options: SelectOptions::default(),
        };
        let output = Projector::new(&spec).project_batch(&records);
        prop_assert_eq!(output.len(), records.len());
        for (i, record) in output.iter().enumerate() {
            prop_assert_eq!(record.source_index, i);
        }
    }
}
