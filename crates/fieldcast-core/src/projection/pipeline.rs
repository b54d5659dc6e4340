//! Batch projection pipeline
//!
//! Ties the stages together: the configured mode transform, then optional
//! empty pruning, then optional splitting. Each input record yields zero
//! or more output records carrying the index they derive from.

use super::{clean, modes, split};
use crate::types::{Document, ManualAction, OutputRecord, SelectMode, SelectOptions, SelectSpec};

/// Executes one select spec over a batch of records.
///
/// Construction resolves everything that is constant for the whole batch:
/// the parsed manual field list and the unescaped split separator. A
/// well-typed spec cannot fail mid-batch, so projection returns plain
/// values rather than Results.
#[derive(Debug, Clone)]
pub struct Projector {
    spec: SelectSpec,
    manual_fields: Vec<String>,
    separator: String,
}

impl Projector {
    /// Create a projector for one spec
    pub fn new(spec: &SelectSpec) -> Self {
        let manual_fields = match &spec.mode {
            SelectMode::Manual { fields, .. } => modes::parse_manual_fields(fields),
            _ => Vec::new(),
        };
        let separator = split::unescape_separator(&spec.options.split_separator);
        Self {
            spec: spec.clone(),
            manual_fields,
            separator,
        }
    }

    /// The options this projector runs with
    pub fn options(&self) -> &SelectOptions {
        &self.spec.options
    }

    /// Project every record in input order.
    ///
    /// The output is the concatenation of each record's outputs, so
    /// without splitting the count equals the input count.
    pub fn project_batch(&self, records: &[Document]) -> Vec<OutputRecord> {
        let mut output = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            output.extend(self.project_record(index, record));
        }
        log::debug!(
            "projected {} input records into {} output records",
            records.len(),
            output.len()
        );
        output
    }

    /// Project a single record, tagged with its batch index.
    pub fn project_record(&self, index: usize, record: &Document) -> Vec<OutputRecord> {
        let options = &self.spec.options;
        let mut json = self.apply_mode(record);

        if options.remove_empty {
            json = clean::prune_empty(&json);
        }

        if options.split_to_items {
            if let Some(pieces) = split::split_values(&json, &self.separator) {
                if !pieces.is_empty() {
                    log::trace!("record {} split into {} items", index, pieces.len());
                    return pieces
                        .into_iter()
                        .map(|piece| {
                            let mut json = Document::new();
                            json.insert(options.split_field_name.clone(), piece);
                            OutputRecord {
                                json,
                                source_index: index,
                            }
                        })
                        .collect();
                }
            }
        }

        vec![OutputRecord {
            json,
            source_index: index,
        }]
    }

    fn apply_mode(&self, record: &Document) -> Document {
        let dot_notation = self.spec.options.dot_notation;
        match &self.spec.mode {
            SelectMode::Include { fields } => modes::include(record, fields, dot_notation),
            SelectMode::Exclude { fields } => modes::exclude(record, fields, dot_notation),
            SelectMode::Rename { fields } => modes::rename(record, fields, dot_notation),
            SelectMode::Manual { action, .. } => match action {
                ManualAction::Include => modes::include(record, &self.manual_fields, dot_notation),
                ManualAction::Exclude => modes::exclude(record, &self.manual_fields, dot_notation),
            },
        }
    }
}
