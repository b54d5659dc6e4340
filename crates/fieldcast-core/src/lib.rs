//! Fieldcast Core - record-field projection engine
//!
//! This crate transforms batches of nested key/value records: fields are
//! included, excluded, or renamed according to a configured mode, with
//! optional empty-field pruning and record splitting afterwards.
//!
//! # Main Components
//!
//! - **Error Handling**: boundary error types using `thiserror`
//! - **Core Types**: select specs, options, and output records
//! - **Projection Engine**: dot-notation path access, per-mode transforms,
//!   and the post-processing pipeline
//!
//! # Example
//!
//! ```
//! use fieldcast_core::{Projector, SelectMode, SelectOptions, SelectSpec};
//! use serde_json::json;
//!
//! let spec = SelectSpec {
//!     mode: SelectMode::Include {
//!         fields: vec!["name".to_string(), "contact.email".to_string()],
//!     },
//!     options: SelectOptions::default(),
//! };
//!
//! let record = json!({
//!     "name": "Ada",
//!     "age": 36,
//!     "contact": {"email": "ada@example.com", "phone": "555-0100"}
//! });
//! let records = vec![record.as_object().cloned().unwrap()];
//!
//! let output = Projector::new(&spec).project_batch(&records);
//! assert_eq!(output.len(), 1);
//! assert_eq!(output[0].json["name"], json!("Ada"));
//! assert_eq!(output[0].json["contact"], json!({"email": "ada@example.com"}));
//! ```

pub mod error;
pub mod projection;
pub mod types;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use projection::{FieldPath, Projector};
pub use types::{
    Document, FieldMapping, ManualAction, OutputRecord, SelectMode, SelectOptions, SelectSpec,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project a batch of records with a one-off [`Projector`].
pub fn project(records: &[Document], spec: &SelectSpec) -> Vec<OutputRecord> {
    Projector::new(spec).project_batch(records)
}
