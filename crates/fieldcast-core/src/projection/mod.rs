//! Record-field projection engine
//!
//! This module applies a configured select spec to batches of nested
//! documents, using dotted field paths to locate values and a two-stage
//! post-processing pass for pruning and splitting.
//!
//! # Module Organization
//!
//! - [`path`] - dot-notation get/set/delete over nested documents
//! - [`modes`] - the include/exclude/rename/manual transforms
//! - [`clean`] - empty-field pruning
//! - [`split`] - array and delimited-string record splitting
//! - [`pipeline`] - the per-batch [`Projector`] tying the stages together

pub mod clean;
pub mod modes;
pub mod path;
pub mod pipeline;
pub mod split;

#[cfg(test)]
mod prop_tests;

pub use path::FieldPath;
pub use pipeline::Projector;
