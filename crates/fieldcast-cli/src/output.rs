//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, NDJSON, human-readable), with a dedicated
//! path for projected record batches.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use fieldcast_core::OutputRecord;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};
use tracing::debug;

/// Trait for formatting output values
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a batch of projected records
    fn format_records(&self, records: &[OutputRecord], annotate_source: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::Ndjson => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_records(&self, records: &[OutputRecord], annotate_source: bool) -> Result<String> {
        let values: Vec<Value> = records
            .iter()
            .map(|record| {
                if annotate_source {
                    serde_json::to_value(record)
                } else {
                    Ok(Value::Object(record.json.clone()))
                }
            })
            .collect::<std::result::Result<_, _>>()?;

        match self {
            OutputFormat::Ndjson => {
                let lines: Vec<String> = values
                    .iter()
                    .map(serde_json::to_string)
                    .collect::<std::result::Result<_, _>>()?;
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string(&values)?),
            OutputFormat::JsonPretty | OutputFormat::Human => {
                Ok(serde_json::to_string_pretty(&values)?)
            }
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer targeting stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[allow(dead_code)]
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message (human format only)
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message (human format only)
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a serializable value in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        self.writeln(&formatted)
    }

    /// Write a batch of projected records in the configured format
    pub fn records(&mut self, records: &[OutputRecord], annotate_source: bool) -> Result<()> {
        let formatted = self.format.format_records(records, annotate_source)?;
        self.writeln(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value, source_index: usize) -> OutputRecord {
        OutputRecord {
            json: value.as_object().cloned().unwrap(),
            source_index,
        }
    }

    #[test]
    fn test_format_records_ndjson() {
        let records = vec![record(json!({"a": 1}), 0), record(json!({"b": 2}), 1)];
        let formatted = OutputFormat::Ndjson.format_records(&records, false).unwrap();
        assert_eq!(formatted, "{\"a\":1}\n{\"b\":2}");
    }

    #[test]
    fn test_format_records_json_annotated() {
        let records = vec![record(json!({"a": 1}), 4)];
        let formatted = OutputFormat::Json.format_records(&records, true).unwrap();
        let parsed: Value = serde_json::from_str(&formatted).unwrap();
        assert_eq!(parsed, json!([{"json": {"a": 1}, "source_index": 4}]));
    }

    #[test]
    fn test_quiet_suppresses_info() {
        let mut writer =
            OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(Vec::new()));
        writer.info("should not panic").unwrap();
    }

    #[test]
    fn test_records_empty_batch() {
        let formatted = OutputFormat::Json
            .format_records(&Vec::<OutputRecord>::new(), false)
            .unwrap();
        assert_eq!(formatted, "[]");
    }
}
