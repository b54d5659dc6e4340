//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Fieldcast CLI - record-field projection over JSON batches
///
/// A command-line tool for including, excluding, and renaming fields of
/// nested JSON records, with optional empty-field pruning and record
/// splitting.
#[derive(Parser, Debug)]
#[command(
    name = "fieldcast",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FIELDCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply a select spec to a batch of records
    Transform(TransformArgs),

    /// Check that a select spec file parses
    Validate(ValidateArgs),

    /// List the field names present in a batch of records
    Fields(FieldsArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the transform command
#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// Records file (JSON array, single object, or NDJSON); '-' reads stdin
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Path to the select spec file (JSON or YAML)
    #[arg(short, long, value_name = "SPEC")]
    pub spec: PathBuf,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,

    /// Wrap each output record with the index of its source record
    #[arg(long)]
    pub annotate_source: bool,
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the select spec file (JSON or YAML)
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Show the parsed spec
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the fields command
#[derive(Parser, Debug)]
pub struct FieldsArgs {
    /// Records file (JSON array, single object, or NDJSON); '-' reads stdin
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Only list first-level fields (ignores nested objects)
    #[arg(long)]
    pub top_level_only: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON array output
    Json,
    /// Pretty-printed JSON array output
    JsonPretty,
    /// Newline-delimited JSON, one record per line
    Ndjson,
}

impl OutputFormat {
    /// Parse a configuration-file format string, falling back to human
    pub fn from_config_str(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            "json-pretty" => Self::JsonPretty,
            "ndjson" => Self::Ndjson,
            _ => Self::Human,
        }
    }
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// Resolve the output format from the flag or the config default
    pub fn output_format(&self, config_default: &str) -> OutputFormat {
        self.output
            .unwrap_or_else(|| OutputFormat::from_config_str(config_default))
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["fieldcast", "-vv", "validate", "spec.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let quiet = Cli::parse_from(["fieldcast", "--quiet", "validate", "spec.json"]);
        assert_eq!(quiet.verbosity_level(), 0);
    }

    #[test]
    fn test_output_format_resolution() {
        let cli = Cli::parse_from(["fieldcast", "validate", "spec.json"]);
        assert_eq!(cli.output_format("ndjson"), OutputFormat::Ndjson);
        assert_eq!(cli.output_format("bogus"), OutputFormat::Human);

        let cli = Cli::parse_from(["fieldcast", "-o", "json", "validate", "spec.json"]);
        assert_eq!(cli.output_format("ndjson"), OutputFormat::Json);
    }

    #[test]
    fn test_transform_args() {
        let cli = Cli::parse_from([
            "fieldcast",
            "transform",
            "records.json",
            "--spec",
            "spec.yaml",
            "--annotate-source",
        ]);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.records, PathBuf::from("records.json"));
                assert_eq!(args.spec, PathBuf::from("spec.yaml"));
                assert!(args.annotate_source);
                assert!(args.output_file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
