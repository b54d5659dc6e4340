//! Fieldcast CLI - record-field projection over JSON batches
//!
//! This is the main entry point for the fieldcast CLI application,
//! providing commands for transforming record batches with a select spec,
//! validating specs, and listing available fields.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LogFormat, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration loads before logging so its settings can seed the
    // logging defaults
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    };

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli, config) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );
            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Create output writer
    let mut output = OutputWriter::new(
        cli.output_format(&config.output.format),
        cli.use_color() && config.output.color,
        cli.quiet,
    );

    tracing::info!(command = ?cli.command, verbosity = cli.verbosity_level(), "Executing command");

    // Handle the subcommand
    match cli.command {
        Commands::Transform(args) => handlers::handle_transform(args, &mut output),
        Commands::Validate(args) => handlers::handle_validate(args, &mut output),
        Commands::Fields(args) => handlers::handle_fields(args, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Resolve the logging configuration from flags, config file, and defaults.
///
/// Config-file settings apply only where no flag spoke: the level when no
/// -v was given, the format below the -vvv full-format switch. Environment
/// overrides layer on top in [`init_logging`].
fn logging_config(cli: &Cli, config: &Config) -> LoggingConfig {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());

    if cli.verbose == 0 {
        if let Some(level) = &config.logging.level {
            logging_config.level = level.clone();
        }
    }
    if cli.verbose < 3 {
        if let Some(format) = config.logging.format.as_deref().and_then(LogFormat::parse) {
            logging_config.format = format;
        }
    }

    logging_config
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = logging_config(cli, config);

    // Apply environment overrides
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
