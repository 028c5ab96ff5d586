//! rulelint - Front matter validator for Cursor rule files
//!
//! Main entry point for the CLI.
//!
//! # Execution Flow
//!
//! 1. Parse CLI flags into a [`ValidatorConfig`]
//! 2. Initialize logging (stderr, plus optional rolling file)
//! 3. Discover and validate every rule file, in sorted order
//! 4. Print the report on stdout
//! 5. Exit 0 if no errors were recorded, 1 otherwise
//!
//! Warnings (empty body, and with `--yaml-check` a header that is not strict YAML) never change
//! the exit status.

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use rulelint::config::{DEFAULT_EXTENSION, DEFAULT_RULES_DIR};
use rulelint::{APP_NAME, RuleValidator, VERSION, ValidatorConfig};
use std::process::ExitCode;

/// Validate the front matter of rule files.
///
/// Each rule file must start with a `---` block holding a non-empty `description`, a boolean
/// `alwaysApply`, and optionally a `globs` list.
#[derive(Parser, Debug)]
#[command(name = "rulelint", version, about)]
struct Cli {
    /// Directory searched recursively for rule files
    #[arg(default_value = DEFAULT_RULES_DIR)]
    rules_dir: Utf8PathBuf,

    /// Rule file extension
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Also warn about header blocks that are not strict YAML
    #[arg(long)]
    yaml_check: bool,

    /// Enable debug diagnostics on stderr
    #[arg(long)]
    debug: bool,

    /// Also write diagnostics to a daily rotating log file in this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<Utf8PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _guard = rulelint::logging::setup_logging(cli.log_dir.as_deref(), APP_NAME, cli.debug)?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config = ValidatorConfig::new(&cli.rules_dir)
        .with_extension(&cli.extension)
        .with_yaml_check(cli.yaml_check);

    let report = RuleValidator::new(config).validate_all();

    let stdout = std::io::stdout();
    rulelint::report::write_full_report(&mut stdout.lock(), &report)?;

    Ok(ExitCode::from(report.exit_code()))
}
