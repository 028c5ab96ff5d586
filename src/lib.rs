// rulelint - Front matter validator for Cursor rule files
//
// This is the library crate containing discovery, parsing, validation and reporting.
// The binary crate (main.rs) provides the CLI entry point.

pub mod config;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ValidatorConfig;
pub use models::{FileOutcome, Frontmatter, Stats, ValidationReport};
pub use services::{FrontmatterParser, HeaderError, RuleValidator};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
