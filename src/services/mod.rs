//! Services module - Rule file discovery, header parsing and validation.
//!
//! # Components
//!
//! - [`discover_rule_files`]: Recursive, sorted discovery of rule files under a directory
//! - [`FrontmatterParser`]: Splits a rule file into header and body and extracts
//!   `description`, `alwaysApply` and `globs` with pre-compiled regexes
//! - [`RuleValidator`]: Applies the schema to each file and accumulates a
//!   [`ValidationReport`](crate::models::ValidationReport)
//!
//! None of these print anything. Output is the job of [`crate::report`].
//!
//! # Usage Example
//!
//! ```ignore
//! use rulelint::{RuleValidator, ValidatorConfig};
//!
//! let validator = RuleValidator::new(ValidatorConfig::new(".cursor/rules"));
//! let report = validator.validate_all();
//! std::process::exit(i32::from(report.exit_code()));
//! ```

pub mod discovery;
pub mod frontmatter;
pub mod validator;

pub use discovery::{DiscoveryError, discover_rule_files};
pub use frontmatter::{FrontmatterParser, HeaderError, ParsedRule};
pub use validator::RuleValidator;
