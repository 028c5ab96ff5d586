//! Data models for rulelint.
//!
//! - [`Frontmatter`]: Fields extracted from a rule file's header block
//! - [`FileOutcome`]: Validity and parsed header of a single validated file
//! - [`Stats`]: Run-scoped counters
//! - [`ValidationReport`]: The accumulator returned by a validation pass (stats, errors,
//!   warnings and per-file outcomes)
//!
//! Nothing here outlives a single invocation. The validator owns the report while it walks
//! the files and hands it to the report printer when done.

pub mod frontmatter;
pub mod report;

pub use frontmatter::Frontmatter;
pub use report::{FileOutcome, Stats, ValidationReport};
