use super::Frontmatter;
use camino::Utf8PathBuf;

/// Counters for a single validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub total_files: usize,
    pub valid_files: usize,
    pub invalid_files: usize,
    pub files_without_description: usize,
    pub files_without_always_apply: usize,
    pub files_with_invalid_yaml: usize,
}

/// Result of validating one rule file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Path relative to the rules directory
    pub relative_path: Utf8PathBuf,
    pub is_valid: bool,
    pub frontmatter: Frontmatter,
}

/// Everything a validation pass produces.
///
/// Errors and warnings keep insertion order and are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub stats: Stats,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub files: Vec<FileOutcome>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("error recorded: {}", message);
        self.errors.push(message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("warning recorded: {}", message);
        self.warnings.push(message);
    }

    /// The run passes when no error was recorded. Warnings are allowed.
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status for this run: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_succeeds() {
        let report = ValidationReport::new();
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_warnings_do_not_fail_run() {
        let mut report = ValidationReport::new();
        report.warning("empty body");
        assert!(report.is_success());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_errors_fail_run_and_keep_order() {
        let mut report = ValidationReport::new();
        report.error("first");
        report.error("second");
        report.error("first");
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.errors, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_exit_code_is_process_status_byte() {
        let mut report = ValidationReport::new();
        report.warning("w");
        let status: u8 = report.exit_code();
        assert_eq!(status, 0);

        report.error("e");
        let status: u8 = report.exit_code();
        assert_eq!(status, 1);
    }
}
