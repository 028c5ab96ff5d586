use camino::{Utf8Path, Utf8PathBuf};

/// Default directory searched for rule files.
pub const DEFAULT_RULES_DIR: &str = ".cursor/rules";

/// Default rule file extension (without the leading dot).
pub const DEFAULT_EXTENSION: &str = "mdc";

/// Settings for a single validation run.
///
/// Built from CLI flags in the binary; tests construct it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    rules_dir: Utf8PathBuf,
    extension: String,
    yaml_check: bool,
}

impl ValidatorConfig {
    /// Create a config rooted at `rules_dir` with default extension and checks.
    pub fn new<P: AsRef<Utf8Path>>(rules_dir: P) -> Self {
        Self {
            rules_dir: rules_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Set the file extension to look for. A leading dot is ignored.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// Enable or disable the advisory YAML cross-check of header blocks (off by default).
    pub fn with_yaml_check(mut self, enabled: bool) -> Self {
        self.yaml_check = enabled;
        self
    }

    pub fn rules_dir(&self) -> &Utf8Path {
        &self.rules_dir
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn yaml_check(&self) -> bool {
        self.yaml_check
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            rules_dir: Utf8PathBuf::from(DEFAULT_RULES_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            yaml_check: false,
        }
    }
}
