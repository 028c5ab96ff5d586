use super::discovery::discover_rule_files;
use super::frontmatter::FrontmatterParser;
use crate::config::ValidatorConfig;
use crate::models::{FileOutcome, Frontmatter, ValidationReport};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;

/// Header block as seen by a real YAML parser. Only used to flag headers that the
/// lightweight field extractor accepts but YAML tooling would reject.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct YamlHeader(IndexMap<String, serde_yaml_ng::Value>);

/// Validates rule files against the header schema.
///
/// The validator itself holds no run state. Every call to [`validate_all`](Self::validate_all)
/// starts from an empty [`ValidationReport`] and threads it through the files in order.
pub struct RuleValidator {
    config: ValidatorConfig,
    parser: FrontmatterParser,
}

impl RuleValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self {
            config,
            parser: FrontmatterParser::new(),
        }
    }

    /// Discover and validate every rule file under the configured directory.
    ///
    /// A missing or empty directory is recorded as a single error; no file is validated.
    pub fn validate_all(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        let root = self.config.rules_dir();

        let files = match discover_rule_files(root, self.config.extension()) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!("Discovery failed: {}", e);
                report.error(format!("❌ {}", e));
                return report;
            }
        };

        tracing::info!("Validating {} rule files in {}", files.len(), root);

        for path in &files {
            let (is_valid, frontmatter) = self.validate_file(path, &mut report);
            let relative_path = path.strip_prefix(root).unwrap_or(path).to_path_buf();
            report.files.push(FileOutcome {
                relative_path,
                is_valid,
                frontmatter,
            });
        }

        tracing::info!(
            "Validation finished: total={}, valid={}, invalid={}, errors={}, warnings={}",
            report.stats.total_files,
            report.stats.valid_files,
            report.stats.invalid_files,
            report.errors.len(),
            report.warnings.len()
        );

        report
    }

    /// Validate one rule file, recording errors, warnings and counters into `report`.
    ///
    /// Returns the validity flag and whatever header fields could be read. Files that cannot
    /// be read or have no usable header return an empty [`Frontmatter`].
    pub fn validate_file(
        &self,
        path: &Utf8Path,
        report: &mut ValidationReport,
    ) -> (bool, Frontmatter) {
        report.stats.total_files += 1;

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                report.error(format!("❌ {}: cannot read file - {}", path, e));
                report.stats.invalid_files += 1;
                return (false, Frontmatter::default());
            }
        };

        let parsed = match self.parser.parse(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                report.error(format!("❌ {}: {}", path, e));
                report.stats.invalid_files += 1;
                return (false, Frontmatter::default());
            }
        };

        let frontmatter = parsed.frontmatter;
        let mut has_errors = false;

        match frontmatter.description.as_deref() {
            None => {
                report.error(format!(
                    "❌ {}: missing 'description' property (required)",
                    path
                ));
                report.stats.files_without_description += 1;
                has_errors = true;
            }
            // Blank descriptions do not count towards files_without_description.
            Some(description) if description.trim().is_empty() => {
                report.error(format!("❌ {}: 'description' property is empty", path));
                has_errors = true;
            }
            Some(_) => {}
        }

        if frontmatter.always_apply.is_none() {
            report.error(format!(
                "❌ {}: missing 'alwaysApply' property (required)",
                path
            ));
            report.stats.files_without_always_apply += 1;
            has_errors = true;
        }

        if parsed.body.trim().is_empty() {
            report.warning(format!("⚠️  {}: no content after the header", path));
        }

        if self.config.yaml_check() && !parsed.header.trim().is_empty() {
            match serde_yaml_ng::from_str::<YamlHeader>(parsed.header) {
                Ok(YamlHeader(fields)) => {
                    tracing::debug!("{}: header parses as YAML with {} keys", path, fields.len());
                }
                Err(e) => {
                    report.warning(format!("⚠️  {}: header is not valid YAML - {}", path, e));
                    report.stats.files_with_invalid_yaml += 1;
                }
            }
        }

        if has_errors {
            report.stats.invalid_files += 1;
            return (false, frontmatter);
        }

        report.stats.valid_files += 1;
        (true, frontmatter)
    }
}
