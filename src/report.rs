//! Human-readable report output.
//!
//! Everything here writes to a caller-supplied [`Write`] so the binary can target stdout and
//! tests can capture into a `Vec<u8>`.

use crate::models::ValidationReport;
use anyhow::{Context, Result};
use std::io::Write;

/// Number of description characters shown next to each valid file.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 60;

const SEPARATOR_WIDTH: usize = 70;

/// Print the per-file status lines, then the summary block.
pub fn write_full_report<W: Write>(out: &mut W, report: &ValidationReport) -> Result<()> {
    write_file_statuses(out, report)?;
    write_summary(out, report)?;
    out.flush().context("Failed to flush report output")
}

/// Print the "validating N files" banner and one status line per valid file.
///
/// Prints nothing when discovery failed.
pub fn write_file_statuses<W: Write>(out: &mut W, report: &ValidationReport) -> Result<()> {
    if report.files.is_empty() {
        return Ok(());
    }

    writeln!(out, "📋 Validating {} rule files...\n", report.files.len())?;

    for file in report.files.iter().filter(|f| f.is_valid) {
        let marker = if file.frontmatter.is_always_applied() {
            "✅"
        } else {
            "ℹ️ "
        };
        writeln!(out, "{} {}", marker, file.relative_path)?;

        let preview = file.frontmatter.description_preview(DESCRIPTION_PREVIEW_CHARS);
        if !preview.is_empty() {
            writeln!(out, "   Description: {}...", preview)?;
        }
    }

    Ok(())
}

/// Print statistics, errors, warnings and the closing verdict.
pub fn write_summary<W: Write>(out: &mut W, report: &ValidationReport) -> Result<()> {
    let separator = "=".repeat(SEPARATOR_WIDTH);
    let stats = &report.stats;

    writeln!(out, "\n{}", separator)?;
    writeln!(out, "📊 VALIDATION REPORT")?;
    writeln!(out, "{}", separator)?;

    writeln!(out, "\n📈 Statistics:")?;
    writeln!(out, "   Total files: {}", stats.total_files)?;
    writeln!(out, "   ✅ Valid files: {}", stats.valid_files)?;
    writeln!(out, "   ❌ Invalid files: {}", stats.invalid_files)?;

    if stats.files_without_description > 0 {
        writeln!(out, "   ⚠️  Without description: {}", stats.files_without_description)?;
    }
    if stats.files_without_always_apply > 0 {
        writeln!(out, "   ⚠️  Without alwaysApply: {}", stats.files_without_always_apply)?;
    }
    if stats.files_with_invalid_yaml > 0 {
        writeln!(out, "   ⚠️  Invalid YAML: {}", stats.files_with_invalid_yaml)?;
    }

    if !report.errors.is_empty() {
        writeln!(out, "\n❌ ERRORS ({}):", report.errors.len())?;
        for error in &report.errors {
            writeln!(out, "   {}", error)?;
        }
    }

    if !report.warnings.is_empty() {
        writeln!(out, "\n⚠️  WARNINGS ({}):", report.warnings.len())?;
        for warning in &report.warnings {
            writeln!(out, "   {}", warning)?;
        }
    }

    writeln!(out, "\n{}", closing_message(report))?;
    writeln!(out, "{}", separator)?;

    Ok(())
}

/// One of three verdicts: all clean, valid with warnings, or errors present.
pub fn closing_message(report: &ValidationReport) -> &'static str {
    match (report.errors.is_empty(), report.warnings.is_empty()) {
        (true, true) => "✅ All rules are correctly configured and readable!",
        (true, false) => "✅ All rules are valid (with some warnings)",
        (false, _) => "❌ Errors must be fixed",
    }
}
