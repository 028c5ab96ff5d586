use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the level filter. `RUST_LOG` wins when set; otherwise `debug` or `warn`.
///
/// The default stays at `warn` so that diagnostics on stderr do not drown out the report
/// printed on stdout.
pub fn build_env_filter(debug_mode: bool) -> EnvFilter {
    let default_level = if debug_mode { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Setup console logging on stderr, plus a daily rotating log file when `log_dir` is given.
///
/// # Arguments
/// * `log_dir` - Optional directory for log files (created if missing)
/// * `log_prefix` - Prefix for log files (e.g., "rulelint")
/// * `debug_mode` - If true, use debug level; otherwise use warn level
///
/// # Returns
/// The file writer guard, if a log file was requested. It must be held for the duration of
/// the program to keep file logging active.
pub fn setup_logging(
    log_dir: Option<&Utf8Path>,
    log_prefix: &str,
    debug_mode: bool,
) -> Result<Option<WorkerGuard>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(log_dir) = log_dir else {
        tracing_subscriber::registry()
            .with(build_env_filter(debug_mode))
            .with(console_layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    };

    ensure_log_dir(log_dir)?;

    let file_appender = rolling::daily(log_dir, log_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(build_env_filter(debug_mode))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!(
        "Logging initialized: dir={}, prefix={}, debug={}",
        log_dir,
        log_prefix,
        debug_mode
    );

    Ok(Some(guard))
}

fn ensure_log_dir(log_dir: &Utf8Path) -> Result<()> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_log_directory_created() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = Utf8PathBuf::try_from(temp_dir.path().join("logs")).unwrap();

        // Only the directory step; installing a global subscriber would leak into other tests
        ensure_log_dir(&log_dir).unwrap();
        assert!(log_dir.exists());

        ensure_log_dir(&log_dir).unwrap();
    }

    #[test]
    fn test_build_env_filter_levels() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert_eq!(build_env_filter(true).to_string(), "debug");
        assert_eq!(build_env_filter(false).to_string(), "warn");
    }
}
