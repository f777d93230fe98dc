use crate::config::DIAGNOSTIC_LOG_FILE;
use crate::error::{AppError, Result};
use crate::utils::path::AppPaths;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Create config/, log/, cfr/ and the default output folder under the base
/// directory. Safe to call on every start; any failure is fatal.
pub fn ensure_directories(paths: &AppPaths) -> Result<()> {
    for dir in paths.required_dirs() {
        std::fs::create_dir_all(&dir).map_err(|source| AppError::Bootstrap {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Setup diagnostic logging.
/// - Default: warnings to stderr, no file
/// - With --verbose: rolling file in log/ with detailed format, plus simple stderr output
/// - With --quiet: no stderr layer at all
pub fn setup_logging(paths: &AppPaths, verbose: bool, quiet: bool) -> Result<()> {
    // Use RUST_LOG environment variable if set, otherwise use default based on verbose
    let default_log_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_level));

    let base_subscriber = tracing_subscriber::registry().with(env_filter);

    let installed = if verbose {
        // Normally created by the bootstrap already
        let log_dir = paths.log_dir();
        std::fs::create_dir_all(&log_dir)?;

        // cfr-launcher.log.YYYY-MM-DD, next to the activity logs
        let file_appender = tracing_appender::rolling::daily(log_dir, DIAGNOSTIC_LOG_FILE);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // The guard flushes on drop; the process exits right after the one command runs
        std::mem::forget(guard);

        // Diagnostic file: full detail for bug reports
        let subscriber_with_file = base_subscriber.with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // Plain text on disk
                .with_target(true) // Which module logged it
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(false) // Too noisy
                .with_thread_names(false),
        );

        // stderr mirror, kept short so it doesn't drown the command output
        if !quiet {
            let subscriber = subscriber_with_file.with(
                fmt::layer()
                    .with_writer(std::io::stderr) // stdout is for results and JSON
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .without_time(), // Terminal already has context
            );
            tracing::subscriber::set_global_default(subscriber)
        } else {
            tracing::subscriber::set_global_default(subscriber_with_file)
        }
    } else if !quiet {
        // Warnings only, e.g. an unreadable config file
        let subscriber = base_subscriber.with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        );
        tracing::subscriber::set_global_default(subscriber)
    } else {
        // Quiet: filter installed, nothing written anywhere
        tracing::subscriber::set_global_default(base_subscriber)
    };

    installed.map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Locale;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directories_creates_all_four() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::new(temp_dir.path(), Locale::En);

        ensure_directories(&paths).unwrap();

        for name in ["config", "log", "output", "cfr"] {
            assert!(temp_dir.path().join(name).is_dir(), "{} missing", name);
        }
    }

    #[test]
    fn test_ensure_directories_is_idempotent_and_keeps_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::new(temp_dir.path(), Locale::Zh);

        ensure_directories(&paths).unwrap();
        fs::write(paths.config_file(), "/somewhere").unwrap();
        fs::write(paths.tool_path(), b"PK").unwrap();

        ensure_directories(&paths).unwrap();

        assert!(temp_dir.path().join("shuchu").is_dir());
        assert_eq!(fs::read_to_string(paths.config_file()).unwrap(), "/somewhere");
        assert!(paths.find_tool().is_some());
    }

    #[test]
    fn test_ensure_directories_reports_blocked_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("log"), "not a dir").unwrap();
        let paths = AppPaths::new(temp_dir.path(), Locale::En);

        match ensure_directories(&paths) {
            Err(AppError::Bootstrap { path, .. }) => assert_eq!(path, temp_dir.path().join("log")),
            other => panic!("expected bootstrap failure, got {:?}", other),
        }
    }
}
