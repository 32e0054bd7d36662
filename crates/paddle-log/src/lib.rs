//! Structured logging for the paddle game.
//!
//! Console output with uptime timestamps and module paths, plus a JSON log file
//! in debug builds. `RUST_LOG` takes precedence over the level passed in from
//! the command line. Records emitted through the `log` facade (as the config
//! crate does) are forwarded into the same subscriber.

use std::path::{Path, PathBuf};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor an explicit level is given.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "paddle.log";

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - enables the JSON file layer
/// * `level` - filter directive from the command line, e.g. `"debug"`
///
/// Must be called at most once per process.
///
/// ```no_run
/// paddle_log::init_logging(None, cfg!(debug_assertions), Some("debug"));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, level: Option<&str>) {
    let filter_str = filter_directive(level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_file_path(log_dir))
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// The filter directive to use for an optional command-line level.
///
/// Blank input counts as absent.
pub fn filter_directive(level: Option<&str>) -> String {
    match level.map(str::trim) {
        Some(l) if !l.is_empty() => l.to_string(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// An `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Path of the JSON log file inside `log_dir`.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        let filter = default_env_filter();
        assert!(format!("{filter}").contains("info"));
    }

    #[test]
    fn test_filter_directive_uses_level() {
        assert_eq!(filter_directive(Some("debug")), "debug");
        assert_eq!(
            filter_directive(Some("warn,paddle_config=trace")),
            "warn,paddle_config=trace"
        );
    }

    #[test]
    fn test_filter_directive_defaults() {
        assert_eq!(filter_directive(None), DEFAULT_FILTER);
        assert_eq!(filter_directive(Some("")), DEFAULT_FILTER);
        assert_eq!(filter_directive(Some("  ")), DEFAULT_FILTER);
    }

    #[test]
    fn test_subsystem_filter_parses() {
        let filter = EnvFilter::try_new("info,paddle_config=debug").unwrap();
        assert!(format!("{filter}").contains("paddle_config=debug"));
    }

    #[test]
    fn test_log_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(dir.path());
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }
}
