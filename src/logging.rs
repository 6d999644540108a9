//! Tracing setup for the binary.
//!
//! Logs go to stderr in compact form. With `--log-file` a second layer writes
//! JSON lines to a daily-rolling file next to the given path.

use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "plantmontana.log";

/// `RUST_LOG` when set, otherwise this crate at info (debug when verbose).
pub fn env_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("plantmontana={}", level)))
}

/// Directory and file-name prefix for the rolling appender.
fn appender_parts(log_file: &Path) -> (PathBuf, String) {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();
    let name = log_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    (dir, name)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file.map(|path| {
        let (dir, name) = appender_parts(&path);
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("Cannot create log directory {}: {}", dir.display(), e);
        }
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, name))
            .with_ansi(false)
            .json()
    });

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
}
