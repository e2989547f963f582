//! Logging setup for `nw-shell`.

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// The main log file and the appender's error log for `log_name`.
fn log_paths(logs_dir: &Path, log_name: &str) -> (PathBuf, PathBuf) {
    let log_path = logs_dir.join(format!("{log_name}.log"));
    let err_path = log_path.with_extension("err.log");
    (log_path, err_path)
}

/// Starts the `nw-shell` logger.
///
/// `log_name` comes from `--log-name` and defaults to `nw-shell`, so a plain
/// run logs to `./logs/nw-shell.log`, rotated daily. Warnings from the
/// appender itself go to `./logs/nw-shell.err.log`. Only `Info` and above are
/// kept, so the per-query `trace!` events of the matrix are dropped.
///
/// # Returns
///
/// The guard, which must live until `main` returns, and the log file path.
///
/// # Errors
///
/// - If `./logs` could not be created.
/// - If a global logger is already set.
pub fn configure_logger(log_name: &str) -> Result<(LoggerGuard, PathBuf), String> {
    let logs_dir = PathBuf::from(".")
        .canonicalize()
        .map_err(|e| e.to_string())?
        .join("logs");
    std::fs::create_dir_all(&logs_dir).map_err(|e| e.to_string())?;

    let (log_path, err_path) = log_paths(&logs_dir, log_name);

    let guard = ftlog::Builder::new()
        .max_log_level(LevelFilter::Info)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        .filter("ftlog::appender", "nw-shell-appender", LevelFilter::Warn)
        .appender("nw-shell-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
