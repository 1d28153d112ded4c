use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "getdone.log";

/// Error type for logging setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log file {path}: {source}")]
    OpenError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Default log location. The terminal belongs to the UI, so logs go to a file.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Pick the filter directive. `-v` asks for at least info, `-vv` debug,
/// `-vvv` trace, and never makes the configured directive quieter. A bare
/// level in the directive is raised in place; target directives are kept,
/// and a directive without a bare level gains one.
pub fn level_for_verbosity(configured: &str, verbose: u8) -> String {
    let requested = match verbose {
        0 => return configured.to_string(),
        1 => 3,
        2 => 4,
        _ => 5,
    };

    let mut has_default = false;
    let mut parts: Vec<&str> = Vec::new();
    for part in configured.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match LEVELS.iter().position(|level| level.eq_ignore_ascii_case(part)) {
            Some(rank) => {
                has_default = true;
                parts.push(if rank >= requested { part } else { LEVELS[requested] });
            }
            None => parts.push(part),
        }
    }
    if !has_default {
        parts.push(LEVELS[requested]);
    }
    parts.join(",")
}

/// Build the filter: RUST_LOG wins, then the given directive.
pub fn build_filter(directive: &str) -> Result<EnvFilter, LogError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|e| LogError::InvalidFilter {
        directive: directive.to_string(),
        source: e,
    })
}

/// Install the global tracing subscriber, appending to `path`.
pub fn init_tracing(directive: &str, path: &Path) -> Result<(), LogError> {
    let filter = build_filter(directive)?;
    let file = open_log_file(path)?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, LogError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LogError::OpenError {
            path: path.to_path_buf(),
            source: e,
        })
}
