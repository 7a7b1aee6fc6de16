//! File logging; the terminal itself belongs to the UI.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "TABENTRY_LOG";
const LOG_FILE: &str = "tabentry.log";
const DEFAULT_FILTER: &str = "tabentry=info,tabentry_cli=info,warn";

/// Initialize the logging subsystem.
///
/// Logs go to `<dir>/tabentry.log.<date>`, where `<dir>` is `log_dir` or the
/// platform data directory. Verbosity comes from `TABENTRY_LOG`:
///
/// ```bash
/// TABENTRY_LOG=debug tabentry --output-file rows.txt
/// ```
pub fn init(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_directory);
    std::fs::create_dir_all(&log_dir)
        .wrap_err_with(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .wrap_err("failed to install log subscriber")?;

    tracing::info!(log_dir = %log_dir.display(), "tabentry starting");
    Ok(log_dir)
}

fn default_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("tabentry").join("logs")
}
