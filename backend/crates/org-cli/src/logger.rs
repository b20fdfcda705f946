//! Diagnostics for one `orgtree` invocation.
//!
//! stdout carries the command's JSON result, so log lines go to stderr
//! unless the config names a log file, in which case they are appended there.

use crate::error::{CliError, Result as CliResult};

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, Output};
use log::info;

/// Install the global logger. Colors only apply to stderr.
pub fn initialize(
    log_level: org_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> CliResult<()> {
    let level_filter = log_level.0;

    let (output, destination): (Output, String) = match log_file {
        Some(ref path) => (open_log_file(path)?.into(), path.display().to_string()),
        None => (std::io::stderr().into(), "stderr".to_string()),
    };
    let colors = (colored && log_file.is_none()).then(level_colors);

    Dispatch::new()
        .level(level_filter)
        .format(move |out, message, record| {
            let level = match colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = level,
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(output)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to install logger: {e}"),
        })?;

    info!("Logger initialized: level={:?}, {}", level_filter, destination);

    Ok(())
}

/// Open `path` for appending, creating missing parent directories.
pub(crate) fn open_log_file(path: &Path) -> CliResult<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", parent.display(), e),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {}", path.display(), e),
        })
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}
