use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::{
    fs,
    io::{stderr, IsTerminal},
    path::PathBuf,
};
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::debug_fn},
    prelude::*,
    registry, EnvFilter,
};

use crate::settings::consts::{
    APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, DEFAULT_LOG_LEVEL, LOG_FILE,
};

/// Platform data directory holding the JSON log, e.g. `~/.local/share/atm-cli`.
fn log_directory() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
        .ok_or_else(|| anyhow!("Could not determine project directories"))?;
    let directory = project_dirs.data_dir().to_path_buf();
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create log directory: {}", directory.display()))?;
    Ok(directory)
}

/// Install the global subscriber and return the path of the JSON log file.
///
/// stderr gets bare messages filtered by `RUST_LOG` (default `warn`); the file
/// gets every event as one JSON object per line.
pub fn init_logger() -> Result<PathBuf> {
    let directory = log_directory()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let console_layer = fmt::layer()
        .with_writer(stderr)
        .with_ansi(stderr().is_terminal())
        .with_level(true)
        .with_target(false)
        .without_time()
        .compact()
        .fmt_fields(debug_fn(|writer, field, value| {
            if field.name() == "message" {
                write!(writer, "{:?}", value)?;
            }
            Ok(())
        }))
        .with_filter(env_filter);

    let json_layer = fmt::layer()
        .json()
        .with_writer(rolling::never(&directory, LOG_FILE))
        .with_target(true)
        .with_level(true)
        .flatten_event(true)
        .with_filter(LevelFilter::TRACE);

    registry().with(console_layer).with(json_layer).try_init()?;

    Ok(directory.join(LOG_FILE))
}
