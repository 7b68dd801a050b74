//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so events only go to a log file next to
//! the config. Filtering follows `RUST_LOG` and defaults to `info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use time::UtcOffset;
use time::format_description::FormatItem;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE: &str = "daily.log";

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;

    const TS: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    // Must run before the writer thread starts.
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::OffsetTime::new(offset, TS))
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(|err| anyhow::anyhow!("install tracing subscriber: {}", err))?;

    tracing::info!(path = %dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}
