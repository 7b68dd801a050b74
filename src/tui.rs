use std::path::PathBuf;

use anyhow::Result;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    /// Config file override; the per-user location when unset.
    pub config_path: Option<PathBuf>,
    pub force_setup: bool,
    /// Seeds the date field.
    pub today: Date,
}

impl Default for TuiRunOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            force_setup: false,
            today: local_today(),
        }
    }
}

/// Local calendar date, falling back to UTC when the offset is unknown.
///
/// Resolve this before spawning threads: the local offset is unavailable
/// once the process is multi-threaded on some platforms.
pub fn local_today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn run() -> Result<()> {
    run_with_options(TuiRunOptions::default())
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
