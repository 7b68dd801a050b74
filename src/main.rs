use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use daily::tui::{self, TuiRunOptions};

#[derive(Parser)]
#[command(name = "daily", version)]
#[command(about = "Fill in the daily progress report form", long_about = None)]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(long, env = "DAILY_CONFIG")]
    config: Option<PathBuf>,

    /// Run form setup even if a config already exists
    #[arg(long)]
    setup: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Before any thread exists (see `local_today`).
    let today = tui::local_today();

    let log_dir = match cli.config.as_ref().and_then(|p| p.parent()) {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(dir.to_path_buf()),
        _ => daily::store::app_dir(),
    };
    let _log_guard = match log_dir.and_then(|dir| daily::logging::init(&dir)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {:#}", err);
            None
        }
    };

    tui::run_with_options(TuiRunOptions {
        config_path: cli.config,
        force_setup: cli.setup,
        today,
    })
}
