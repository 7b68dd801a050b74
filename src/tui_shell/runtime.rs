use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::store::ConfigStore;

use super::tasks::TaskRunner;
use super::{App, Theme, event_loop};

pub(crate) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("daily requires an interactive terminal (TTY)");
    }

    let store = match opts.config_path {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::open_default().context("locate config directory")?,
    };
    let mut app = App::load(store, opts.force_setup, opts.today);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut runner = TaskRunner::default();
    let res = event_loop::run_loop(&mut terminal, &mut app, &mut runner, &Theme::default());

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    if runner.busy() {
        tracing::info!("exiting with an operation still in flight");
    }
    tracing::info!("bye");
    res
}
