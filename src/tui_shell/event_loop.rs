use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::tasks::TaskRunner;
use super::theme::Theme;
use super::{App, AppEvent, Command, render};

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runner: &mut TaskRunner,
    theme: &Theme,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| render::draw(f, app, theme))
            .context("draw")?;

        if let Some(ev) = runner.poll() {
            if apply(app, runner, ev) {
                return Ok(());
            }
            continue;
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    if apply(app, runner, AppEvent::Key(k)) {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

/// Feeds one event through the state machine. Returns true on quit.
fn apply(app: &mut App, runner: &mut TaskRunner, ev: AppEvent) -> bool {
    match app.update(ev) {
        Some(Command::Quit) => true,
        Some(cmd) => {
            runner.dispatch(cmd);
            false
        }
        None => false,
    }
}
