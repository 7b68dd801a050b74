use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use time::Date;

use crate::forms::{extract_form_id, response_url};
use crate::model::FormField;
use crate::store::ConfigStore;
use crate::submit::Submission;

mod event_loop;
mod input;
mod render;
mod runtime;
mod setup;
mod tasks;
mod theme;
mod wizard;

pub(crate) use self::runtime::run;
use self::setup::{SetupState, SetupStep};
use self::theme::Theme;
use self::wizard::WizardState;

/// Everything the state machine reacts to.
#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    TitleFetched(Result<String, String>),
    Submitted(Result<(), String>),
    FormDiscovered(Result<Vec<FormField>, String>),
}

/// Side effects requested by a transition.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Command {
    FetchTitle(String),
    Submit(Submission),
    Discover(String),
    Quit,
}

pub(crate) enum Screen {
    Setup(SetupState),
    Wizard(WizardState),
}

pub(crate) struct App {
    pub(crate) screen: Screen,
    store: ConfigStore,
    today: Date,
}

impl App {
    pub(crate) fn load(store: ConfigStore, force_setup: bool, today: Date) -> Self {
        let mut cfg = store.load();
        let form_id = extract_form_id(&cfg.form_url).ok();
        let screen = match form_id {
            Some(id) if !force_setup && cfg.is_complete() => {
                cfg.form_url = response_url(&id);
                tracing::info!("config complete, starting wizard");
                Screen::Wizard(WizardState::new(&cfg, today))
            }
            _ => {
                tracing::info!("no usable config, starting setup");
                Screen::Setup(SetupState::new())
            }
        };
        Self {
            screen,
            store,
            today,
        }
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Option<Command> {
        match &mut self.screen {
            Screen::Wizard(w) => w.update(event),
            Screen::Setup(s) => match s.update(event, &self.store) {
                SetupStep::Stay(cmd) => cmd,
                SetupStep::Configured(cfg) => {
                    self.screen = Screen::Wizard(WizardState::new(&cfg, self.today));
                    None
                }
            },
        }
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
