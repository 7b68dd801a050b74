use crossterm::event::{KeyCode, KeyEvent};

use crate::forms::{extract_form_id, map_fields_by_order, response_url};
use crate::model::{Config, FormField};
use crate::store::ConfigStore;

use super::input::Input;
use super::{AppEvent, Command, is_quit_key};

const URL_LIMIT: usize = 300;

pub(crate) struct SetupState {
    pub(super) input: Input,
    pub(super) err: Option<String>,
    pub(super) loading: bool,
    pub(super) form_url: String,
}

pub(super) enum SetupStep {
    Stay(Option<Command>),
    Configured(Config),
}

impl SetupState {
    pub(super) fn new() -> Self {
        Self {
            input: Input::new(URL_LIMIT),
            err: None,
            loading: false,
            form_url: String::new(),
        }
    }

    pub(super) fn update(&mut self, event: AppEvent, store: &ConfigStore) -> SetupStep {
        match event {
            AppEvent::Key(key) => SetupStep::Stay(self.handle_key(key)),
            AppEvent::FormDiscovered(res) if self.loading => self.on_discovered(res, store),
            _ => SetupStep::Stay(None),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if is_quit_key(&key) {
            return Some(Command::Quit);
        }
        if self.loading {
            return None;
        }
        if key.code != KeyCode::Enter {
            self.input.handle_key(key);
            return None;
        }

        let url = self.input.value().trim();
        if url.is_empty() || !url.contains("forms") {
            self.err = Some("invalid Google Forms URL".to_string());
            return None;
        }
        let id = match extract_form_id(url) {
            Ok(id) => id,
            Err(err) => {
                self.err = Some(err.to_string());
                return None;
            }
        };
        self.form_url = response_url(&id);
        self.loading = true;
        self.err = None;
        Some(Command::Discover(self.form_url.clone()))
    }

    fn on_discovered(
        &mut self,
        res: Result<Vec<FormField>, String>,
        store: &ConfigStore,
    ) -> SetupStep {
        self.loading = false;
        let fields = match res {
            Ok(fields) => fields,
            Err(err) => {
                self.err = Some(err);
                return SetupStep::Stay(None);
            }
        };

        let mapping = map_fields_by_order(&fields);
        if !mapping.is_complete() {
            tracing::warn!(found = fields.len(), "form has too few fields");
            self.err = Some("form needs at least 6 fields".to_string());
            return SetupStep::Stay(None);
        }

        // Keep submission settings from an earlier config when re-running setup.
        let mut cfg = store.load();
        cfg.form_url = self.form_url.clone();
        cfg.field_mappings = mapping;
        if let Err(err) = store.save(&cfg) {
            self.err = Some(format!("save config: {:#}", err));
            return SetupStep::Stay(None);
        }
        SetupStep::Configured(cfg)
    }
}
