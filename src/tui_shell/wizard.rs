use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use time::Date;

use crate::model::{
    CONFIRM_IDX, Config, DATE_IDX, FIELD_COUNT, FIELDS, FieldMapping, HOURS_IDX, ISSUE_LINK_IDX,
    PROGRESS_IDX, PROJECT_IDX, SubmitMode, field, validate_hours,
};
use crate::submit::Submission;

use super::input::Input;
use super::{AppEvent, Command, is_quit_key};

pub(crate) struct WizardState {
    pub(super) inputs: Vec<Input>,
    /// In `[0, FIELD_COUNT]`; `CONFIRM_IDX` is the submit step.
    pub(super) focus: usize,
    pub(super) field_errs: Vec<Option<String>>,
    pub(super) issue_title: String,
    /// Issue link the in-flight or last title fetch was issued for.
    fetched_for: String,
    pub(super) err: Option<String>,
    pub(super) fetching: bool,
    pub(super) submitting: bool,
    pub(super) done: bool,

    form_url: String,
    mapping: FieldMapping,
    email: String,
    pub(super) mode: SubmitMode,
}

impl WizardState {
    pub(super) fn new(cfg: &Config, today: Date) -> Self {
        let inputs = FIELDS
            .iter()
            .map(|f| {
                let mut input = Input::new(f.char_limit);
                if let Some(default) = f.default {
                    input.set(default(today));
                }
                input
            })
            .collect();
        Self {
            inputs,
            focus: 0,
            field_errs: vec![None; FIELD_COUNT],
            issue_title: String::new(),
            fetched_for: String::new(),
            err: None,
            fetching: false,
            submitting: false,
            done: false,
            form_url: cfg.form_url.clone(),
            mapping: cfg.field_mappings.clone(),
            email: cfg.email.clone(),
            mode: cfg.submit_mode,
        }
    }

    pub(super) fn value(&self, idx: usize) -> &str {
        self.inputs[idx].value()
    }

    pub(super) fn busy(&self) -> bool {
        self.fetching || self.submitting
    }

    pub(super) fn update(&mut self, event: AppEvent) -> Option<Command> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::TitleFetched(res) => {
                self.fetching = false;
                if self.value(ISSUE_LINK_IDX).trim() != self.fetched_for {
                    tracing::debug!(
                        link = %self.fetched_for,
                        "discarding title for a replaced issue link"
                    );
                    self.issue_title.clear();
                    self.err = Some(
                        "issue link changed while fetching - press enter on it again".to_string(),
                    );
                    return None;
                }
                match res {
                    Ok(title) if !title.trim().is_empty() => {
                        self.issue_title = title.trim().to_string();
                        self.err = None;
                    }
                    Ok(_) => self.err = Some("issue title is empty".to_string()),
                    Err(err) => self.err = Some(err),
                }
                None
            }
            AppEvent::Submitted(res) => {
                self.submitting = false;
                match res {
                    Ok(()) => {
                        self.done = true;
                        self.err = None;
                    }
                    Err(err) => self.err = Some(err),
                }
                None
            }
            AppEvent::FormDiscovered(_) => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        if is_quit_key(&key) {
            return Some(Command::Quit);
        }
        if self.done {
            return (key.code == KeyCode::Enter).then_some(Command::Quit);
        }

        match key.code {
            KeyCode::Enter => self.on_enter(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.focus_prev();
                None
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            _ => {
                self.edit(key);
                None
            }
        }
    }

    pub(super) fn focus_next(&mut self) {
        self.focus = if self.focus >= CONFIRM_IDX {
            0
        } else {
            self.focus + 1
        };
    }

    pub(super) fn focus_prev(&mut self) {
        self.focus = if self.focus == 0 {
            CONFIRM_IDX
        } else {
            self.focus - 1
        };
    }

    fn on_enter(&mut self) -> Option<Command> {
        if self.focus == CONFIRM_IDX {
            return self.submit();
        }

        let link = self.value(ISSUE_LINK_IDX).trim().to_string();
        if self.focus == ISSUE_LINK_IDX && !link.is_empty() {
            if self.fetching && link != self.fetched_for {
                self.err = Some("still fetching the previous issue title".to_string());
                return None;
            }
            if !self.busy() {
                self.fetching = true;
                self.fetched_for = link.clone();
                self.err = None;
                self.focus_next();
                return Some(Command::FetchTitle(link));
            }
        }

        self.focus_next();
        None
    }

    fn edit(&mut self, key: KeyEvent) {
        let Some(input) = self.inputs.get_mut(self.focus) else {
            return;
        };
        if !input.handle_key(key) {
            return;
        }
        let value = input.value().to_string();

        if self.focus == ISSUE_LINK_IDX {
            self.issue_title.clear();
        }
        if let Some(validate) = field(self.focus).and_then(|f| f.validate) {
            self.field_errs[self.focus] = validate(&value).err();
        }
    }

    fn submit(&mut self) -> Option<Command> {
        if self.busy() {
            return None;
        }
        match self.validate() {
            Ok(hours) => {
                self.submitting = true;
                self.err = None;
                Some(Command::Submit(self.submission(hours)))
            }
            Err(err) => {
                self.err = Some(err);
                None
            }
        }
    }

    fn validate(&self) -> Result<f64, String> {
        if self.value(ISSUE_LINK_IDX).trim().is_empty() {
            return Err("issue link is required".to_string());
        }
        if self.issue_title.is_empty() {
            return Err("issue title not fetched - run 'gh auth login' first".to_string());
        }
        if self.value(PROGRESS_IDX).trim().is_empty() {
            return Err("progress note is required".to_string());
        }
        let hours = self.value(HOURS_IDX).trim();
        if hours.is_empty() {
            return Err("hours spent is required".to_string());
        }
        let parsed: f64 = hours
            .parse()
            .map_err(|_| "invalid hours value".to_string())?;
        validate_hours(hours).map_err(|err| format!("hours spent {}", err))?;
        Ok(parsed)
    }

    fn submission(&self, hours: f64) -> Submission {
        Submission {
            date: self.value(DATE_IDX).trim().to_string(),
            issue_link: self.value(ISSUE_LINK_IDX).trim().to_string(),
            issue_title: self.issue_title.clone(),
            progress_note: self.value(PROGRESS_IDX).to_string(),
            project_name: self.value(PROJECT_IDX).trim().to_string(),
            hours,
            form_url: self.form_url.clone(),
            mapping: self.mapping.clone(),
            email: self.email.clone(),
            mode: self.mode,
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/wizard_tests.rs"]
mod tests;
