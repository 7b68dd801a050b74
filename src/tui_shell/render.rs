use ratatui::Frame;
use ratatui::layout::Position;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{CONFIRM_IDX, FIELDS, ISSUE_LINK_IDX, SubmitMode};

use super::input::Input;
use super::setup::SetupState;
use super::theme::Theme;
use super::wizard::WizardState;
use super::{App, Screen};

const INDENT: &str = "  ";

/// Lines to draw plus where the terminal cursor belongs, if anywhere.
struct Canvas<'a> {
    lines: Vec<Line<'a>>,
    cursor: Option<(u16, u16)>,
    width: usize,
}

impl<'a> Canvas<'a> {
    fn new(width: u16) -> Self {
        Self {
            lines: Vec::new(),
            cursor: None,
            width: width as usize,
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn styled(&mut self, text: impl Into<String>, style: ratatui::style::Style) {
        self.lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(text.into(), style),
        ]));
    }

    /// Like `styled`, but breaks long text over as many rows as it needs.
    fn wrapped(&mut self, text: &str, style: ratatui::style::Style) {
        let avail = self.width.saturating_sub(INDENT.len() * 2).max(1);
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            self.blank();
            return;
        }
        for chunk in chars.chunks(avail) {
            self.styled(chunk.iter().collect::<String>(), style);
        }
    }

    fn input(&mut self, input: &Input, placeholder: &'a str, theme: &Theme) {
        let avail = self.width.saturating_sub(INDENT.len() * 2).max(1);
        let row = self.lines.len() as u16;
        if input.value().is_empty() {
            self.lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(placeholder, theme.blurred),
            ]));
            self.cursor = Some((INDENT.len() as u16, row));
            return;
        }
        let (visible, col) = input.window(avail);
        self.lines
            .push(Line::from(vec![Span::raw(INDENT), Span::raw(visible)]));
        self.cursor = Some(((INDENT.len() + col) as u16, row));
    }
}

pub(super) fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    let mut canvas = Canvas::new(area.width);
    match &app.screen {
        Screen::Setup(s) => setup_lines(&mut canvas, s, theme),
        Screen::Wizard(w) => wizard_lines(&mut canvas, w, theme),
    }

    let cursor = canvas.cursor;
    frame.render_widget(Paragraph::new(canvas.lines), area);
    if let Some((x, y)) = cursor
        && y < area.height
    {
        frame.set_cursor_position(Position::new(area.x + x, area.y + y));
    }
}

fn setup_lines(c: &mut Canvas<'_>, s: &SetupState, theme: &Theme) {
    c.blank();
    c.styled("daily - setup", theme.title);
    c.blank();

    if s.loading {
        c.styled("Fetching form fields...", theme.blurred);
        return;
    }

    c.styled("> Google Forms URL", theme.focused);
    c.input(&s.input, "https://docs.google.com/forms/d/e/...", theme);
    c.blank();
    if let Some(err) = &s.err {
        c.styled(format!("✗ {}", err), theme.error);
        c.blank();
    }
    c.styled("enter: continue • ctrl+c: quit", theme.blurred);
}

fn wizard_lines(c: &mut Canvas<'_>, w: &WizardState, theme: &Theme) {
    if w.done {
        let msg = match w.mode {
            SubmitMode::Post => "✓ Report submitted!",
            SubmitMode::Browser => "✓ Pre-filled form opened in browser!",
        };
        c.blank();
        c.styled(msg, theme.success);
        c.blank();
        c.styled("Press enter to exit.", theme.blurred);
        return;
    }

    c.blank();
    c.styled("daily report", theme.title);
    c.blank();
    c.styled(
        format!("Step {} of {}", w.focus + 1, CONFIRM_IDX + 1),
        theme.blurred,
    );
    c.blank();

    if w.focus > 0 {
        c.styled("Completed:", theme.blurred);
        for (i, f) in FIELDS.iter().enumerate().take(w.focus) {
            c.wrapped(&format!("✓ {}: {}", f.name, w.value(i)), theme.blurred);
            if i == ISSUE_LINK_IDX && !w.issue_title.is_empty() {
                c.wrapped(&format!("✓ Issue Title: {}", w.issue_title), theme.blurred);
            }
        }
        c.blank();
    }

    match FIELDS.get(w.focus) {
        Some(f) => {
            c.styled(format!("> {}", f.name), theme.focused);
            c.input(&w.inputs[w.focus], f.placeholder, theme);
            if let Some(err) = &w.field_errs[w.focus] {
                c.styled(format!("✗ {}", err), theme.error);
            }
        }
        None => {
            let label = match w.mode {
                SubmitMode::Post => "[ Submit Report ]",
                SubmitMode::Browser => "[ Open Pre-filled Form ]",
            };
            c.styled(label, theme.focused);
        }
    }

    if let Some(err) = &w.err {
        c.blank();
        c.styled(format!("✗ {}", err), theme.error);
    }
    if w.fetching {
        c.blank();
        c.styled("⟳ Fetching issue title...", theme.blurred);
    }
    if w.submitting {
        c.blank();
        c.styled("⟳ Submitting...", theme.blurred);
    }

    c.blank();
    c.styled(
        "enter: next • tab/shift+tab: move • esc: quit",
        theme.blurred,
    );
}

#[cfg(test)]
#[path = "../tests/tui_shell/render_tests.rs"]
mod tests;
