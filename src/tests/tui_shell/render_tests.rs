use super::*;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use time::{Date, Month};

use crate::model::{Config, FieldMapping, HOURS_IDX, PROGRESS_IDX};
use crate::store::ConfigStore;

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|f| draw(f, app, &Theme::default()))
        .unwrap();
    let buf = terminal.backend().buffer();
    let width = buf.area.width as usize;
    buf.content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn wizard_app(dir: &tempfile::TempDir) -> App {
    let store = ConfigStore::new(dir.path().join("config.json"));
    store
        .save(&Config {
            form_url: "https://docs.google.com/forms/d/e/abc/formResponse".to_string(),
            field_mappings: FieldMapping {
                date: "1".to_string(),
                issue_link: "2".to_string(),
                issue_title: "3".to_string(),
                progress_note: "4".to_string(),
                project_name: "5".to_string(),
                hours_spent: "6".to_string(),
            },
            ..Config::default()
        })
        .unwrap();
    let today = Date::from_calendar_date(2025, Month::January, 31).unwrap();
    App::load(store, false, today)
}

#[test]
fn setup_screen_prompts_for_url() {
    let dir = tempfile::tempdir().unwrap();
    let today = Date::from_calendar_date(2025, Month::January, 31).unwrap();
    let app = App::load(ConfigStore::new(dir.path().join("config.json")), false, today);

    let text = screen_text(&app);
    assert!(text.contains("daily - setup"));
    assert!(text.contains("> Google Forms URL"));
}

#[test]
fn first_step_shows_prefilled_date() {
    let dir = tempfile::tempdir().unwrap();
    let app = wizard_app(&dir);

    let text = screen_text(&app);
    assert!(text.contains("Step 1 of 6"));
    assert!(text.contains("> Date (DD/MM/YYYY)"));
    assert!(text.contains("31/01/2025"));
    assert!(!text.contains("Completed:"));
}

#[test]
fn later_steps_list_completed_fields_and_title() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = wizard_app(&dir);
    let Screen::Wizard(w) = &mut app.screen else {
        panic!("expected wizard");
    };
    w.inputs[ISSUE_LINK_IDX].set("o/r#9".to_string());
    w.issue_title = "Broken build".to_string();
    w.focus = CONFIRM_IDX;
    w.err = Some("progress note is required".to_string());

    let text = screen_text(&app);
    assert!(text.contains("Step 6 of 6"));
    assert!(text.contains("✓ GitHub Issue Link: o/r#9"));
    assert!(text.contains("✓ Issue Title: Broken build"));
    assert!(text.contains("[ Submit Report ]"));
    assert!(text.contains("✗ progress note is required"));
}

#[test]
fn done_screen_replaces_wizard() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = wizard_app(&dir);
    if let Screen::Wizard(w) = &mut app.screen {
        w.done = true;
    }

    let text = screen_text(&app);
    assert!(text.contains("✓ Report submitted!"));
    assert!(text.contains("Press enter to exit."));
    assert!(!text.contains("Step"));
}

#[test]
fn long_completed_values_wrap_instead_of_clipping() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = wizard_app(&dir);
    let Screen::Wizard(w) = &mut app.screen else {
        panic!("expected wizard");
    };
    w.inputs[PROGRESS_IDX].set("@".repeat(300));
    w.focus = HOURS_IDX;

    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal
        .draw(|f| draw(f, &app, &Theme::default()))
        .unwrap();
    let text = screen_text(&app);
    assert_eq!(text.matches('@').count(), 300);

    // The cursor still lands on the hours input, below the wrapped note.
    let rows: Vec<&str> = text.lines().collect();
    let label_row = rows
        .iter()
        .position(|row| row.contains("> Hours"))
        .unwrap();
    let cursor = terminal.get_cursor_position().unwrap();
    assert_eq!(cursor.y as usize, label_row + 1);
}
