use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

const DISPLAY_DATE: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

pub const DATE_IDX: usize = 0;
pub const ISSUE_LINK_IDX: usize = 1;
pub const PROJECT_IDX: usize = 2;
pub const PROGRESS_IDX: usize = 3;
pub const HOURS_IDX: usize = 4;

pub const FIELD_COUNT: usize = 5;
/// Focus index of the confirm/submit step, one past the last field.
pub const CONFIRM_IDX: usize = FIELD_COUNT;

#[derive(Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub char_limit: usize,
    pub default: Option<fn(Date) -> String>,
    pub validate: Option<fn(&str) -> Result<(), String>>,
}

pub static FIELDS: [FieldDescriptor; FIELD_COUNT] = [
    FieldDescriptor {
        name: "Date (DD/MM/YYYY)",
        placeholder: "DD/MM/YYYY",
        char_limit: 10,
        default: Some(format_display_date),
        validate: None,
    },
    FieldDescriptor {
        name: "GitHub Issue Link",
        placeholder: "https://github.com/...",
        char_limit: 200,
        default: None,
        validate: None,
    },
    FieldDescriptor {
        name: "Project Name",
        placeholder: "N/A",
        char_limit: 100,
        default: Some(default_project),
        validate: None,
    },
    FieldDescriptor {
        name: "Progress Note",
        placeholder: "What did you work on today?",
        char_limit: 1000,
        default: None,
        validate: None,
    },
    FieldDescriptor {
        name: "Hours Spent",
        placeholder: "0.0",
        char_limit: 5,
        default: None,
        validate: Some(validate_hours),
    },
];

pub fn field(idx: usize) -> Option<&'static FieldDescriptor> {
    FIELDS.get(idx)
}

fn default_project(_: Date) -> String {
    "N/A".to_string()
}

pub fn format_display_date(date: Date) -> String {
    date.format(DISPLAY_DATE).unwrap_or_else(|_| {
        format!(
            "{:02}/{:02}/{}",
            date.day(),
            u8::from(date.month()),
            date.year()
        )
    })
}

/// Empty means "not entered yet" and is accepted.
pub fn validate_hours(s: &str) -> Result<(), String> {
    if s.is_empty() {
        return Ok(());
    }
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| "must be a number".to_string())?;
    if !(0.0..=12.0).contains(&v) {
        return Err("must be between 0 and 12".to_string());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/model/fields_tests.rs"]
mod tests;
