use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use regex::Regex;

use crate::model::{FieldMapping, FormField};

mod discover;
pub use self::discover::{DiscoveryError, FormDiscoverer, parse_form_fields};

const FORMS_ORIGIN: &str = "https://docs.google.com";

fn form_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"forms/d/e/([a-zA-Z0-9_-]+)").expect("valid form id regex"))
}

pub fn extract_form_id(url: &str) -> Result<String> {
    form_id_re()
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| anyhow!("invalid Google Forms URL"))
}

/// Canonical submission endpoint for a form id.
pub fn response_url(form_id: &str) -> String {
    format!("{}/forms/d/e/{}/formResponse", FORMS_ORIGIN, form_id)
}

/// Viewable variant of a submission URL.
pub fn view_url(form_url: &str) -> String {
    form_url.replacen("/formResponse", "/viewform", 1)
}

/// Positional mapping of the first six questions. Fewer than six yields an
/// empty mapping.
pub fn map_fields_by_order(fields: &[FormField]) -> FieldMapping {
    let [date, issue_link, issue_title, progress_note, project_name, hours_spent, ..] = fields
    else {
        return FieldMapping::default();
    };
    FieldMapping {
        date: date.id.clone(),
        issue_link: issue_link.id.clone(),
        issue_title: issue_title.id.clone(),
        progress_note: progress_note.id.clone(),
        project_name: project_name.id.clone(),
        hours_spent: hours_spent.id.clone(),
    }
}

#[cfg(test)]
#[path = "tests/forms/forms_tests.rs"]
mod tests;
