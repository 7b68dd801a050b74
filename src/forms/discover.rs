use std::time::Duration;

use serde_json::Value;

use crate::model::FormField;

use super::view_url;

const DATA_MARKER: &str = "var FB_PUBLIC_LOAD_DATA_ = ";
const DATA_END: &str = ";</script>";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("FB_PUBLIC_LOAD_DATA_ not found")]
    MarkerNotFound,
    #[error("could not parse form data: {0}")]
    Malformed(String),
    #[error("fetch form page: status {0}")]
    Status(u16),
    #[error("fetch form page: {0}")]
    Http(#[from] reqwest::Error),
}

pub struct FormDiscoverer {
    client: reqwest::blocking::Client,
}

impl FormDiscoverer {
    pub fn new() -> Result<Self, DiscoveryError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("daily")
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Scrapes the viewable page of `form_url` for its questions.
    pub fn discover(&self, form_url: &str) -> Result<Vec<FormField>, DiscoveryError> {
        let url = view_url(form_url);
        tracing::debug!(%url, "fetching form page");
        let resp = self.client.get(&url).send()?;
        if !resp.status().is_success() {
            return Err(DiscoveryError::Status(resp.status().as_u16()));
        }
        let body = resp.text()?;
        let fields = parse_form_fields(&body)?;
        tracing::info!(count = fields.len(), "discovered form fields");
        Ok(fields)
    }
}

pub fn parse_form_fields(html: &str) -> Result<Vec<FormField>, DiscoveryError> {
    let start = html
        .find(DATA_MARKER)
        .ok_or(DiscoveryError::MarkerNotFound)?
        + DATA_MARKER.len();
    let len = html[start..]
        .find(DATA_END)
        .ok_or_else(|| DiscoveryError::Malformed("unterminated data block".to_string()))?;

    let data: Value = serde_json::from_str(&html[start..start + len])
        .map_err(|err| DiscoveryError::Malformed(err.to_string()))?;
    let questions = data
        .get(1)
        .and_then(|form| form.get(1))
        .and_then(Value::as_array)
        .ok_or_else(|| DiscoveryError::Malformed("missing question list".to_string()))?;

    Ok(questions.iter().filter_map(parse_question).collect())
}

// [_, label, _, _, [[id, ...], ...], ...]
fn parse_question(q: &Value) -> Option<FormField> {
    let q = q.as_array().filter(|q| q.len() >= 5)?;
    let label = q[1].as_str().unwrap_or_default().to_string();
    let id = q[4].get(0)?.get(0)?;
    let id = match id.as_i64() {
        Some(n) => n.to_string(),
        None => format!("{:.0}", id.as_f64()?),
    };
    Some(FormField { id, label })
}

#[cfg(test)]
#[path = "../tests/forms/discover_tests.rs"]
mod tests;
