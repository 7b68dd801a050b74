use anyhow::{Context, Result, bail};

use crate::forms::view_url;
use crate::model::{FieldMapping, SubmitMode};

mod transport;
pub use self::transport::{FormTransport, HttpTransport};

/// Everything needed to file one report.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    /// As typed, `DD/MM/YYYY`.
    pub date: String,
    pub issue_link: String,
    pub issue_title: String,
    pub progress_note: String,
    pub project_name: String,
    pub hours: f64,

    pub form_url: String,
    pub mapping: FieldMapping,
    pub email: String,
    pub mode: SubmitMode,
}

impl Submission {
    /// `entry.<id>` pairs shared by both submission strategies.
    pub fn entries(&self) -> Vec<(String, String)> {
        let m = &self.mapping;
        [
            (&m.date, convert_date(&self.date)),
            (&m.issue_link, self.issue_link.clone()),
            (&m.issue_title, self.issue_title.clone()),
            (&m.progress_note, self.progress_note.clone()),
            (&m.project_name, self.project_name.clone()),
            (&m.hours_spent, format!("{:.1}", self.hours)),
        ]
        .into_iter()
        .map(|(id, v)| (format!("entry.{}", id), v))
        .collect()
    }

    pub fn prefill_url(&self) -> Result<String> {
        let mut url = reqwest::Url::parse(&view_url(&self.form_url)).context("parse form url")?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("usp", "pp_url");
            for (k, v) in self.entries() {
                q.append_pair(&k, &v);
            }
        }
        Ok(url.into())
    }
}

/// `DD/MM/YYYY` to `YYYY-MM-DD`. Anything else is returned unchanged.
pub fn convert_date(ddmmyyyy: &str) -> String {
    match ddmmyyyy.split('/').collect::<Vec<_>>().as_slice() {
        [d, m, y] => format!("{}-{}-{}", y, m, d),
        _ => ddmmyyyy.to_string(),
    }
}

pub struct SubmissionClient<T = HttpTransport> {
    transport: T,
}

impl SubmissionClient<HttpTransport> {
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new()?))
    }
}

impl<T: FormTransport> SubmissionClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn submit(&self, s: &Submission) -> Result<()> {
        match s.mode {
            SubmitMode::Post => self.post(s),
            SubmitMode::Browser => open_in_browser(s),
        }
    }

    fn post(&self, s: &Submission) -> Result<()> {
        let mut body = s.entries();
        body.push(("emailAddress".to_string(), s.email.clone()));

        let status = self
            .transport
            .post_form(&s.form_url, &body)
            .context("submit form")?;
        tracing::info!(status, "form submitted");
        match status {
            200 | 302 | 303 => Ok(()),
            other => bail!("submit form: unexpected status {}", other),
        }
    }
}

fn open_in_browser(s: &Submission) -> Result<()> {
    let url = s.prefill_url()?;
    tracing::info!("opening pre-filled form");
    open::that(&url).context("open browser")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/submit/submit_tests.rs"]
mod tests;
