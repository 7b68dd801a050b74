use std::time::Duration;

use anyhow::{Context, Result};

const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends a form-encoded POST and reports the raw status code.
pub trait FormTransport {
    fn post_form(&self, url: &str, body: &[(String, String)]) -> Result<u16>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        // Redirects are part of the success signal, so they are not followed.
        let client = reqwest::blocking::Client::builder()
            .user_agent("daily")
            .timeout(SUBMIT_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }
}

impl FormTransport for HttpTransport {
    fn post_form(&self, url: &str, body: &[(String, String)]) -> Result<u16> {
        let resp = self
            .client
            .post(url)
            .form(body)
            .send()
            .with_context(|| format!("POST {}", url))?;
        Ok(resp.status().as_u16())
    }
}
