use serde::{Deserialize, Serialize};

use super::FieldMapping;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Canonical `formResponse` URL of the destination form.
    #[serde(default)]
    pub form_url: String,

    #[serde(default, skip_serializing_if = "FieldMapping::is_empty")]
    pub field_mappings: FieldMapping,

    /// Sent as `emailAddress` with direct submissions.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    #[serde(default)]
    pub submit_mode: SubmitMode,
}

impl Config {
    pub fn is_complete(&self) -> bool {
        !self.form_url.is_empty() && self.field_mappings.is_complete()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    /// POST the answers straight to the form endpoint.
    #[default]
    Post,
    /// Open a pre-filled form in the default browser.
    Browser,
}
