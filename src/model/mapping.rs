use serde::{Deserialize, Serialize};

/// A question discovered on a form page, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub id: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_link: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub issue_title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub progress_note: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hours_spent: String,
}

impl FieldMapping {
    fn slots(&self) -> [&str; 6] {
        [
            &self.date,
            &self.issue_link,
            &self.issue_title,
            &self.progress_note,
            &self.project_name,
            &self.hours_spent,
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.slots().iter().all(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|s| s.is_empty())
    }
}
