// file: src/models/issue.rs
// description: issue record model as produced by the dataset loader
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// A single issue-tracker record. Every field is optional in the source
/// data; `null` and missing values are both treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub number: Option<u64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub body: Option<String>,

    /// Dataset exports name the body `text`; preferred over `body` when
    /// both are present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default)]
    pub state: Option<String>,

    #[serde(default, alias = "html_url")]
    pub url: Option<String>,
}

impl Issue {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
            ..Self::default()
        }
    }

    pub fn with_number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn body(&self) -> &str {
        self.text
            .as_deref()
            .or(self.body.as_deref())
            .unwrap_or("")
    }

    /// Title and body joined the way the extractor searches them.
    pub fn full_text(&self) -> String {
        format!("{}. {}", self.title(), self.body())
    }
}
