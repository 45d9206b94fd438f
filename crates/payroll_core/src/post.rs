use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A published post as returned by the WordPress REST API.
///
/// Only the fields payroll needs are kept; everything else in the feed is
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Publication date in the site's local time (no offset in the feed).
    pub date: NaiveDateTime,
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub custom_fields: CustomFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomFields {
    #[serde(default)]
    pub writer: Vec<String>,
    #[serde(default)]
    pub jobtitle: Vec<String>,
}

impl Post {
    /// Job title recorded on the post; the first entry wins.
    pub fn job_title(&self) -> &str {
        self.custom_fields
            .jobtitle
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn writers(&self) -> impl Iterator<Item = &str> {
        self.custom_fields.writer.iter().map(String::as_str)
    }
}
