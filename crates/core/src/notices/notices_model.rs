use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An announcement. Immutable once posted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub created_at: NaiveDateTime,
}

/// Input model for posting a notice. Empty title/content are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: Option<String>,
}
