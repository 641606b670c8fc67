use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// A browser push subscription, keyed by its endpoint URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PushSubscription {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    /// Calendar ids (or participant names) the subscriber follows.
    pub targets: Vec<String>,
    /// Minutes before an occurrence at which to notify.
    pub leads: Vec<i32>,
    pub user_agent: Option<String>,
    pub timezone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPushSubscription {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    #[serde(default)]
    pub targets: Vec<String>,
    #[serde(default)]
    pub leads: Vec<i32>,
    pub user_agent: Option<String>,
    pub timezone: Option<String>,
}

impl NewPushSubscription {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("endpoint", &self.endpoint),
            ("keys.p256dh", &self.p256dh),
            ("keys.auth", &self.auth),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field.to_string()).into());
            }
        }
        if let Some(lead) = self.leads.iter().find(|l| **l < 0) {
            return Err(ValidationError::OutOfRange {
                field: "leads".to_string(),
                value: i64::from(*lead),
            }
            .into());
        }
        Ok(())
    }
}
