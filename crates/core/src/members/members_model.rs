use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a roster member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    /// Free-form role within the group (e.g. "vocal", "drums").
    pub part: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub name: String,
    pub part: Option<String>,
}

impl NewMember {
    pub fn validate(&self) -> Result<()> {
        validate_member_name(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    pub id: String,
    pub name: String,
    pub part: Option<String>,
}

impl MemberUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_member_name(&self.name)
    }
}

fn validate_member_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidInput("Member name cannot be empty".to_string()).into());
    }
    Ok(())
}
