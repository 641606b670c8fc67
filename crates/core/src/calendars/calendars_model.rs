//! Calendar domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CALENDAR_COLOR;
use crate::errors::{Result, ValidationError};
use crate::participants::Participant;
use crate::recurring::RecurringSlot;

/// Domain model representing a calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A calendar together with its linked participants and recurring slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDetails {
    #[serde(flatten)]
    pub calendar: Calendar,
    pub members: Vec<Participant>,
    pub recurring_slots: Vec<RecurringSlot>,
}

/// Input model for creating a new calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendar {
    pub name: String,
    pub color: Option<String>,
}

impl NewCalendar {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

/// Input model for updating an existing calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarUpdate {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
}

impl CalendarUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::InvalidInput("Calendar name cannot be empty".to_string()).into());
    }
    Ok(())
}

/// Falls back to the default color when none (or a blank one) is given.
pub fn resolve_color(color: Option<&str>) -> String {
    color
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CALENDAR_COLOR)
        .to_string()
}
