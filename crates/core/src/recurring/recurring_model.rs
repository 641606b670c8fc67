//! Recurring slot domain models.

use chrono::NaiveDateTime;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::MINUTES_PER_DAY;
use crate::errors::{Result, ValidationError};

/// A weekly commitment on a calendar.
///
/// `event_start_date` is the anchor: the next occurrence is computed from it,
/// and it is overwritten (never derived) when an occurrence has passed.
/// `participant_names` holds the serialized JSON array exactly as stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSlot {
    pub id: String,
    pub calendar_id: String,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub event_title: String,
    pub event_start_date: NaiveDateTime,
    pub starts_on: NaiveDateTime,
    pub ends_on: Option<NaiveDateTime>,
    pub participant_names: Option<String>,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl RecurringSlot {
    /// Decoded participant names; empty when none were recorded.
    pub fn participants(&self) -> Vec<String> {
        decode_participant_names(self.participant_names.as_deref())
    }
}

/// Input model for creating a recurring slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecurringSlot {
    pub calendar_id: String,
    pub day_of_week: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub event_title: Option<String>,
}

impl NewRecurringSlot {
    /// Checks the weekday and that both times fall within one day.
    ///
    /// `start_minutes < end_minutes` is left to the caller.
    pub fn validate(&self) -> Result<()> {
        if !(0..=6).contains(&self.day_of_week) {
            return Err(ValidationError::OutOfRange {
                field: "dayOfWeek".to_string(),
                value: i64::from(self.day_of_week),
            }
            .into());
        }
        for (field, value) in [
            ("startMinutes", self.start_minutes),
            ("endMinutes", self.end_minutes),
        ] {
            if !(0..=MINUTES_PER_DAY).contains(&value) {
                return Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value: i64::from(value),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Rename + participant replacement for slots on one calendar.
///
/// With `slot_id` the update targets that single slot. Without it every slot
/// on the calendar titled `event_title` is updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSlotUpdate {
    pub calendar_id: String,
    pub slot_id: Option<String>,
    pub event_title: String,
    pub new_title: String,
    pub participants: Vec<String>,
}

/// New anchor for a slot, supplied by whoever materialized the last occurrence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorUpdate {
    pub slot_id: String,
    pub event_start_date: NaiveDateTime,
}

/// A concrete dated instance of a recurring slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub slot_id: String,
    pub calendar_id: String,
    pub title: String,
    pub participants: Vec<String>,
    pub color: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Serializes participant names for storage.
///
/// An empty list is stored as `None`, the same as "never set".
pub fn encode_participant_names(names: &[String]) -> Result<Option<String>> {
    if names.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string(names)?))
}

/// Reads stored participant names.
///
/// `None`, blank text, and unparseable text all mean "no participants recorded".
pub fn decode_participant_names(raw: Option<&str>) -> Vec<String> {
    let Some(text) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Option<Vec<String>>>(text) {
        Ok(names) => names.unwrap_or_default(),
        Err(e) => {
            warn!("Ignoring malformed participant names '{}': {}", text, e);
            Vec::new()
        }
    }
}
