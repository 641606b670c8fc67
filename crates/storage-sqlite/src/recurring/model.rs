//! Database models for recurring slots.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::recurring::RecurringSlot;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::recurring_slots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RecurringSlotDB {
    pub id: String,
    pub calendar_id: String,
    pub day_of_week: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub event_title: String,
    pub event_start_date: NaiveDateTime,
    pub starts_on: NaiveDateTime,
    pub ends_on: Option<NaiveDateTime>,
    /// JSON array text, kept as stored.
    pub participant_names: Option<String>,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<RecurringSlotDB> for RecurringSlot {
    fn from(db: RecurringSlotDB) -> Self {
        Self {
            id: db.id,
            calendar_id: db.calendar_id,
            day_of_week: db.day_of_week,
            start_minutes: db.start_minutes,
            end_minutes: db.end_minutes,
            event_title: db.event_title,
            event_start_date: db.event_start_date,
            starts_on: db.starts_on,
            ends_on: db.ends_on,
            participant_names: db.participant_names,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<RecurringSlot> for RecurringSlotDB {
    fn from(domain: RecurringSlot) -> Self {
        Self {
            id: domain.id,
            calendar_id: domain.calendar_id,
            day_of_week: domain.day_of_week,
            start_minutes: domain.start_minutes,
            end_minutes: domain.end_minutes,
            event_title: domain.event_title,
            event_start_date: domain.event_start_date,
            starts_on: domain.starts_on,
            ends_on: domain.ends_on,
            participant_names: domain.participant_names,
            color: domain.color,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
