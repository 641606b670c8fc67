//! Database models for calendars.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::calendars::Calendar;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::calendars)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CalendarDB {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Link row between a calendar and a participant.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::calendar_participants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CalendarParticipantDB {
    pub calendar_id: String,
    pub participant_id: String,
    pub created_at: NaiveDateTime,
}

impl From<CalendarDB> for Calendar {
    fn from(db: CalendarDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            color: db.color,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Calendar> for CalendarDB {
    fn from(domain: Calendar) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            color: domain.color,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
