//! Database models for participants.

use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::participants)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ParticipantDB {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<ParticipantDB> for gbti_core::participants::Participant {
    fn from(db: ParticipantDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            created_at: db.created_at,
        }
    }
}
