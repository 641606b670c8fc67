use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::auth::Session;

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SessionDB {
    pub id: String,
    pub role: String,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}

impl TryFrom<SessionDB> for Session {
    type Error = StorageError;

    fn try_from(db: SessionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            role: db.role.parse()?,
            id: db.id,
            created_at: db.created_at,
            expires_at: db.expires_at,
        })
    }
}

impl From<Session> for SessionDB {
    fn from(domain: Session) -> Self {
        Self {
            id: domain.id,
            role: domain.role.as_str().to_string(),
            created_at: domain.created_at,
            expires_at: domain.expires_at,
        }
    }
}
