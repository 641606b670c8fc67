use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::members::Member;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MemberDB {
    pub id: String,
    pub name: String,
    pub part: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MemberDB> for Member {
    fn from(db: MemberDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            part: db.part,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<Member> for MemberDB {
    fn from(domain: Member) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            part: domain.part,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}
