use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::notices::Notice;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::notices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NoticeDB {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub author: String,
    pub created_at: NaiveDateTime,
}

impl From<NoticeDB> for Notice {
    fn from(db: NoticeDB) -> Self {
        Self {
            id: db.id,
            title: db.title,
            content: db.content,
            image_url: db.image_url,
            author: db.author,
            created_at: db.created_at,
        }
    }
}

impl From<Notice> for NoticeDB {
    fn from(domain: Notice) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            content: domain.content,
            image_url: domain.image_url,
            author: domain.author,
            created_at: domain.created_at,
        }
    }
}
