use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::notices::{Notice, NoticeRepositoryTrait};
use gbti_core::Result;

use super::model::NoticeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::notices;

pub struct NoticeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl NoticeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        NoticeRepository { pool, writer }
    }
}

#[async_trait]
impl NoticeRepositoryTrait for NoticeRepository {
    fn list(&self) -> Result<Vec<Notice>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = notices::table
            .order((notices::created_at.desc(), notices::id.desc()))
            .select(NoticeDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Notice::from).collect())
    }

    async fn insert(&self, notice: Notice) -> Result<Notice> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(notices::table)
                    .values(NoticeDB::from(notice))
                    .returning(NoticeDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, notice_id: &str) -> Result<usize> {
        let notice_id = notice_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(notices::table.find(notice_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
