use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::auth::{Session, SessionRepositoryTrait};
use gbti_core::Result;

use super::model::SessionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::sessions;

pub struct SessionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SessionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        SessionRepository { pool, writer }
    }
}

#[async_trait]
impl SessionRepositoryTrait for SessionRepository {
    async fn insert(&self, session: Session) -> Result<()> {
        self.writer
            .exec(move |conn| {
                diesel::insert_into(sessions::table)
                    .values(SessionDB::from(session))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    fn get(&self, session_id: &str) -> Result<Option<Session>> {
        let mut conn = get_connection(&self.pool)?;
        let row = sessions::table
            .find(session_id)
            .select(SessionDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(|r| Session::try_from(r).map_err(Into::into))
            .transpose()
    }

    async fn delete(&self, session_id: &str) -> Result<usize> {
        let session_id = session_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(sessions::table.find(session_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete_expired(&self, now: NaiveDateTime) -> Result<usize> {
        self.writer
            .exec(move |conn| {
                Ok(
                    diesel::delete(sessions::table.filter(sessions::expires_at.le(now)))
                        .execute(conn)
                        .map_err(StorageError::from)?,
                )
            })
            .await
    }
}
