use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;
use uuid::Uuid;

use gbti_core::participants::{Participant, ParticipantRepositoryTrait};
use gbti_core::Result;

use super::model::ParticipantDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::participants;

/// Inserts a participant named `name` unless one exists, then reads it back.
///
/// The insert is a single `ON CONFLICT DO NOTHING` statement keyed on the
/// unique name, so concurrent callers end up sharing one row.
pub fn find_or_insert_participant(conn: &mut SqliteConnection, name: &str) -> Result<ParticipantDB> {
    let candidate = ParticipantDB {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        created_at: Utc::now().naive_utc(),
    };
    diesel::insert_into(participants::table)
        .values(&candidate)
        .on_conflict(participants::name)
        .do_nothing()
        .execute(conn)
        .map_err(StorageError::from)?;

    Ok(participants::table
        .filter(participants::name.eq(name))
        .select(ParticipantDB::as_select())
        .first(conn)
        .map_err(StorageError::from)?)
}

pub struct ParticipantRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ParticipantRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ParticipantRepository { pool, writer }
    }
}

#[async_trait]
impl ParticipantRepositoryTrait for ParticipantRepository {
    fn list(&self) -> Result<Vec<Participant>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = participants::table
            .order(participants::name.asc())
            .select(ParticipantDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Participant::from).collect())
    }

    async fn find_or_create(&self, name: String) -> Result<Participant> {
        self.writer
            .exec(move |conn| find_or_insert_participant(conn, &name).map(Participant::from))
            .await
    }
}
