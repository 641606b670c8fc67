use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::calendars::{Calendar, CalendarRepositoryTrait};
use gbti_core::participants::Participant;
use gbti_core::Result;

use super::model::{CalendarDB, CalendarParticipantDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::participants::{find_or_insert_participant, ParticipantDB};
use crate::schema::{calendar_participants, calendars, participants};

pub struct CalendarRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl CalendarRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        CalendarRepository { pool, writer }
    }
}

#[async_trait]
impl CalendarRepositoryTrait for CalendarRepository {
    fn list(&self) -> Result<Vec<Calendar>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = calendars::table
            .order((calendars::created_at.asc(), calendars::id.asc()))
            .select(CalendarDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Calendar::from).collect())
    }

    fn get_by_id(&self, calendar_id: &str) -> Result<Calendar> {
        let mut conn = get_connection(&self.pool)?;
        let row = calendars::table
            .find(calendar_id)
            .select(CalendarDB::as_select())
            .first(&mut conn)
            .map_err(StorageError::from)?;
        Ok(row.into())
    }

    async fn insert(&self, calendar: Calendar) -> Result<Calendar> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(calendars::table)
                    .values(CalendarDB::from(calendar))
                    .returning(CalendarDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn update(
        &self,
        calendar_id: &str,
        name: &str,
        color: &str,
        updated_at: NaiveDateTime,
    ) -> Result<Calendar> {
        let calendar_id = calendar_id.to_string();
        let name = name.to_string();
        let color = color.to_string();
        self.writer
            .exec(move |conn| {
                let row = diesel::update(calendars::table.find(&calendar_id))
                    .set((
                        calendars::name.eq(&name),
                        calendars::color.eq(&color),
                        calendars::updated_at.eq(updated_at),
                    ))
                    .returning(CalendarDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, calendar_id: &str) -> Result<usize> {
        let calendar_id = calendar_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(calendars::table.find(calendar_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_members(&self) -> Result<Vec<(String, Participant)>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = calendar_participants::table
            .inner_join(participants::table)
            .order((participants::name.asc(), participants::id.asc()))
            .select((
                calendar_participants::calendar_id,
                ParticipantDB::as_select(),
            ))
            .load::<(String, ParticipantDB)>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows
            .into_iter()
            .map(|(calendar_id, participant)| (calendar_id, participant.into()))
            .collect())
    }

    async fn link_participant(
        &self,
        calendar_id: &str,
        participant_name: String,
    ) -> Result<Participant> {
        let calendar_id = calendar_id.to_string();
        self.writer
            .exec(move |conn| {
                let participant = find_or_insert_participant(conn, &participant_name)?;
                diesel::insert_into(calendar_participants::table)
                    .values(CalendarParticipantDB {
                        calendar_id,
                        participant_id: participant.id.clone(),
                        created_at: Utc::now().naive_utc(),
                    })
                    .on_conflict((
                        calendar_participants::calendar_id,
                        calendar_participants::participant_id,
                    ))
                    .do_nothing()
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(participant.into())
            })
            .await
    }

    async fn unlink_participant(&self, calendar_id: &str, participant_id: &str) -> Result<usize> {
        let calendar_id = calendar_id.to_string();
        let participant_id = participant_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(
                    calendar_participants::table
                        .filter(calendar_participants::calendar_id.eq(calendar_id))
                        .filter(calendar_participants::participant_id.eq(participant_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }
}
