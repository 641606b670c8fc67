use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::recurring::{RecurringSlot, RecurringSlotRepositoryTrait};
use gbti_core::Result;

use super::model::RecurringSlotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::recurring_slots::{self, dsl};

pub struct RecurringSlotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl RecurringSlotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        RecurringSlotRepository { pool, writer }
    }

    fn load(&self, calendar_id: Option<&str>) -> Result<Vec<RecurringSlot>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = recurring_slots::table
            .select(RecurringSlotDB::as_select())
            .order((
                dsl::day_of_week.asc(),
                dsl::start_minutes.asc(),
                dsl::created_at.asc(),
            ))
            .into_boxed();
        if let Some(calendar_id) = calendar_id {
            query = query.filter(dsl::calendar_id.eq(calendar_id.to_string()));
        }
        let rows = query.load(&mut conn).map_err(StorageError::from)?;
        Ok(rows.into_iter().map(RecurringSlot::from).collect())
    }
}

#[async_trait]
impl RecurringSlotRepositoryTrait for RecurringSlotRepository {
    fn list_for_calendar(&self, calendar_id: &str) -> Result<Vec<RecurringSlot>> {
        self.load(Some(calendar_id))
    }

    fn list_all(&self) -> Result<Vec<RecurringSlot>> {
        self.load(None)
    }

    async fn insert(&self, slot: RecurringSlot) -> Result<RecurringSlot> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(recurring_slots::table)
                    .values(RecurringSlotDB::from(slot))
                    .returning(RecurringSlotDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn update_by_title(
        &self,
        calendar_id: &str,
        event_title: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize> {
        let calendar_id = calendar_id.to_string();
        let event_title = event_title.to_string();
        let new_title = new_title.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::update(
                    recurring_slots::table
                        .filter(dsl::calendar_id.eq(calendar_id))
                        .filter(dsl::event_title.eq(event_title)),
                )
                .set((
                    dsl::event_title.eq(new_title),
                    dsl::participant_names.eq(participant_names),
                    dsl::updated_at.eq(updated_at),
                ))
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn update_by_id(
        &self,
        calendar_id: &str,
        slot_id: &str,
        new_title: &str,
        participant_names: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<usize> {
        let calendar_id = calendar_id.to_string();
        let slot_id = slot_id.to_string();
        let new_title = new_title.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::update(
                    recurring_slots::table
                        .filter(dsl::id.eq(slot_id))
                        .filter(dsl::calendar_id.eq(calendar_id)),
                )
                .set((
                    dsl::event_title.eq(new_title),
                    dsl::participant_names.eq(participant_names),
                    dsl::updated_at.eq(updated_at),
                ))
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn delete(&self, calendar_id: &str, slot_id: &str) -> Result<usize> {
        let calendar_id = calendar_id.to_string();
        let slot_id = slot_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(
                    recurring_slots::table
                        .filter(dsl::id.eq(slot_id))
                        .filter(dsl::calendar_id.eq(calendar_id)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    async fn set_anchor(&self, slot_id: &str, event_start_date: NaiveDateTime) -> Result<usize> {
        let slot_id = slot_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::update(recurring_slots::table.find(slot_id))
                    .set(dsl::event_start_date.eq(event_start_date))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
