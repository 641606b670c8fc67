use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::members::{Member, MemberRepositoryTrait};
use gbti_core::Result;

use super::model::MemberDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::members;

pub struct MemberRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MemberRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        MemberRepository { pool, writer }
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    fn list(&self) -> Result<Vec<Member>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = members::table
            .order((members::name.asc(), members::id.asc()))
            .select(MemberDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn insert(&self, member: Member) -> Result<Member> {
        self.writer
            .exec(move |conn| {
                let row = diesel::insert_into(members::table)
                    .values(MemberDB::from(member))
                    .returning(MemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn update(
        &self,
        member_id: &str,
        name: &str,
        part: Option<String>,
        updated_at: NaiveDateTime,
    ) -> Result<Member> {
        let member_id = member_id.to_string();
        let name = name.to_string();
        self.writer
            .exec(move |conn| {
                let row = diesel::update(members::table.find(member_id))
                    .set((
                        members::name.eq(name),
                        members::part.eq(part),
                        members::updated_at.eq(updated_at),
                    ))
                    .returning(MemberDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(row.into())
            })
            .await
    }

    async fn delete(&self, member_id: &str) -> Result<usize> {
        let member_id = member_id.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(members::table.find(member_id))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
