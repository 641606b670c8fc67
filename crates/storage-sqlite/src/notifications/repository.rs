use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use gbti_core::notifications::{PushSubscription, PushSubscriptionRepositoryTrait};
use gbti_core::Result;

use super::model::PushSubscriptionDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::push_subscriptions::{self, dsl};

pub struct PushSubscriptionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl PushSubscriptionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        PushSubscriptionRepository { pool, writer }
    }
}

#[async_trait]
impl PushSubscriptionRepositoryTrait for PushSubscriptionRepository {
    fn list(&self) -> Result<Vec<PushSubscription>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = push_subscriptions::table
            .order(dsl::created_at.asc())
            .select(PushSubscriptionDB::as_select())
            .load(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| PushSubscription::try_from(row).map_err(Into::into))
            .collect()
    }

    async fn upsert(&self, subscription: PushSubscription) -> Result<PushSubscription> {
        let row = PushSubscriptionDB::try_from(subscription)?;
        self.writer
            .exec(move |conn| {
                let saved = diesel::insert_into(push_subscriptions::table)
                    .values(&row)
                    .on_conflict(dsl::endpoint)
                    .do_update()
                    .set((
                        dsl::p256dh.eq(&row.p256dh),
                        dsl::auth.eq(&row.auth),
                        dsl::targets.eq(&row.targets),
                        dsl::leads.eq(&row.leads),
                        dsl::user_agent.eq(&row.user_agent),
                        dsl::timezone.eq(&row.timezone),
                        dsl::updated_at.eq(row.updated_at),
                    ))
                    .returning(PushSubscriptionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(PushSubscription::try_from(saved)?)
            })
            .await
    }

    async fn delete(&self, endpoint: &str) -> Result<usize> {
        let endpoint = endpoint.to_string();
        self.writer
            .exec(move |conn| {
                Ok(diesel::delete(push_subscriptions::table.find(endpoint))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }
}
