//! Database models for push subscriptions.
//!
//! `targets` and `leads` are stored as JSON array text.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use gbti_core::notifications::PushSubscription;

use crate::errors::StorageError;

#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::push_subscriptions)]
#[diesel(primary_key(endpoint))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PushSubscriptionDB {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
    pub targets: String,
    pub leads: String,
    pub user_agent: Option<String>,
    pub timezone: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<PushSubscriptionDB> for PushSubscription {
    type Error = StorageError;

    fn try_from(db: PushSubscriptionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            endpoint: db.endpoint,
            p256dh: db.p256dh,
            auth: db.auth,
            targets: serde_json::from_str(&db.targets)?,
            leads: serde_json::from_str(&db.leads)?,
            user_agent: db.user_agent,
            timezone: db.timezone,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl TryFrom<PushSubscription> for PushSubscriptionDB {
    type Error = StorageError;

    fn try_from(domain: PushSubscription) -> Result<Self, Self::Error> {
        Ok(Self {
            targets: serde_json::to_string(&domain.targets)?,
            leads: serde_json::to_string(&domain.leads)?,
            endpoint: domain.endpoint,
            p256dh: domain.p256dh,
            auth: domain.auth,
            user_agent: domain.user_agent,
            timezone: domain.timezone,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        })
    }
}
