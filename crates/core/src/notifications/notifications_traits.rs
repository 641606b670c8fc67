use async_trait::async_trait;

use super::notifications_model::{NewPushSubscription, PushSubscription};
use crate::errors::Result;

#[async_trait]
pub trait PushSubscriptionRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<PushSubscription>>;

    /// Inserts or replaces the subscription for `subscription.endpoint`,
    /// keeping the original `created_at`.
    async fn upsert(&self, subscription: PushSubscription) -> Result<PushSubscription>;

    async fn delete(&self, endpoint: &str) -> Result<usize>;
}

#[async_trait]
pub trait PushSubscriptionServiceTrait: Send + Sync {
    fn get_subscriptions(&self) -> Result<Vec<PushSubscription>>;
    async fn subscribe(&self, subscription: NewPushSubscription) -> Result<PushSubscription>;
    async fn unsubscribe(&self, endpoint: &str) -> Result<usize>;
    fn vapid_public_key(&self) -> Result<String>;
}
